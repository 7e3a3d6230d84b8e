use crate::constants::method;
use crate::util::non_empty;

/// Borrowed view of the parts of an inbound request the filter reads.
///
/// Headers that are missing or empty are both represented as "absent".
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn origin(&self) -> Option<&'a str> {
        non_empty(self.origin)
    }

    pub fn requested_method(&self) -> Option<&'a str> {
        non_empty(self.access_control_request_method)
    }

    pub fn requested_headers(&self) -> Option<&'a str> {
        non_empty(self.access_control_request_headers)
    }

    /// Methods are case-sensitive, so `options` is not a preflight.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}
