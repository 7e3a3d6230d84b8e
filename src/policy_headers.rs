use crate::constants::{DEFAULT_ALLOW_HEADERS, DEFAULT_ALLOW_METHODS, header};
use crate::context::RequestContext;
use crate::headers::HeaderSink;
use crate::options::CorsOptions;

/// Header values rendered once from [`CorsOptions`].
///
/// Every list is joined at construction so that writing headers for a
/// request never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PolicyHeaders {
    allow_origin: Option<String>,
    allow_credentials: bool,
    expose_headers: Option<String>,
    allow_methods: Option<String>,
    allow_headers: Option<String>,
    max_age: Option<String>,
}

impl PolicyHeaders {
    pub(crate) fn new(options: &CorsOptions) -> Self {
        let allow_methods = match &options.allow_methods {
            Some(methods) => join_non_empty(methods, ","),
            None => Some(DEFAULT_ALLOW_METHODS.join(",")),
        };
        let allow_headers = match &options.allow_headers {
            Some(headers) => join_non_empty(headers, ","),
            None => Some(DEFAULT_ALLOW_HEADERS.join(",")),
        };
        let max_age = if options.max_age.is_zero() {
            None
        } else {
            Some(options.max_age.as_secs().to_string())
        };

        Self {
            // Multiple origins are emitted space-separated in a single value.
            allow_origin: join_non_empty(&options.allow_origins, " "),
            allow_credentials: options.allow_credentials,
            expose_headers: join_non_empty(&options.expose_headers, ","),
            allow_methods,
            allow_headers,
            max_age,
        }
    }

    /// Headers attached to every cross-origin response.
    pub(crate) fn write_origin_headers<S: HeaderSink + ?Sized>(
        &self,
        origin: &str,
        sink: &mut S,
    ) {
        let allow_origin = self.allow_origin.as_deref().unwrap_or(origin);
        sink.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);

        if self.allow_credentials {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }

        if let Some(value) = &self.expose_headers {
            sink.set_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    /// Headers only sent in answer to an `OPTIONS` preflight.
    pub(crate) fn write_preflight_headers<S: HeaderSink + ?Sized>(
        &self,
        request: &RequestContext<'_>,
        sink: &mut S,
    ) {
        if let Some(value) = self
            .allow_methods
            .as_deref()
            .or_else(|| request.requested_method())
        {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }

        if let Some(value) = self
            .allow_headers
            .as_deref()
            .or_else(|| request.requested_headers())
        {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }

        if let Some(value) = &self.max_age {
            sink.set_header(header::ACCESS_CONTROL_MAX_AGE, value);
        }
    }

    pub(crate) fn reflects_origin(&self) -> bool {
        self.allow_origin.is_none()
    }
}

fn join_non_empty(values: &[String], separator: &str) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(separator))
    }
}

#[cfg(test)]
#[path = "policy_headers_test.rs"]
mod policy_headers_test;
