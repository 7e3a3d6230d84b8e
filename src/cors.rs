use crate::context::RequestContext;
use crate::headers::{HeaderSink, Headers};
use crate::options::{CorsOptions, ValidationError};
use crate::policy_headers::PolicyHeaders;
use crate::result::CorsDecision;
use tracing::{debug, trace, warn};

/// CORS policy filter built once from [`CorsOptions`] and shared read-only
/// across requests.
#[derive(Debug, Clone)]
pub struct Cors {
    headers: PolicyHeaders,
    options_success_status: u16,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        if options.reflects_origin_with_credentials() {
            warn!(
                "CORS: credentials are allowed while every request origin is reflected; \
                 configure allow_origins to restrict which sites may send credentials"
            );
        }

        let headers = PolicyHeaders::new(&options);
        debug!(
            allow_origins = ?options.allow_origins,
            allow_credentials = options.allow_credentials,
            allow_methods = ?options.allow_methods,
            allow_headers = ?options.allow_headers,
            expose_headers = ?options.expose_headers,
            max_age_secs = options.max_age.as_secs(),
            "CORS: policy constructed"
        );

        Ok(Self {
            headers,
            options_success_status: options.options_success_status,
        })
    }

    /// Writes the CORS headers for `request` into `sink` and tells the caller
    /// whether to continue to the next handler.
    ///
    /// Requests without an `Origin` header are left untouched. An `OPTIONS`
    /// request carrying an `Origin` is answered here and never reaches
    /// downstream handlers.
    pub fn apply<S: HeaderSink + ?Sized>(
        &self,
        request: &RequestContext<'_>,
        sink: &mut S,
    ) -> CorsDecision {
        let Some(origin) = request.origin() else {
            trace!(method = request.method, "CORS: no origin, passing through");
            return CorsDecision::Continue;
        };

        self.headers.write_origin_headers(origin, sink);

        if request.is_preflight() {
            self.headers.write_preflight_headers(request, sink);
            trace!(
                origin,
                requested_method = request.requested_method(),
                status = self.options_success_status,
                "CORS: preflight answered"
            );
            CorsDecision::Terminate(self.options_success_status)
        } else {
            trace!(
                origin,
                method = request.method,
                reflected = self.headers.reflects_origin(),
                "CORS: headers attached"
            );
            CorsDecision::Continue
        }
    }

    /// Same as [`Cors::apply`], collecting the headers into a fresh map.
    pub fn check(&self, request: &RequestContext<'_>) -> (CorsDecision, Headers) {
        let mut headers = Headers::new();
        let decision = self.apply(request, &mut headers);
        (decision, headers)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
