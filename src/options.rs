use crate::constants::status;
use crate::util::{is_header_value_safe, is_http_token};
use std::time::Duration;
use thiserror::Error;

/// Configuration consumed by [`crate::Cors`].
///
/// `allow_methods` and `allow_headers` distinguish "unset" (`None`, use the
/// built-in defaults) from "explicitly empty" (`Some(vec![])`, echo whatever
/// the preflight request asked for).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    /// Empty means any origin that sent the request is reflected back.
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Option<Vec<String>>,
    pub allow_headers: Option<Vec<String>>,
    pub expose_headers: Vec<String>,
    /// Only emitted on preflight responses, in whole seconds.
    pub max_age: Duration,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            allow_credentials: false,
            allow_methods: None,
            allow_headers: None,
            expose_headers: Vec::new(),
            max_age: Duration::ZERO,
            options_success_status: status::OK,
        }
    }
}

/// Configuration errors detected when building a [`crate::Cors`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origin entries must not be empty")]
    EmptyOrigin,
    #[error("allowed origin {0:?} contains characters that are not valid in a header value")]
    InvalidOrigin(String),
    #[error("allowed method {0:?} is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header {0:?} is not a valid HTTP header name")]
    InvalidAllowHeader(String),
    #[error("exposed header {0:?} is not a valid HTTP header name")]
    InvalidExposeHeader(String),
    #[error("preflight success status must be in the 2xx range, got {0}")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    /// Checks that every configured value renders into a legal header.
    ///
    /// Reflecting arbitrary origins while allowing credentials is accepted
    /// here; browsers reject that combination on their side.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for origin in &self.allow_origins {
            if origin.is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if !is_header_value_safe(origin) {
                return Err(ValidationError::InvalidOrigin(origin.clone()));
            }
        }

        if let Some(methods) = &self.allow_methods
            && let Some(invalid) = methods.iter().find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let Some(headers) = &self.allow_headers
            && let Some(invalid) = headers.iter().find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidAllowHeader(invalid.clone()));
        }

        if let Some(invalid) = self.expose_headers.iter().find(|name| !is_http_token(name)) {
            return Err(ValidationError::InvalidExposeHeader(invalid.clone()));
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }

    /// True when any request origin is echoed back while credentials are on.
    pub(crate) fn reflects_origin_with_credentials(&self) -> bool {
        self.allow_credentials && self.allow_origins.is_empty()
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
