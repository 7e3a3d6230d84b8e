pub mod constants;
mod context;
mod cors;
mod headers;
mod options;
mod policy_headers;
mod result;
mod util;

pub use context::RequestContext;
pub use cors::Cors;
pub use headers::{HeaderSink, Headers};
pub use options::{CorsOptions, ValidationError};
pub use result::CorsDecision;
