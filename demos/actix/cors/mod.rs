use std::sync::Arc;
use std::time::Duration;

use cors_filter_rs::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Permissive policy: any origin is reflected and the request's own
/// preflight method and headers are echoed back.
pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        allow_methods: Some(Vec::new()),
        allow_headers: Some(Vec::new()),
        expose_headers: vec!["X-Example-Trace".into()],
        max_age: Duration::from_secs(3600),
        ..CorsOptions::default()
    };

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Actix Web CORS example!",
    })
}

pub mod middleware;
