use std::sync::Arc;
use std::time::Duration;

use cors_filter_rs::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        allow_origins: vec!["http://localhost:3000".into()],
        allow_credentials: true,
        allow_methods: Some(vec!["GET".into(), "POST".into()]),
        allow_headers: Some(vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ]),
        expose_headers: vec!["X-Example-Trace".into()],
        max_age: Duration::from_secs(600),
        ..CorsOptions::default()
    };

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
