mod cors;
mod routes;

use actix_web::{App, HttpServer, web};
use cors::middleware::CorsFilter;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cors_filter_rs=trace")),
        )
        .init();

    let app_state = cors::build_state()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    tracing::info!("Actix Web example running on http://127.0.0.1:5002");

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(CorsFilter::new(state.cors.clone()))
            .route("/greet", web::get().to(routes::greet))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
