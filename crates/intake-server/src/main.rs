use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("INTAKE_BUCKET").unwrap_or_else(|_| "intake".to_string());
    let bind = env::var("INTAKE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let s3 = intake_storage::client::build_client().await;
    let state = AppState { s3, bucket };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Form schemas — public data consumed by the browser UI
        .route("/forms", get(routes::forms::list_forms))
        .route("/forms/{id}", get(routes::forms::get_form_detail))
        // The submission endpoint
        .route("/submissions", post(routes::submissions::create_submission))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "intake server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
