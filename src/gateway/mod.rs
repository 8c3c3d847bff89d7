pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Start the HTTP gateway server. Runs until the process is stopped.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/currencies",
            get(handlers::get_currencies)
                .post(handlers::create_currency)
                .put(handlers::update_currency),
        )
        .route("/exchanges", post(handlers::create_exchange))
        .route("/exchanges/{from}/{to}", get(handlers::get_rate));

    let app = Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
        // Swagger UI is stateless, merged after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .context("Gateway server error")
}
