//! Storyseed API server entry point.

use std::error::Error;
use std::sync::Arc;

use storyseed_api::config::Config;
use storyseed_api::routes;
use storyseed_api::state::AppState;
use storyseed_wizard::application::generator::DraftSettingsGenerator;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Storyseed API server");

    // Read configuration from environment.
    let config = Config::from_env()?;
    let rule_book = config.load_rule_book()?;
    tracing::info!(
        rules_path = ?config.scale_rules_path,
        feels = rule_book.feel_count(),
        "scale rule book loaded"
    );

    // Build application state.
    let app_state = AppState::new(Arc::new(rule_book), Arc::new(DraftSettingsGenerator));

    // Build router.
    let app = routes::app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer()?);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
