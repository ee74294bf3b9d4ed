//! Route modules and the application router.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod scale;
pub mod settings;

/// Builds the full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(health::router())
                .merge(settings::router())
                .merge(scale::router()),
        )
        .with_state(state)
}
