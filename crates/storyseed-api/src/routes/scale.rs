//! Routes for the Scale bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{debug, instrument};

use storyseed_scale::application::query_handlers::{self, ScaleChoicesView};

use crate::state::AppState;

/// Request body for POST /scaleChoices.
#[derive(Debug, Deserialize)]
pub struct ScaleChoicesRequest {
    /// Selected feels, in pick order.
    pub feels: Vec<String>,
}

/// POST /scaleChoices
#[instrument(skip(state, request), fields(feels = request.feels.len()))]
async fn scale_choices(
    State(state): State<AppState>,
    Json(request): Json<ScaleChoicesRequest>,
) -> Json<ScaleChoicesView> {
    let view = query_handlers::get_scale_choices(&request.feels, &state.rule_book);
    debug!(levels = view.levels.len(), "resolved scale choices");
    Json(view)
}

/// Returns the router for the scale context.
pub fn router() -> Router<AppState> {
    Router::new().route("/scaleChoices", post(scale_choices))
}
