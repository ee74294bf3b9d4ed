//! Routes for settings generation.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use tracing::{info, instrument};
use uuid::Uuid;

use storyseed_wizard::application::command_handlers;
use storyseed_wizard::domain::settings::{GenerateSettingsRequest, GenerateSettingsResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /generateSettings
#[instrument(skip(state, request), fields(feels = request.feel_choices.len()))]
async fn generate_settings(
    State(state): State<AppState>,
    Json(request): Json<GenerateSettingsRequest>,
) -> Result<Json<GenerateSettingsResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling generate_settings command");

    let response =
        command_handlers::handle_generate_settings(&request, state.generator.as_ref()).await?;

    Ok(Json(response))
}

/// Returns the router for settings generation.
pub fn router() -> Router<AppState> {
    Router::new().route("/generateSettings", post(generate_settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use storyseed_core::error::DomainError;
    use storyseed_scale::domain::rules::RuleBook;
    use storyseed_wizard::application::generator::{DraftSettingsGenerator, SettingsGenerator};
    use tower::ServiceExt;

    struct FailingGenerator;

    #[async_trait]
    impl SettingsGenerator for FailingGenerator {
        async fn generate(
            &self,
            _request: &GenerateSettingsRequest,
        ) -> Result<GenerateSettingsResponse, DomainError> {
            Err(DomainError::Infrastructure("connection refused".into()))
        }
    }

    fn app_state_with(generator: Arc<dyn SettingsGenerator>) -> AppState {
        AppState::new(Arc::new(RuleBook::builtin()), generator)
    }

    fn post(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generateSettings")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn json_of(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_settings_returns_200_with_content() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(DraftSettingsGenerator)));
        let body = serde_json::json!({
            "feel_choices": ["Noir", "Gothic", "Horror"],
            "story_draws": ["Mystery", "Humor"],
            "inspirations": ["Dracula"],
        });

        // Act
        let response = app.oneshot(post(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["generated_content"]["story_title"],
            "Adventure in Noir, Gothic"
        );
        assert_eq!(json["generated_content"]["inspirations_used"][0], "Dracula");
    }

    #[tokio::test]
    async fn test_generate_settings_returns_422_for_missing_fields() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(DraftSettingsGenerator)));

        // Act
        let response = app.oneshot(post(&serde_json::json!({}))).await.unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_generate_settings_returns_400_for_empty_feels() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(DraftSettingsGenerator)));
        let body = serde_json::json!({ "feel_choices": [], "story_draws": [] });

        // Act
        let response = app.oneshot(post(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_generate_settings_returns_500_when_generator_fails() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(FailingGenerator)));
        let body = serde_json::json!({ "feel_choices": ["Noir"], "story_draws": [] });

        // Act
        let response = app.oneshot(post(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_of(response).await["error"], "infrastructure_error");
    }
}
