//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use storyseed_scale::domain::rules::RuleBook;
use storyseed_wizard::application::generator::{DraftSettingsGenerator, SettingsGenerator};
use tower::ServiceExt;

use storyseed_api::routes;
use storyseed_api::state::AppState;

/// Build the full app router with the built-in rule book and the draft
/// generator. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(RuleBook::builtin(), Arc::new(DraftSettingsGenerator))
}

/// Build the full app router with a custom rule book and generator.
pub fn build_test_app_with(rule_book: RuleBook, generator: Arc<dyn SettingsGenerator>) -> Router {
    routes::app_router(AppState::new(Arc::new(rule_book), generator))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
