//! Integration tests for scale resolution.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use storyseed_scale::domain::rules::RuleBook;
use storyseed_wizard::application::generator::DraftSettingsGenerator;

#[tokio::test]
async fn test_scale_choices_for_no_feels_returns_generic_levels() {
    let app = common::build_test_app();

    let (status, json) =
        common::post_json(app, "/api/scaleChoices", &serde_json::json!({ "feels": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["choices"],
        serde_json::json!(["World", "Region", "City", "Town", "Building"])
    );
    assert_eq!(json["levels"][0]["level"], "planet");
    assert_eq!(json["levels"][0]["rank"], 20);
}

#[tokio::test]
async fn test_scale_choices_applies_absence_markers() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/scaleChoices",
        &serde_json::json!({ "feels": ["Magical Realism"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let levels: Vec<&str> = json["levels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|level| level["level"].as_str().unwrap())
        .collect();
    assert_eq!(levels, ["nation_state", "city", "town", "site", "building"]);
}

#[tokio::test]
async fn test_scale_choices_ignores_unknown_feels() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/scaleChoices",
        &serde_json::json!({ "feels": ["Cozy"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["feels"][0], "Cozy");
    assert_eq!(json["choices"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_scale_choices_uses_loaded_rule_book() {
    let book =
        RuleBook::from_yaml("generic:\n  city: Burg\nfeels:\n  Cozy:\n    town: Hamlet\n")
            .unwrap();
    let app = common::build_test_app_with(book, Arc::new(DraftSettingsGenerator));

    let (status, json) = common::post_json(
        app,
        "/api/scaleChoices",
        &serde_json::json!({ "feels": ["Cozy"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["choices"], serde_json::json!(["Burg", "Hamlet"]));
}
