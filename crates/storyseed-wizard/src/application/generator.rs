//! Settings generator seam.

use async_trait::async_trait;
use storyseed_core::error::DomainError;

use crate::domain::settings::{GenerateSettingsRequest, GenerateSettingsResponse, GeneratedContent};

/// Something that turns a completed wizard into a story setting.
#[async_trait]
pub trait SettingsGenerator: Send + Sync {
    /// Generates a setting for `request`. Called once per submission.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the generator is unreachable
    /// or fails.
    async fn generate(
        &self,
        request: &GenerateSettingsRequest,
    ) -> Result<GenerateSettingsResponse, DomainError>;
}

/// Placeholder generator that fills the response from the request alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftSettingsGenerator;

#[async_trait]
impl SettingsGenerator for DraftSettingsGenerator {
    async fn generate(
        &self,
        request: &GenerateSettingsRequest,
    ) -> Result<GenerateSettingsResponse, DomainError> {
        Ok(GenerateSettingsResponse {
            success: true,
            message: "Settings generated successfully (draft)".to_owned(),
            generated_content: draft_content(request),
        })
    }
}

fn draft_content(request: &GenerateSettingsRequest) -> GeneratedContent {
    let leading_feels: Vec<&str> = request
        .feel_choices
        .iter()
        .take(2)
        .map(String::as_str)
        .collect();

    let mut extra = serde_json::Map::new();
    if let Some(scale) = &request.scale {
        extra.insert("scale".to_owned(), serde_json::Value::String(scale.clone()));
    }

    GeneratedContent {
        story_title: format!("Adventure in {}", leading_feels.join(", ")),
        main_character: "Protagonist".to_owned(),
        setting: format!(
            "A world where {} matters most",
            request.story_draws.join(", ")
        ),
        plot_hook: format!(
            "Something happens that challenges the status quo of {}",
            request.feel_choices.join(", ")
        ),
        inspirations_used: request.inspirations.clone(),
        extra,
    }
}
