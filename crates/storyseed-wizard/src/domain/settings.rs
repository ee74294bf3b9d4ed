//! Settings-generation request and response contract.

use serde::{Deserialize, Serialize};

/// Body of a settings-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSettingsRequest {
    /// Committed feel selection, in pick order.
    pub feel_choices: Vec<String>,
    /// Committed story draws, in pick order.
    pub story_draws: Vec<String>,
    /// The chosen scale label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    /// Free-text inspirations, one per entry.
    #[serde(default)]
    pub inspirations: Vec<String>,
}

/// Generated story setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Working title of the story.
    pub story_title: String,
    /// Short description of the protagonist.
    pub main_character: String,
    /// The story's setting.
    pub setting: String,
    /// The inciting situation.
    pub plot_hook: String,
    /// Inspirations the generator drew on.
    pub inspirations_used: Vec<String>,
    /// Any additional fields the generator returns.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of a settings-generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSettingsResponse {
    /// Whether generation succeeded.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
    /// The generated content.
    pub generated_content: GeneratedContent,
}
