//! Command handlers for the Wizard context.

use storyseed_core::error::DomainError;
use tracing::{info, warn};

use crate::application::generator::SettingsGenerator;
use crate::domain::settings::{GenerateSettingsRequest, GenerateSettingsResponse};

/// Handles a settings-generation request: validates it and makes a single
/// call to `generator`. There is no retry; a failure is logged once and
/// returned to the caller to report.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the request names no feels or
/// contains a blank entry, `DomainError::Infrastructure` if the generator
/// fails or reports failure.
pub async fn handle_generate_settings(
    request: &GenerateSettingsRequest,
    generator: &dyn SettingsGenerator,
) -> Result<GenerateSettingsResponse, DomainError> {
    validate(request)?;

    info!(
        feels = request.feel_choices.len(),
        draws = request.story_draws.len(),
        inspirations = request.inspirations.len(),
        scale = request.scale.as_deref(),
        "generating settings"
    );

    match generator.generate(request).await {
        Ok(response) if response.success => Ok(response),
        Ok(response) => {
            warn!(message = %response.message, "settings generator reported failure");
            Err(DomainError::Infrastructure(response.message))
        }
        Err(e) => {
            warn!(error = %e, "settings generation failed");
            Err(e)
        }
    }
}

fn validate(request: &GenerateSettingsRequest) -> Result<(), DomainError> {
    if request.feel_choices.is_empty() {
        return Err(DomainError::Validation(
            "at least one feel must be chosen".to_owned(),
        ));
    }
    let blank = request
        .feel_choices
        .iter()
        .chain(&request.story_draws)
        .chain(&request.scale)
        .any(|choice| choice.trim().is_empty());
    if blank {
        return Err(DomainError::Validation(
            "choices must not be blank".to_owned(),
        ));
    }
    Ok(())
}
