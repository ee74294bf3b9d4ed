//! The setting wizard controller.

use std::sync::Arc;
use std::time::Duration;

use storyseed_core::clock::Clock;
use storyseed_core::cue::FeedbackCue;
use storyseed_core::error::DomainError;
use storyseed_scale::domain::resolver::resolve;
use storyseed_scale::domain::rules::RuleBook;
use storyseed_selection::application::custom_entry::{
    CustomEntryPipeline, DEFAULT_DEBOUNCE, SlotEdit,
};
use storyseed_selection::domain::slots::SlotId;
use storyseed_selection::domain::store::{SelectionBounds, SelectionStore, ToggleOutcome};
use tokio::time::Instant;
use tracing::debug;

use super::catalog::{FEEL_CHOICES, STORY_DRAW_CHOICES};
use super::settings::GenerateSettingsRequest;
use crate::application::command_handlers::handle_generate_settings;
use crate::application::generator::SettingsGenerator;
use crate::domain::settings::GenerateSettingsResponse;

/// Grid bounds and timing of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardConfig {
    /// Bounds of the feel grid.
    pub feels: SelectionBounds,
    /// Bounds of the story draw grid.
    pub draws: SelectionBounds,
    /// Bounds of the scale grid.
    pub scale: SelectionBounds,
    /// Quiet period before a custom feel is committed.
    pub debounce: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            feels: SelectionBounds::exactly(3),
            draws: SelectionBounds::exactly(2),
            scale: SelectionBounds::exactly(1),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// State of one pass through the setting wizard.
pub struct Wizard {
    config: WizardConfig,
    rule_book: Arc<RuleBook>,
    cue: Arc<dyn FeedbackCue>,
    feels: CustomEntryPipeline,
    draws: SelectionStore,
    scale: SelectionStore,
    scale_choices: Vec<String>,
    resolved_for: Vec<String>,
    inspirations: String,
}

impl Wizard {
    /// Creates a wizard with empty grids. The scale grid starts with the
    /// generic choices.
    #[must_use]
    pub fn new(config: WizardConfig, rule_book: Arc<RuleBook>, cue: Arc<dyn FeedbackCue>) -> Self {
        let feels = CustomEntryPipeline::new(
            SelectionStore::new(config.feels, Arc::clone(&cue)),
            config.debounce,
        );
        let draws = SelectionStore::new(config.draws, Arc::clone(&cue));
        let scale = SelectionStore::new(config.scale, Arc::clone(&cue));
        let scale_choices = resolve::<String>(&[], &rule_book).flatten();

        Self {
            config,
            rule_book,
            cue,
            feels,
            draws,
            scale,
            scale_choices,
            resolved_for: Vec::new(),
            inspirations: String::new(),
        }
    }

    /// Returns the feel grid, including its custom entries.
    #[must_use]
    pub fn feels(&self) -> &CustomEntryPipeline {
        &self.feels
    }

    /// Returns the story draw grid.
    #[must_use]
    pub fn draws(&self) -> &SelectionStore {
        &self.draws
    }

    /// Returns the scale grid.
    #[must_use]
    pub fn scale(&self) -> &SelectionStore {
        &self.scale
    }

    /// Returns the choices currently offered by the scale grid.
    #[must_use]
    pub fn scale_choices(&self) -> &[String] {
        &self.scale_choices
    }

    /// Toggles a predefined feel. Free-text feels go through
    /// `edit_custom_feel` instead.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `feel` is not one of the offered
    /// feels.
    pub fn toggle_feel(&mut self, feel: &str) -> Result<ToggleOutcome, DomainError> {
        if !FEEL_CHOICES.contains(&feel) {
            return Err(DomainError::Validation(format!(
                "{feel:?} is not an offered feel"
            )));
        }
        let outcome = self.feels.store_mut().toggle(feel);
        self.refresh_scale();
        Ok(outcome)
    }

    /// Applies typed text to a custom feel slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if `slot` is not live.
    pub fn edit_custom_feel(
        &mut self,
        slot: SlotId,
        text: &str,
        now: Instant,
    ) -> Result<SlotEdit, DomainError> {
        let edit = self.feels.edit(slot, text, now)?;
        self.refresh_scale();
        Ok(edit)
    }

    /// Handles a click on a custom feel slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if `slot` is not live.
    pub fn click_custom_feel(&mut self, slot: SlotId) -> Result<(), DomainError> {
        self.feels.click(slot)?;
        self.refresh_scale();
        Ok(())
    }

    /// Commits custom feels whose debounce period has passed at `now`.
    pub fn fire_due(&mut self, now: Instant) -> Vec<SlotId> {
        let fired = self.feels.fire_due(now);
        if !fired.is_empty() {
            self.refresh_scale();
        }
        fired
    }

    /// Waits for the next pending custom feel and commits it.
    pub async fn wait_for_feel_commit(&mut self, clock: &dyn Clock) -> Vec<SlotId> {
        let fired = self.feels.wait_for_commit(clock).await;
        if !fired.is_empty() {
            self.refresh_scale();
        }
        fired
    }

    /// Toggles a story draw.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `draw` is not one of the offered
    /// draws.
    pub fn toggle_draw(&mut self, draw: &str) -> Result<ToggleOutcome, DomainError> {
        if !STORY_DRAW_CHOICES.contains(&draw) {
            return Err(DomainError::Validation(format!(
                "{draw:?} is not an offered story draw"
            )));
        }
        Ok(self.draws.toggle(draw))
    }

    /// Toggles a scale label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `label` is not offered for the
    /// current feels.
    pub fn toggle_scale(&mut self, label: &str) -> Result<ToggleOutcome, DomainError> {
        if !self.scale_choices.iter().any(|c| c == label) {
            return Err(DomainError::Validation(format!(
                "{label:?} is not an offered scale"
            )));
        }
        Ok(self.scale.toggle(label))
    }

    /// Replaces the free-text inspirations.
    pub fn set_inspirations(&mut self, text: impl Into<String>) {
        self.inspirations = text.into();
    }

    /// Returns the inspirations, one per non-blank line, trimmed.
    #[must_use]
    pub fn inspirations(&self) -> Vec<String> {
        self.inspirations
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Returns `true` once every grid is valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.feels.store().validity() && self.draws.validity() && self.scale.validity()
    }

    /// Builds the settings-generation request from the committed selections.
    #[must_use]
    pub fn build_request(&self) -> GenerateSettingsRequest {
        GenerateSettingsRequest {
            feel_choices: self.feels.store().selected().to_vec(),
            story_draws: self.draws.selected().to_vec(),
            scale: self.scale.selected().first().cloned(),
            inspirations: self.inspirations(),
        }
    }

    /// Submits the wizard to `generator` once.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a grid is not yet valid, or the
    /// generator's error otherwise.
    pub async fn submit(
        &self,
        generator: &dyn SettingsGenerator,
    ) -> Result<GenerateSettingsResponse, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::Validation(
                "choose every feel, draw and scale before generating".to_owned(),
            ));
        }
        handle_generate_settings(&self.build_request(), generator).await
    }

    /// Re-derives the scale grid when the committed feels changed. The new
    /// grid keeps the previous scale pick if it is still offered.
    fn refresh_scale(&mut self) {
        let feels = self.feels.store().selected();
        if feels == self.resolved_for.as_slice() {
            return;
        }
        self.resolved_for = feels.to_vec();
        self.scale_choices = resolve(&self.resolved_for, &self.rule_book).flatten();

        let kept: Vec<String> = self
            .scale
            .selected()
            .iter()
            .filter(|label| self.scale_choices.contains(label))
            .cloned()
            .collect();
        self.scale = SelectionStore::with_selection(self.config.scale, kept, Arc::clone(&self.cue));
        debug!(
            feels = ?self.resolved_for,
            choices = self.scale_choices.len(),
            "scale grid re-seeded"
        );
    }
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("config", &self.config)
            .field("feels", &self.feels)
            .field("draws", &self.draws)
            .field("scale", &self.scale)
            .field("scale_choices", &self.scale_choices)
            .field("inspirations", &self.inspirations)
            .finish_non_exhaustive()
    }
}
