//! Shared application state.

use std::sync::Arc;

use storyseed_scale::domain::rules::RuleBook;
use storyseed_wizard::application::generator::SettingsGenerator;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scale rules used to resolve scale choices.
    pub rule_book: Arc<RuleBook>,
    /// Generator behind the settings endpoint.
    pub generator: Arc<dyn SettingsGenerator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(rule_book: Arc<RuleBook>, generator: Arc<dyn SettingsGenerator>) -> Self {
        Self {
            rule_book,
            generator,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("rule_book", &self.rule_book)
            .finish_non_exhaustive()
    }
}
