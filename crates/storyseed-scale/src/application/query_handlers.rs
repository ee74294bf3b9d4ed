//! Query handlers for the Scale context.
//!
//! This module resolves scale choices for a feel selection and returns
//! read-only view DTOs.

use serde::Serialize;

use crate::domain::level::ScaleLevel;
use crate::domain::resolver::resolve;
use crate::domain::rules::RuleBook;

/// Read-only view of one resolved level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleLevelView {
    /// The level identifier.
    pub level: ScaleLevel,
    /// The level's numeric rank.
    pub rank: u8,
    /// The level's human-readable name.
    pub name: &'static str,
    /// The labels offered at this level.
    pub labels: Vec<String>,
}

/// Read-only view of the scale choices for a feel selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleChoicesView {
    /// The feels the choices were resolved from, in pick order.
    pub feels: Vec<String>,
    /// Present levels in ascending order.
    pub levels: Vec<ScaleLevelView>,
    /// Every label in level order, deduplicated; the scale grid's choices.
    pub choices: Vec<String>,
}

/// Resolves the scale choices for `feels` against `book`.
#[must_use]
pub fn get_scale_choices(feels: &[String], book: &RuleBook) -> ScaleChoicesView {
    let resolved = resolve(feels, book);
    ScaleChoicesView {
        feels: feels.to_vec(),
        levels: resolved
            .iter()
            .map(|(level, labels)| ScaleLevelView {
                level,
                rank: level.rank(),
                name: level.name(),
                labels: labels.to_vec(),
            })
            .collect(),
        choices: resolved.flatten(),
    }
}
