//! Resolution of scale choices from selected feels.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::trace;

use super::level::ScaleLevel;
use super::rules::{RuleBook, ScaleRule};

/// Labels offered per scale level, keyed in ascending level order. A level
/// present in the map always has at least one label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScaleChoices(BTreeMap<ScaleLevel, Vec<String>>);

impl ScaleChoices {
    /// Returns the labels for `level`, or `None` if the level is absent.
    #[must_use]
    pub fn get(&self, level: ScaleLevel) -> Option<&[String]> {
        self.0.get(&level).map(Vec::as_slice)
    }

    /// Returns `true` if `level` has labels.
    #[must_use]
    pub fn contains(&self, level: ScaleLevel) -> bool {
        self.0.contains_key(&level)
    }

    /// Returns the present levels in ascending order.
    pub fn levels(&self) -> impl Iterator<Item = ScaleLevel> + '_ {
        self.0.keys().copied()
    }

    /// Iterates `(level, labels)` in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (ScaleLevel, &[String])> {
        self.0.iter().map(|(level, labels)| (*level, labels.as_slice()))
    }

    /// Returns the number of present levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no level is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens to one list in ascending level order, dropping labels that
    /// already appeared at a larger level.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut flat: Vec<String> = Vec::new();
        for labels in self.0.values() {
            for label in labels {
                push_unique(&mut flat, label);
            }
        }
        flat
    }
}

/// Resolves the scale choices for `feels`, in the order the feels were
/// picked.
///
/// Generic labels seed every level they name. The first concrete label a
/// feel supplies for a level replaces the generic ones; later concrete labels
/// are added after it, skipping duplicates. An absence marker drops a level
/// only while no feel has supplied a concrete label for it. Unknown feels
/// and empty labels contribute nothing.
#[must_use]
pub fn resolve<S: AsRef<str>>(feels: &[S], book: &RuleBook) -> ScaleChoices {
    let mut result: BTreeMap<ScaleLevel, Vec<String>> = BTreeMap::new();

    for (level, rule) in book.generic().rules() {
        if let ScaleRule::Label(label) = rule {
            if !label.is_empty() {
                push_unique(result.entry(*level).or_default(), label);
            }
        }
    }

    let mut overridden: BTreeSet<ScaleLevel> = BTreeSet::new();
    for feel in feels {
        let feel = feel.as_ref();
        let Some(rules) = book.rules_for(feel) else {
            trace!(feel, "no scale rules for feel");
            continue;
        };
        for (level, rule) in rules.rules() {
            match rule {
                ScaleRule::Absent => {
                    if !overridden.contains(level) {
                        result.remove(level);
                    }
                }
                ScaleRule::Label(label) if label.is_empty() => {}
                ScaleRule::Label(label) => {
                    let labels = result.entry(*level).or_default();
                    if overridden.insert(*level) {
                        labels.clear();
                    }
                    push_unique(labels, label);
                }
            }
        }
    }

    result.retain(|_, labels| !labels.is_empty());
    ScaleChoices(result)
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|l| l == label) {
        labels.push(label.to_owned());
    }
}
