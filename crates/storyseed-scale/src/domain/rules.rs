//! Scale rules: generic defaults and feel-specific overrides.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use storyseed_core::error::DomainError;

use super::level::ScaleLevel;

/// What a rule says about one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleRule {
    /// Offer this label at the level.
    Label(String),
    /// Suppress the level's generic default.
    Absent,
}

/// Ordered rules for one feel, or the generic defaults. Holds at most one
/// rule per level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeelRuleSet {
    rules: Vec<(ScaleLevel, ScaleRule)>,
}

impl FeelRuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a concrete label for `level`, replacing any earlier rule for it.
    #[must_use]
    pub fn label(self, level: ScaleLevel, label: impl Into<String>) -> Self {
        self.with_rule(level, ScaleRule::Label(label.into()))
    }

    /// Adds an absence marker for `level`, replacing any earlier rule for it.
    #[must_use]
    pub fn absent(self, level: ScaleLevel) -> Self {
        self.with_rule(level, ScaleRule::Absent)
    }

    /// Adds `rule` for `level`, replacing any earlier rule for it in place.
    #[must_use]
    pub fn with_rule(mut self, level: ScaleLevel, rule: ScaleRule) -> Self {
        if let Some(existing) = self.rules.iter_mut().find(|(l, _)| *l == level) {
            existing.1 = rule;
        } else {
            self.rules.push((level, rule));
        }
        self
    }

    /// Returns the rules in iteration order.
    #[must_use]
    pub fn rules(&self) -> &[(ScaleLevel, ScaleRule)] {
        &self.rules
    }

    /// Returns the rule for `level`, if any.
    #[must_use]
    pub fn get(&self, level: ScaleLevel) -> Option<&ScaleRule> {
        self.rules.iter().find(|(l, _)| *l == level).map(|(_, r)| r)
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The generic defaults plus every feel's rule set.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    generic: FeelRuleSet,
    feels: HashMap<String, FeelRuleSet>,
}

impl RuleBook {
    /// Creates a rule book with the given generic defaults and no feel rules.
    #[must_use]
    pub fn new(generic: FeelRuleSet) -> Self {
        Self {
            generic,
            feels: HashMap::new(),
        }
    }

    /// Registers `rules` for the feel tag `feel`.
    #[must_use]
    pub fn with_feel(mut self, feel: impl Into<String>, rules: FeelRuleSet) -> Self {
        self.feels.insert(feel.into(), rules);
        self
    }

    /// Returns the generic defaults.
    #[must_use]
    pub fn generic(&self) -> &FeelRuleSet {
        &self.generic
    }

    /// Returns the rules for `feel`. Tags are matched exactly.
    #[must_use]
    pub fn rules_for(&self, feel: &str) -> Option<&FeelRuleSet> {
        self.feels.get(feel)
    }

    /// Returns the number of feels with specific rules.
    #[must_use]
    pub fn feel_count(&self) -> usize {
        self.feels.len()
    }

    /// The rule tables shipped with the wizard.
    #[must_use]
    pub fn builtin() -> Self {
        use ScaleLevel::{
            Building, City, Continent, NationState, Planet, Site, StarSystem, Town, Universe,
        };

        let generic = FeelRuleSet::new()
            .label(Planet, "World")
            .label(Continent, "Region")
            .label(City, "City")
            .label(Town, "Town")
            .label(Building, "Building");

        let sci_fi = FeelRuleSet::new()
            .label(Universe, "Universe")
            .label(StarSystem, "Star system")
            .label(Planet, "Planet")
            .label(Continent, "Continent")
            .label(NationState, "Nation")
            .label(City, "City")
            .label(Town, "Station")
            .label(Building, "Ship");

        let fantasy = FeelRuleSet::new()
            .label(NationState, "Kingdom")
            .label(Town, "Village")
            .label(Building, "Edifice");

        let battlefield = FeelRuleSet::new().label(Site, "Battlefield");

        let mythic = FeelRuleSet::new()
            .label(Universe, "Cosmos")
            .label(StarSystem, "Divine realm")
            .label(Town, "Village")
            .label(Site, "Sacred site")
            .label(Building, "Edifice");

        let magical_realism = FeelRuleSet::new()
            .absent(Planet)
            .absent(Continent)
            .label(NationState, "Nation")
            .label(City, "Metropolis")
            .label(Town, "District")
            .label(Site, "Neighbourhood")
            .label(Building, "Building");

        let gothic = FeelRuleSet::new()
            .label(Town, "Village")
            .label(Site, "Site")
            .label(Building, "Edifice");

        let steampunk = FeelRuleSet::new()
            .label(Town, "District")
            .label(Site, "Fleet")
            .label(Building, "Ship");

        let pulpy = FeelRuleSet::new()
            .label(Town, "Village")
            .label(Site, "Sacred site")
            .label(Building, "Edifice");

        Self::new(generic)
            .with_feel("Sci-Fi", sci_fi.clone())
            .with_feel("Space Opera", sci_fi)
            .with_feel("Fantasy", fantasy)
            .with_feel("Action", battlefield.clone())
            .with_feel("War", battlefield.clone())
            .with_feel("Mecha", battlefield)
            .with_feel("Dystopian", FeelRuleSet::new().label(Building, "Compound"))
            .with_feel("Mythic", mythic)
            .with_feel("Magical Realism", magical_realism)
            .with_feel("Gothic", gothic)
            .with_feel("Horror", FeelRuleSet::new().label(Site, "Facility"))
            .with_feel("Steampunk", steampunk)
            .with_feel("Pulpy", pulpy)
    }

    /// Parses a rule book from YAML.
    ///
    /// ```yaml
    /// generic:
    ///   planet: World
    /// feels:
    ///   Magical Realism:
    ///     planet: ~        # absence marker
    ///     city: Metropolis
    /// aliases:
    ///   Space Opera: Sci-Fi
    /// ```
    ///
    /// Rules within a set are ordered by level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document does not parse or an
    /// alias names a feel that has no rules.
    pub fn from_yaml(source: &str) -> Result<Self, DomainError> {
        let document: RuleBookDocument = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("invalid scale rule book: {e}")))?;

        let mut book = Self::new(document.generic.into_rule_set());
        for (feel, rules) in document.feels {
            book.feels.insert(feel, rules.into_rule_set());
        }
        for (alias, target) in document.aliases {
            let rules = book.feels.get(&target).cloned().ok_or_else(|| {
                DomainError::Validation(format!("alias {alias:?} refers to unknown feel {target:?}"))
            })?;
            book.feels.insert(alias, rules);
        }
        Ok(book)
    }
}

#[derive(Debug, Deserialize)]
struct RuleBookDocument {
    #[serde(default)]
    generic: RuleSetDocument,
    #[serde(default)]
    feels: BTreeMap<String, RuleSetDocument>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct RuleSetDocument(BTreeMap<ScaleLevel, Option<String>>);

impl RuleSetDocument {
    fn into_rule_set(self) -> FeelRuleSet {
        self.0
            .into_iter()
            .fold(FeelRuleSet::new(), |set, (level, label)| match label {
                Some(label) => set.label(level, label),
                None => set.absent(level),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_thirteen_feels() {
        let book = RuleBook::builtin();

        assert_eq!(book.feel_count(), 13);
        assert_eq!(book.generic().rules().len(), 5);
    }

    #[test]
    fn test_space_opera_shares_sci_fi_rules() {
        let book = RuleBook::builtin();

        assert_eq!(book.rules_for("Space Opera"), book.rules_for("Sci-Fi"));
    }

    #[test]
    fn test_feel_lookup_is_exact() {
        let book = RuleBook::builtin();

        assert!(book.rules_for("sci-fi").is_none());
        assert!(book.rules_for("Comedy").is_none());
    }

    #[test]
    fn test_with_rule_replaces_existing_level_in_place() {
        let set = FeelRuleSet::new()
            .label(ScaleLevel::Town, "Village")
            .label(ScaleLevel::Site, "Site")
            .absent(ScaleLevel::Town);

        assert_eq!(
            set.rules(),
            [
                (ScaleLevel::Town, ScaleRule::Absent),
                (ScaleLevel::Site, ScaleRule::Label("Site".to_owned())),
            ]
        );
    }

    #[test]
    fn test_from_yaml_reads_absence_markers_and_aliases() {
        // Arrange
        let source = r"
generic:
  planet: World
  city: City
feels:
  Lunar:
    planet: ~
    city: Dome
aliases:
  Moonpunk: Lunar
";

        // Act
        let book = RuleBook::from_yaml(source).unwrap();

        // Assert
        let lunar = book.rules_for("Lunar").unwrap();
        assert_eq!(lunar.get(ScaleLevel::Planet), Some(&ScaleRule::Absent));
        assert_eq!(
            lunar.get(ScaleLevel::City),
            Some(&ScaleRule::Label("Dome".to_owned()))
        );
        assert_eq!(book.rules_for("Moonpunk"), Some(lunar));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_alias_target() {
        let result = RuleBook::from_yaml("aliases:\n  Moonpunk: Lunar\n");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_level() {
        let result = RuleBook::from_yaml("generic:\n  galaxy: Galaxy\n");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
