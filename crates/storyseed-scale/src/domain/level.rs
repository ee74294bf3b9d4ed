//! Narrative scale levels.

use serde::{Deserialize, Serialize};

/// Granularity of a story setting, from largest to smallest.
///
/// The derived ordering is the semantic one: `Universe < StarSystem < … <
/// Building`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleLevel {
    /// The whole cosmos.
    Universe,
    /// A star and its bodies.
    StarSystem,
    /// A single world.
    Planet,
    /// A landmass or region.
    Continent,
    /// A polity.
    NationState,
    /// A large settlement.
    City,
    /// A small settlement.
    Town,
    /// A specific place within a settlement.
    Site,
    /// A single structure or vessel.
    Building,
}

impl ScaleLevel {
    /// Every level in ascending order.
    pub const ALL: [Self; 9] = [
        Self::Universe,
        Self::StarSystem,
        Self::Planet,
        Self::Continent,
        Self::NationState,
        Self::City,
        Self::Town,
        Self::Site,
        Self::Building,
    ];

    /// Numeric rank, spaced by tens to leave room between levels.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Universe => 0,
            Self::StarSystem => 10,
            Self::Planet => 20,
            Self::Continent => 30,
            Self::NationState => 40,
            Self::City => 50,
            Self::Town => 60,
            Self::Site => 70,
            Self::Building => 80,
        }
    }

    /// Human-readable name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Universe => "Universe",
            Self::StarSystem => "Star system",
            Self::Planet => "Planet",
            Self::Continent => "Continent",
            Self::NationState => "Nation state",
            Self::City => "City",
            Self::Town => "Town",
            Self::Site => "Site",
            Self::Building => "Building",
        }
    }
}

impl std::fmt::Display for ScaleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
