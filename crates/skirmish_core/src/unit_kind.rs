//! Unit kinds and their base combat stats.
//!
//! Every unit belongs to one of four kinds. The set is closed: there is no
//! way to build a unit of an unknown kind, and parsing a kind from text
//! fails with [`SkirmishError::UnknownUnitKind`] instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkirmishError;

/// Classification of a unit. Fixed for the unit's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Cheap, short-ranged foot soldiers.
    Infantry,
    /// Armoured vehicle with a heavy gun.
    Tank,
    /// Slow long-range guns.
    Artillery,
    /// Fragile aircraft that hits hard from far away.
    AirSupport,
}

impl UnitKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Infantry, Self::Tank, Self::Artillery, Self::AirSupport];

    /// Base stats for a freshly built unit of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use skirmish_core::unit_kind::UnitKind;
    ///
    /// let stats = UnitKind::AirSupport.stats();
    /// assert_eq!(stats.range, 6);
    /// assert_eq!(stats.attack, 100);
    /// ```
    #[must_use]
    pub const fn stats(self) -> UnitStats {
        match self {
            Self::Infantry => UnitStats::new(100, 10, 1, 2),
            Self::Tank => UnitStats::new(200, 40, 2, 3),
            Self::Artillery => UnitStats::new(150, 60, 4, 1),
            Self::AirSupport => UnitStats::new(80, 100, 6, 5),
        }
    }

    /// Name used in narration and when parsing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Infantry => "Infantry",
            Self::Tank => "Tank",
            Self::Artillery => "Artillery",
            Self::AirSupport => "AirSupport",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = SkirmishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SkirmishError::UnknownUnitKind(s.to_string()))
    }
}

/// Immutable combat stats of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    /// Starting health points.
    pub health: i32,
    /// Health removed from a target per attack.
    pub attack: i32,
    /// Maximum Chebyshev distance at which this unit can attack.
    pub range: u32,
    /// Cells per move. Descriptive only: units pick destinations anywhere on the map.
    pub movement: u32,
}

impl UnitStats {
    /// Create a stat block.
    #[must_use]
    pub const fn new(health: i32, attack: i32, range: u32, movement: u32) -> Self {
        Self {
            health,
            attack,
            range,
            movement,
        }
    }
}
