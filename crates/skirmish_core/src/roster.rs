//! Sides and their rosters.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player's forces.
    Player,
    /// The opposing forces.
    Enemy,
}

impl Side {
    /// The side this one fights against.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Enemy => "Enemy",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed, ordered list of units fighting for one side.
///
/// Units are reference counted so each can be handed to its own agent task
/// while the roster stays readable by opponents and the game-over monitor.
/// A roster never grows or shrinks; destroyed units stay in place.
#[derive(Debug)]
pub struct Roster {
    side: Side,
    units: Vec<Arc<Unit>>,
}

impl Roster {
    /// Build a roster for `side`, keeping the given order.
    #[must_use]
    pub fn new(side: Side, units: Vec<Unit>) -> Self {
        Self {
            side,
            units: units.into_iter().map(Arc::new).collect(),
        }
    }

    /// Which side this roster fights for.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Units in roster order.
    #[must_use]
    pub fn units(&self) -> &[Arc<Unit>] {
        &self.units
    }

    /// Number of units, destroyed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the roster has no units at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units still standing.
    pub fn survivors(&self) -> impl Iterator<Item = &Arc<Unit>> {
        self.units.iter().filter(|unit| !unit.is_destroyed())
    }

    /// Whether every unit has been destroyed.
    ///
    /// An empty roster counts as destroyed.
    ///
    /// # Example
    ///
    /// ```
    /// use skirmish_core::roster::{Roster, Side};
    ///
    /// assert!(Roster::new(Side::Enemy, Vec::new()).all_destroyed());
    /// ```
    #[must_use]
    pub fn all_destroyed(&self) -> bool {
        self.units.iter().all(|unit| unit.is_destroyed())
    }
}
