//! The unit entity.
//!
//! A [`Unit`] pairs immutable identity (name, kind, stats) with mutable
//! combat state behind its own lock. Units are shared between agent tasks,
//! so every mutation goes through that lock:
//!
//! - [`Unit::move_to`] locks the moving unit.
//! - [`Unit::attack`] locks the *target*, since the target is the one being
//!   changed. The attacker's stats are immutable and need no lock.
//!
//! No code path holds two unit locks at once, so attacks between units in
//! opposite directions cannot deadlock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::combat::{apply_attack, AttackOutcome};
use crate::grid::GridPos;
use crate::unit_kind::{UnitKind, UnitStats};

/// Mutable combat state of a unit, guarded by the unit's lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitState {
    /// Current health. Never increases; may go negative.
    pub health: i32,
    /// Current cell.
    pub position: GridPos,
}

impl UnitState {
    /// A unit is destroyed once its health reaches zero or below.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The unit now stands on `to`.
    Moved {
        /// Cell the unit left.
        from: GridPos,
        /// Cell the unit entered.
        to: GridPos,
    },
    /// The destination was off the map; the unit did not move.
    OutOfBounds {
        /// Requested X coordinate.
        x: i32,
        /// Requested Y coordinate.
        y: i32,
    },
}

/// A combat unit.
#[derive(Debug)]
pub struct Unit {
    name: String,
    kind: UnitKind,
    stats: UnitStats,
    state: Mutex<UnitState>,
}

impl Unit {
    /// Create a unit of `kind` at full health on `position`.
    ///
    /// # Example
    ///
    /// ```
    /// use skirmish_core::grid::GridPos;
    /// use skirmish_core::unit::Unit;
    /// use skirmish_core::unit_kind::UnitKind;
    ///
    /// let tank = Unit::new("Bravo", UnitKind::Tank, GridPos::new(1, 1).unwrap());
    /// assert_eq!(tank.health(), 200);
    /// assert!(!tank.is_destroyed());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, kind: UnitKind, position: GridPos) -> Self {
        let stats = kind.stats();
        Self {
            name: name.into(),
            kind,
            stats,
            state: Mutex::new(UnitState {
                health: stats.health,
                position,
            }),
        }
    }

    /// Override the starting health.
    ///
    /// Only available while building the unit, before it is shared. Used to
    /// stage battles with damaged or already destroyed units.
    #[must_use]
    pub fn with_health(self, health: i32) -> Self {
        let mut state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        state.health = health;
        Self {
            state: Mutex::new(state),
            ..self
        }
    }

    /// Unit name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit kind.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Immutable combat stats.
    #[must_use]
    pub const fn stats(&self) -> UnitStats {
        self.stats
    }

    /// Snapshot of the mutable state.
    #[must_use]
    pub fn snapshot(&self) -> UnitState {
        *self.lock_state()
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.lock_state().health
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> GridPos {
        self.lock_state().position
    }

    /// Whether health has dropped to zero or below.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lock_state().is_destroyed()
    }

    /// Whether `other` stands within this unit's attack range.
    #[must_use]
    pub fn in_range_of(&self, other: &Unit) -> bool {
        let own = self.position();
        let theirs = other.position();
        own.chebyshev_distance(theirs) <= self.stats.range
    }

    /// Move to `(x, y)`.
    ///
    /// Off-map destinations are rejected and leave the position unchanged.
    pub fn move_to(&self, x: i32, y: i32) -> MoveOutcome {
        let mut state = self.lock_state();
        match GridPos::new(x, y) {
            Ok(to) => {
                let from = state.position;
                state.position = to;
                MoveOutcome::Moved { from, to }
            }
            Err(_) => MoveOutcome::OutOfBounds { x, y },
        }
    }

    /// Attack `target`, removing this unit's attack power from its health.
    ///
    /// Takes the target's lock for the whole read-modify-write. Attacking a
    /// destroyed target does nothing.
    pub fn attack(&self, target: &Unit) -> AttackOutcome {
        let mut state = target.lock_state();
        apply_attack(self.stats.attack, &mut state)
    }

    // Unit state is plain data, so a panic while holding the lock cannot
    // leave it half-written in a way later readers could not handle.
    fn lock_state(&self) -> MutexGuard<'_, UnitState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
