//! Battle narration.
//!
//! Everything that happens on the battlefield is described by a
//! [`BattleEvent`]. Events are handed to a [`Narrator`], which decides where
//! they go: stdout for the real game, an [`EventLog`] in tests.
//!
//! The `Display` form of each event is the line printed to players.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::combat::AttackOutcome;
use crate::grid::GridPos;
use crate::roster::Side;
use crate::unit::MoveOutcome;

/// Something worth telling the players about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A unit moved.
    Moved {
        /// Unit name.
        unit: String,
        /// Destination cell.
        to: GridPos,
    },
    /// A unit tried to leave the map and stayed put.
    MoveRejected {
        /// Unit name.
        unit: String,
        /// Requested X coordinate.
        x: i32,
        /// Requested Y coordinate.
        y: i32,
    },
    /// An attack landed.
    Attacked {
        /// Attacking unit name.
        attacker: String,
        /// Target unit name.
        target: String,
        /// Where the target stood.
        at: GridPos,
    },
    /// A unit's health dropped to zero or below.
    Destroyed {
        /// Unit name.
        unit: String,
    },
    /// One side has no units left.
    Victory {
        /// The side still standing.
        winner: Side,
    },
}

impl BattleEvent {
    /// Narration for a move request.
    #[must_use]
    pub fn from_move(unit: &str, outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved { to, .. } => Self::Moved {
                unit: unit.to_string(),
                to,
            },
            MoveOutcome::OutOfBounds { x, y } => Self::MoveRejected {
                unit: unit.to_string(),
                x,
                y,
            },
        }
    }

    /// Narration for an attack: nothing for an ignored attack, one line for
    /// a hit, two for a kill.
    #[must_use]
    pub fn from_attack(attacker: &str, target: &str, outcome: AttackOutcome) -> Vec<Self> {
        let attacked = |at| Self::Attacked {
            attacker: attacker.to_string(),
            target: target.to_string(),
            at,
        };

        match outcome {
            AttackOutcome::Ignored => Vec::new(),
            AttackOutcome::Hit { at, .. } => vec![attacked(at)],
            AttackOutcome::Destroyed { at, .. } => vec![
                attacked(at),
                Self::Destroyed {
                    unit: target.to_string(),
                },
            ],
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { unit, to } => write!(f, "{unit} moving to {to}"),
            Self::MoveRejected { unit, .. } => write!(f, "{unit} tried to move out of bounds"),
            Self::Attacked {
                attacker,
                target,
                at,
            } => write!(f, "{attacker} attacks {target} at {at}"),
            Self::Destroyed { unit } => write!(f, "{unit} has been destroyed!"),
            Self::Victory { winner } => write!(f, "{winner} wins!"),
        }
    }
}

/// Receives battle events as they happen.
///
/// Called concurrently from every unit agent.
pub trait Narrator: Send + Sync {
    /// Report one event.
    fn narrate(&self, event: &BattleEvent);
}

/// Narrator that keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<BattleEvent>>,
}

impl EventLog {
    /// Copy of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<BattleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded events rendered as narration lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl Narrator for EventLog {
    fn narrate(&self, event: &BattleEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
