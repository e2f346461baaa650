//! # Skirmish Core
//!
//! Battle domain for the Skirmish real-time battle simulator.
//!
//! This crate holds the rules and nothing else:
//! - No async runtime
//! - No randomness
//! - No stdout (narration goes through the [`events::Narrator`] trait)
//!
//! The concurrent side (one task per unit, game-over monitor) lives in
//! `skirmish_runtime` and drives the operations defined here.
//!
//! ## Crate Structure
//!
//! - [`unit`] - The unit entity, its lock, move and attack
//! - [`unit_kind`] - The four unit kinds and their stats
//! - [`combat`] - Attack resolution and target scanning
//! - [`roster`] - Sides and their unit lists
//! - [`victory`] - Game-over detection
//! - [`scenario`] - The standard opening lineup
//! - [`grid`] - Battlefield coordinates and range checks
//! - [`events`] - Narration events and sinks

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod combat;
pub mod error;
pub mod events;
pub mod grid;
pub mod roster;
pub mod scenario;
pub mod unit;
pub mod unit_kind;
pub mod victory;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combat::{engage, AttackOutcome, Engagement};
    pub use crate::error::{Result, SkirmishError};
    pub use crate::events::{BattleEvent, EventLog, Narrator};
    pub use crate::grid::{GridPos, MAP_SIZE};
    pub use crate::roster::{Roster, Side};
    pub use crate::scenario::standard_rosters;
    pub use crate::unit::{MoveOutcome, Unit, UnitState};
    pub use crate::unit_kind::{UnitKind, UnitStats};
    pub use crate::victory::check_victory;
}
