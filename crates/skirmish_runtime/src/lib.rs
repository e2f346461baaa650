//! # Skirmish Runtime
//!
//! Runs a battle in real time.
//!
//! Every unit gets its own task that moves at random, attacks whatever is
//! in range and pauses for a random while. A monitor task watches both
//! rosters and raises the game-over signal once one side is wiped out.
//! The [`Battle`] orchestrator wires these together and waits for every
//! agent to finish.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

use std::ops::RangeInclusive;
use std::time::Duration;

pub mod agent;
pub mod error;
pub mod monitor;
pub mod narration;
pub mod orchestrator;
pub mod signal;

pub use agent::{AgentExit, AgentSummary, UnitAgent};
pub use error::BattleError;
pub use monitor::GameOverMonitor;
pub use narration::StdoutNarrator;
pub use orchestrator::{Battle, BattleReport};
pub use signal::{game_over_signal, GameOverSignal, GameOverWatch};

/// Battle timing configuration.
///
/// All pauses are whole multiples of [`time_unit`](Self::time_unit).
#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Length of one time unit.
    pub time_unit: Duration,
    /// Time units between game-over checks.
    pub monitor_period: u32,
    /// Shortest pause between agent rounds, in time units.
    pub min_pause: u32,
    /// Longest pause between agent rounds, in time units.
    pub max_pause: u32,
    /// Seed for agent randomness. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_secs(1),
            monitor_period: 1,
            min_pause: 1,
            max_pause: 3,
            seed: None,
        }
    }
}

impl BattleConfig {
    /// Check that every period is positive and the pause range is ordered.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.time_unit.is_zero() {
            return Err(BattleError::InvalidConfig(
                "time unit must be positive".to_string(),
            ));
        }
        if self.monitor_period == 0 {
            return Err(BattleError::InvalidConfig(
                "monitor period must be at least one time unit".to_string(),
            ));
        }
        if self.min_pause == 0 || self.min_pause > self.max_pause {
            return Err(BattleError::InvalidConfig(format!(
                "pause range {}..={} must be positive and ordered",
                self.min_pause, self.max_pause
            )));
        }
        Ok(())
    }

    /// Wall-clock time between game-over checks.
    #[must_use]
    pub fn monitor_interval(&self) -> Duration {
        self.time_unit * self.monitor_period
    }

    /// Allowed agent pauses, in time units.
    #[must_use]
    pub fn pause_range(&self) -> RangeInclusive<u32> {
        self.min_pause..=self.max_pause
    }
}
