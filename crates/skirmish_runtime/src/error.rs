//! Error types for running a battle.

use thiserror::Error;
use tokio::task::JoinError;

use skirmish_core::error::SkirmishError;

/// Why a battle could not be run to completion.
#[derive(Debug, Error)]
pub enum BattleError {
    /// Rosters could not be built.
    #[error(transparent)]
    Setup(#[from] SkirmishError),

    /// Timing configuration is unusable.
    #[error("Invalid battle config: {0}")]
    InvalidConfig(String),

    /// A unit agent task panicked or was cancelled.
    #[error("Unit agent task failed: {0}")]
    AgentFailed(#[source] JoinError),

    /// The game-over monitor task panicked or was cancelled.
    #[error("Game-over monitor task failed: {0}")]
    MonitorFailed(#[source] JoinError),
}
