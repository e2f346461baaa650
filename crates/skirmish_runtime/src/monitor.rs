//! Game-over monitor.
//!
//! Polls both rosters on a fixed cadence. The first poll that finds a side
//! wiped out raises the game-over signal, announces the winner and ends the
//! monitor. The player roster is checked first, so if both sides fall
//! between two polls the enemy is declared the winner.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use skirmish_core::events::{BattleEvent, Narrator};
use skirmish_core::roster::{Roster, Side};
use skirmish_core::victory::check_victory;

use crate::signal::GameOverSignal;

/// Watches both rosters and declares the winner.
pub struct GameOverMonitor {
    player: Arc<Roster>,
    enemy: Arc<Roster>,
    signal: GameOverSignal,
    narrator: Arc<dyn Narrator>,
    period: Duration,
}

impl GameOverMonitor {
    /// Create a monitor polling every `period`.
    #[must_use]
    pub fn new(
        player: Arc<Roster>,
        enemy: Arc<Roster>,
        signal: GameOverSignal,
        narrator: Arc<dyn Narrator>,
        period: Duration,
    ) -> Self {
        Self {
            player,
            enemy,
            signal,
            narrator,
            period,
        }
    }

    /// Poll until one side is wiped out, then return the winner.
    ///
    /// The first check happens one period after start.
    pub async fn run(self) -> Side {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let Some(winner) = check_victory(&self.player, &self.enemy) else {
                continue;
            };

            if self.signal.trigger(winner) {
                self.narrator.narrate(&BattleEvent::Victory { winner });
                tracing::info!(%winner, "battle decided");
            }
            return self.signal.winner().unwrap_or(winner);
        }
    }
}
