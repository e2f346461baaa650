//! Per-unit agent loop.
//!
//! Each unit is driven by its own [`UnitAgent`] task. A round is:
//!
//! 1. Move to a uniformly random cell.
//! 2. Attack every living opponent in range, stopping after the first kill.
//! 3. Pause for a random number of time units.
//!
//! The loop ends when the unit is destroyed or the game is declared over.
//! A pause is cut short by the game-over signal, so agents leave promptly
//! once a winner is known.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use skirmish_core::combat::engage;
use skirmish_core::events::{BattleEvent, Narrator};
use skirmish_core::grid::MAP_SIZE;
use skirmish_core::roster::{Roster, Side};
use skirmish_core::unit::Unit;

use crate::signal::GameOverWatch;
use crate::BattleConfig;

/// Why an agent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentExit {
    /// The unit's health dropped to zero or below.
    Destroyed,
    /// The game was declared over while the unit still stood.
    GameOver,
}

/// What an agent did before it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    /// Unit name.
    pub unit: String,
    /// Side the unit fought for.
    pub side: Side,
    /// Position of the unit in its roster.
    pub slot: usize,
    /// Completed move-and-attack rounds.
    pub rounds: u32,
    /// Attacks that changed a target's health.
    pub attacks: u32,
    /// Opponents this unit destroyed.
    pub kills: u32,
    /// Why the loop ended.
    pub exit: AgentExit,
}

/// Drives one unit until it dies or the game ends.
pub struct UnitAgent {
    unit: Arc<Unit>,
    side: Side,
    slot: usize,
    opponents: Arc<Roster>,
    narrator: Arc<dyn Narrator>,
    game_over: GameOverWatch,
    rng: StdRng,
    time_unit: Duration,
    pause: RangeInclusive<u32>,
}

impl UnitAgent {
    /// Create an agent for the unit at `slot` in its side's roster.
    #[must_use]
    pub fn new(
        unit: Arc<Unit>,
        side: Side,
        slot: usize,
        opponents: Arc<Roster>,
        narrator: Arc<dyn Narrator>,
        game_over: GameOverWatch,
        config: &BattleConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(agent_seed(seed, side, slot)),
            None => StdRng::from_entropy(),
        };
        Self {
            unit,
            side,
            slot,
            opponents,
            narrator,
            game_over,
            rng,
            time_unit: config.time_unit,
            pause: config.pause_range(),
        }
    }

    /// Run rounds until the unit is destroyed or the game is over.
    pub async fn run(mut self) -> AgentSummary {
        let mut summary = AgentSummary {
            unit: self.unit.name().to_string(),
            side: self.side,
            slot: self.slot,
            rounds: 0,
            attacks: 0,
            kills: 0,
            exit: AgentExit::GameOver,
        };

        loop {
            if self.unit.is_destroyed() {
                summary.exit = AgentExit::Destroyed;
                break;
            }
            if self.game_over.is_over() {
                summary.exit = AgentExit::GameOver;
                break;
            }

            self.round(&mut summary);

            let pause = self.next_pause();
            tokio::select! {
                () = tokio::time::sleep(pause) => {}
                _ = self.game_over.wait() => {}
            }
        }

        tracing::debug!(
            unit = %summary.unit,
            side = %summary.side,
            rounds = summary.rounds,
            kills = summary.kills,
            exit = ?summary.exit,
            "agent finished"
        );
        summary
    }

    /// One move-and-attack round.
    fn round(&mut self, summary: &mut AgentSummary) {
        let x = self.rng.gen_range(0..MAP_SIZE);
        let y = self.rng.gen_range(0..MAP_SIZE);
        let moved = self.unit.move_to(x, y);
        self.narrator
            .narrate(&BattleEvent::from_move(self.unit.name(), moved));

        let engagement = engage(&self.unit, &self.opponents, self.narrator.as_ref());
        summary.rounds += 1;
        summary.attacks += engagement.attacks;
        summary.kills += engagement.kills;

        tracing::trace!(
            unit = self.unit.name(),
            round = summary.rounds,
            attacks = engagement.attacks,
            "round complete"
        );
    }

    fn next_pause(&mut self) -> Duration {
        let units = self.rng.gen_range(self.pause.clone());
        self.time_unit * units
    }
}

/// Distinct, stable seed per agent derived from the battle seed.
fn agent_seed(seed: u64, side: Side, slot: usize) -> u64 {
    let side_bit = match side {
        Side::Player => 0,
        Side::Enemy => 1,
    };
    seed.wrapping_mul(31)
        .wrapping_add(side_bit << 32)
        .wrapping_add(slot as u64)
}
