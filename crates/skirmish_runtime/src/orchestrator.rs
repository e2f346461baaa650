//! Battle orchestration.
//!
//! [`Battle::run`] spawns one [`UnitAgent`] per unit on both sides plus a
//! [`GameOverMonitor`], joins every agent, then joins the monitor for the
//! winner. Agents are joined through a [`JoinSet`], so no completion channel
//! is needed: the join itself is the barrier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use skirmish_core::events::Narrator;
use skirmish_core::roster::{Roster, Side};
use skirmish_core::scenario::standard_rosters;

use crate::agent::{AgentSummary, UnitAgent};
use crate::error::BattleError;
use crate::monitor::GameOverMonitor;
use crate::narration::StdoutNarrator;
use crate::signal::{game_over_signal, GameOverWatch};
use crate::BattleConfig;

/// Outcome of a finished battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// The side left standing.
    pub winner: Side,
    /// One summary per unit, player roster first, each in roster order.
    pub agents: Vec<AgentSummary>,
    /// Names of units still standing at the end.
    pub survivors: Vec<String>,
}

impl BattleReport {
    /// Summaries for one side.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &AgentSummary> {
        self.agents.iter().filter(move |agent| agent.side == side)
    }

    /// Total opponents destroyed by `side`.
    #[must_use]
    pub fn kills(&self, side: Side) -> u32 {
        self.side(side).map(|agent| agent.kills).sum()
    }
}

/// A battle between two rosters, ready to run.
pub struct Battle {
    player: Arc<Roster>,
    enemy: Arc<Roster>,
    config: BattleConfig,
    narrator: Arc<dyn Narrator>,
}

impl Battle {
    /// A battle between the given rosters with default timing, narrated to
    /// stdout.
    #[must_use]
    pub fn new(player: Roster, enemy: Roster) -> Self {
        Self {
            player: Arc::new(player),
            enemy: Arc::new(enemy),
            config: BattleConfig::default(),
            narrator: Arc::new(StdoutNarrator),
        }
    }

    /// The standard four-on-four battle.
    pub fn standard() -> Result<Self, BattleError> {
        let (player, enemy) = standard_rosters()?;
        Ok(Self::new(player, enemy))
    }

    /// Replace the timing configuration.
    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace where narration goes.
    #[must_use]
    pub fn with_narrator(mut self, narrator: Arc<dyn Narrator>) -> Self {
        self.narrator = narrator;
        self
    }

    /// The player roster.
    #[must_use]
    pub fn player(&self) -> &Arc<Roster> {
        &self.player
    }

    /// The enemy roster.
    #[must_use]
    pub fn enemy(&self) -> &Arc<Roster> {
        &self.enemy
    }

    /// Fight until one side is wiped out.
    pub async fn run(self) -> Result<BattleReport, BattleError> {
        self.config.validate()?;

        tracing::info!(
            player_units = self.player.len(),
            enemy_units = self.enemy.len(),
            "battle starting"
        );

        let (signal, watch) = game_over_signal();
        let monitor = tokio::spawn(
            GameOverMonitor::new(
                Arc::clone(&self.player),
                Arc::clone(&self.enemy),
                signal,
                Arc::clone(&self.narrator),
                self.config.monitor_interval(),
            )
            .run(),
        );

        let mut agents = JoinSet::new();
        self.spawn_side(&mut agents, &self.player, &self.enemy, &watch);
        self.spawn_side(&mut agents, &self.enemy, &self.player, &watch);

        let mut summaries = Vec::with_capacity(self.player.len() + self.enemy.len());
        while let Some(joined) = agents.join_next().await {
            summaries.push(joined.map_err(BattleError::AgentFailed)?);
        }
        summaries.sort_by_key(|summary| (summary.side == Side::Enemy, summary.slot));

        let winner = monitor.await.map_err(BattleError::MonitorFailed)?;

        let survivors = self
            .player
            .survivors()
            .chain(self.enemy.survivors())
            .map(|unit| unit.name().to_string())
            .collect::<Vec<_>>();

        tracing::info!(%winner, survivors = survivors.len(), "battle over");

        Ok(BattleReport {
            winner,
            agents: summaries,
            survivors,
        })
    }

    fn spawn_side(
        &self,
        agents: &mut JoinSet<AgentSummary>,
        own: &Roster,
        opponents: &Arc<Roster>,
        watch: &GameOverWatch,
    ) {
        for (slot, unit) in own.units().iter().enumerate() {
            let agent = UnitAgent::new(
                Arc::clone(unit),
                own.side(),
                slot,
                Arc::clone(opponents),
                Arc::clone(&self.narrator),
                watch.clone(),
                &self.config,
            );
            agents.spawn(agent.run());
        }
    }
}
