//! Skirmish - real-time battle simulator
//!
//! Narration goes to stdout, diagnostics to stderr (filter with `RUST_LOG`).

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skirmish_core::roster::Side;
use skirmish_runtime::Battle;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing on stderr so it never mixes with narration
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Skirmish");

    let report = match Battle::standard() {
        Ok(battle) => battle.run().await,
        Err(err) => Err(err),
    };

    match report {
        Ok(report) => {
            tracing::info!(
                winner = %report.winner,
                player_kills = report.kills(Side::Player),
                enemy_kills = report.kills(Side::Enemy),
                survivors = ?report.survivors,
                "Skirmish finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Skirmish aborted");
            ExitCode::FAILURE
        }
    }
}
