//! Narration to standard output.

use std::io::Write;

use skirmish_core::events::{BattleEvent, Narrator};

/// Prints each event as one line on stdout.
///
/// Lines from concurrent agents never interleave: each write holds the
/// stdout lock for the whole line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNarrator;

impl Narrator for StdoutNarrator {
    fn narrate(&self, event: &BattleEvent) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{event}") {
            tracing::warn!(error = %err, "failed to write narration");
        }
    }
}
