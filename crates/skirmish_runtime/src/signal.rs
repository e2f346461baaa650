//! Shared game-over signal.
//!
//! A single-writer broadcast built on [`tokio::sync::watch`]. The monitor
//! owns the [`GameOverSignal`] and sets it once; every agent holds a
//! [`GameOverWatch`] it can poll between rounds or await while paused.
//! The signal carries the winning side.

use skirmish_core::roster::Side;
use tokio::sync::watch;

/// Create a connected signal/watch pair, initially not over.
#[must_use]
pub fn game_over_signal() -> (GameOverSignal, GameOverWatch) {
    let (tx, rx) = watch::channel(None);
    (GameOverSignal { tx }, GameOverWatch { rx })
}

/// Write side of the game-over signal.
#[derive(Debug)]
pub struct GameOverSignal {
    tx: watch::Sender<Option<Side>>,
}

impl GameOverSignal {
    /// Declare `winner` and wake every watcher.
    ///
    /// Only the first call has any effect. Returns whether this call set
    /// the signal.
    pub fn trigger(&self, winner: Side) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(winner);
            true
        })
    }

    /// The declared winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        *self.tx.borrow()
    }

    /// A new watcher for this signal.
    #[must_use]
    pub fn subscribe(&self) -> GameOverWatch {
        GameOverWatch {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read side of the game-over signal.
#[derive(Debug, Clone)]
pub struct GameOverWatch {
    rx: watch::Receiver<Option<Side>>,
}

impl GameOverWatch {
    /// Whether the game has been declared over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// The declared winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        *self.rx.borrow()
    }

    /// Wait until the game is declared over and return the winner.
    ///
    /// Never resolves if the signal is dropped without being set.
    pub async fn wait(&mut self) -> Side {
        let winner = self.rx.wait_for(Option::is_some).await.ok().and_then(|w| *w);
        match winner {
            Some(side) => side,
            None => std::future::pending().await,
        }
    }
}
