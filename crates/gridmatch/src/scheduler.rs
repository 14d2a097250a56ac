//! Delayed, cancellable automated moves.
//!
//! The computer's reply is computed against a specific round and
//! delivered after a short pause on an event channel. Starting a new
//! round or resetting the session cancels the pending task. The session
//! also refuses moves tagged with an old [`RoundId`], so a reply that
//! slips past cancellation still cannot land on the wrong round.

use gridmatch_core::{Position, RoundId};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Events delivered to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The automated player's delayed move is due.
    AutomatedMove {
        /// Round the move was computed against.
        round_id: RoundId,
        /// Chosen square.
        position: Position,
    },
}

/// At most one pending automated move.
///
/// Created with `AutomatedTurn::new(delay, tx)`; moves are delivered on
/// `tx` after `delay`.
#[derive(Debug, derive_new::new)]
pub struct AutomatedTurn {
    delay: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    #[new(default)]
    pending: Option<(RoundId, JoinHandle<()>)>,
}

impl AutomatedTurn {
    /// Schedules `position` for `round_id`, replacing anything pending.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, round_id: RoundId, position: Position) {
        self.cancel();

        let delay = self.delay;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppEvent::AutomatedMove { round_id, position });
        });

        debug!("Automated move scheduled");
        self.pending = Some((round_id, handle));
    }

    /// Aborts the pending move, if any.
    pub fn cancel(&mut self) {
        if let Some((round_id, handle)) = self.pending.take() {
            debug!(%round_id, "Cancelling pending automated move");
            handle.abort();
        }
    }

    /// Marks the move for `round_id` as delivered.
    pub fn complete(&mut self, round_id: RoundId) {
        if self.pending_round() == Some(round_id) {
            self.pending = None;
        }
    }

    /// Round the pending move belongs to.
    pub fn pending_round(&self) -> Option<RoundId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// True while a move is scheduled and not yet handled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for AutomatedTurn {
    fn drop(&mut self) {
        self.cancel();
    }
}
