//! Pacing for automated seats.
//!
//! A bot's turn is played only after a short delay so a human can follow the
//! table. The delay is cancellable from another thread through a
//! [`TimerHandle`], for example when the session is torn down mid-hand.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The full delay elapsed; the bot may act.
    Fired,
    /// Someone cancelled the wait; the bot must not act.
    Cancelled,
}

/// Cancels waits on the [`BotTimer`] it came from.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    tx: Sender<()>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        // the timer may already be gone, which is fine
        let _ = self.tx.send(());
    }
}

#[derive(Debug)]
pub struct BotTimer {
    delay: Duration,
    tx: Sender<()>,
    rx: Receiver<()>,
    deadline: Option<Instant>,
}

impl BotTimer {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            delay,
            tx,
            rx,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Time left in the current wait, if one is running.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Drops cancellations that arrived while no wait was running.
    pub fn reset(&mut self) {
        while self.rx.try_recv().is_ok() {}
        self.deadline = None;
    }

    /// Blocks for the configured delay unless cancelled first.
    /// A cancellation sent before the wait started also counts.
    pub fn wait(&mut self) -> TimerOutcome {
        self.deadline = Some(Instant::now() + self.delay);
        let outcome = if self.delay.is_zero() {
            match self.rx.try_recv() {
                Ok(()) => TimerOutcome::Cancelled,
                Err(_) => TimerOutcome::Fired,
            }
        } else {
            match self.rx.recv_timeout(self.delay) {
                Ok(()) => TimerOutcome::Cancelled,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    TimerOutcome::Fired
                }
            }
        };
        self.deadline = None;
        tracing::trace!(?outcome, delay_ms = self.delay.as_millis() as u64, "bot timer");
        outcome
    }
}
