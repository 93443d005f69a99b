use std::time::Duration;

use crate::error::CycleError;

mod core;
mod state;

pub use state::PollState;

/// Owns everything one poll loop needs: where to fetch, where to send and what it remembers.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    state: PollState,
    retry_period: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub notified: usize,
    pub cursor: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed(CycleReport),
    /// `surfaced` is true when the diagnostic reached the chat on this cycle.
    Failed { error: CycleError, surfaced: bool },
}

impl<S, N> Poller<S, N> {
    pub fn new(source: S, notifier: N, state: PollState, retry_period: Duration) -> Self {
        Self {
            source,
            notifier,
            state,
            retry_period,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PollState {
        &self.state
    }
}
