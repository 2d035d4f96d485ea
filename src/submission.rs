use tracing::{debug, info};

use crate::error::Rejection;
use crate::timer::{Fired, Scheduler, TimerHandle, TimerKind};

/// How long the confirmation step runs before the flow resolves.
pub const CONFIRMATION_MS: u64 = 7_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    AwaitingConfirmation,
    Terminated(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Entered the confirmation step.
    Started,
    /// The trigger is disabled in the current state.
    Ignored,
}

/// Idle -> AwaitingConfirmation -> Terminated(Failure).
///
/// There is no success edge. Once confirmation starts it always resolves
/// to [`Outcome::Failure`] after [`CONFIRMATION_MS`], regardless of input.
#[derive(Debug)]
pub struct Sequencer {
    state: SubmissionState,
    timeout: Option<TimerHandle>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            timeout: None,
        }
    }

    pub fn submit(
        &mut self,
        receipt_present: bool,
        scheduler: &mut Scheduler,
    ) -> Result<SubmitResult, Rejection> {
        if self.state != SubmissionState::Idle {
            debug!(state = ?self.state, "submit ignored");
            return Ok(SubmitResult::Ignored);
        }
        if !receipt_present {
            return Err(Rejection::MissingReceipt);
        }

        self.timeout = Some(scheduler.schedule(CONFIRMATION_MS, TimerKind::ConfirmationTimeout));
        self.state = SubmissionState::AwaitingConfirmation;
        info!(at_ms = scheduler.now_ms(), "confirmation started");
        Ok(SubmitResult::Started)
    }

    pub fn on_timeout(&mut self) -> Option<Outcome> {
        self.timeout.take()?;
        if self.state != SubmissionState::AwaitingConfirmation {
            return None;
        }
        self.state = SubmissionState::Terminated(Outcome::Failure);
        info!("confirmation resolved to failure");
        Some(Outcome::Failure)
    }

    pub fn owns(&self, fired: &Fired) -> bool {
        self.timeout.as_ref().is_some_and(|h| fired.is(h))
    }

    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.timeout.take() {
            if scheduler.cancel(handle) {
                debug!("pending confirmation cancelled");
            }
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_confirming(&self) -> bool {
        self.state == SubmissionState::AwaitingConfirmation
    }

    pub fn accepts_submit(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    pub fn accepts_file_selection(&self) -> bool {
        self.state == SubmissionState::Idle
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
