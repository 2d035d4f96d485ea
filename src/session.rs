//! The payment form's interaction state machine.
//!
//! A [`PaymentSession`] owns the countdown, the receipt selector, the
//! submission sequencer and the scheduler their timers live on. Inputs and
//! clock advances produce [`Effect`]s into an outbox which the presentation
//! layer drains. Teardown is a single path: it cancels every timer and after
//! it nothing in the session changes again.

use tracing::{debug, info, warn};

use crate::clipboard::ClipboardSink;
use crate::config::PaymentInstructions;
use crate::countdown::{Countdown, CountdownEvent, COUNTDOWN_SECS};
use crate::error::{AppError, Rejection};
use crate::notify::Notification;
use crate::receipt::{ReceiptCandidate, ReceiptFile, ReceiptSelector};
use crate::route::Destination;
use crate::submission::{Outcome, Sequencer, SubmissionState, SubmitResult};
use crate::timer::{Fired, Scheduler};

pub const CONFIRMING_MESSAGE: &str = "Confirming payment...";
pub const COPIED_MESSAGE: &str = "Account number copied to clipboard";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy account number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Navigate(Destination),
}

#[derive(Debug)]
pub struct PaymentSession {
    instructions: PaymentInstructions,
    scheduler: Scheduler,
    countdown: Countdown,
    receipt: ReceiptSelector,
    sequencer: Sequencer,
    outbox: Vec<Effect>,
    torn_down: bool,
}

impl PaymentSession {
    pub fn mount(instructions: PaymentInstructions) -> Self {
        Self::mount_with_countdown(instructions, COUNTDOWN_SECS)
    }

    /// Mounts with a shorter countdown, clamped to [`COUNTDOWN_SECS`].
    pub fn mount_with_countdown(instructions: PaymentInstructions, secs: u32) -> Self {
        let mut session = Self {
            instructions,
            scheduler: Scheduler::new(),
            countdown: Countdown::with_seconds(secs),
            receipt: ReceiptSelector::new(),
            sequencer: Sequencer::new(),
            outbox: Vec::new(),
            torn_down: false,
        };

        info!(seconds = session.countdown.remaining(), "payment session mounted");
        if let Some(CountdownEvent::Expired) = session.countdown.start(&mut session.scheduler) {
            session.navigate(Destination::PaymentFailed);
        }
        session
    }

    /// Returns the stored receipt on acceptance, `None` when file selection
    /// is currently disabled.
    pub fn select_file(
        &mut self,
        candidate: ReceiptCandidate,
    ) -> Result<Option<&ReceiptFile>, Rejection> {
        if !self.can_select_file() {
            debug!("file selection disabled");
            return Ok(None);
        }

        match self.receipt.select(candidate) {
            Ok(file) => Ok(Some(file)),
            Err(rejection) => {
                self.outbox
                    .push(Effect::Notify(Notification::error(rejection.to_string())));
                Err(rejection)
            }
        }
    }

    pub fn submit(&mut self) -> Result<SubmitResult, Rejection> {
        if self.torn_down {
            return Ok(SubmitResult::Ignored);
        }

        match self
            .sequencer
            .submit(self.receipt.has_file(), &mut self.scheduler)
        {
            Ok(SubmitResult::Started) => {
                self.outbox
                    .push(Effect::Notify(Notification::info(CONFIRMING_MESSAGE)));
                Ok(SubmitResult::Started)
            }
            Ok(SubmitResult::Ignored) => Ok(SubmitResult::Ignored),
            Err(rejection) => {
                warn!("submit without receipt");
                self.outbox
                    .push(Effect::Notify(Notification::error(rejection.to_string())));
                Err(rejection)
            }
        }
    }

    /// Copies the account number. Has no effect on the state machine.
    pub fn copy_account_number(
        &mut self,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<(), AppError> {
        if self.torn_down {
            return Ok(());
        }

        match clipboard.set_text(&self.instructions.account_number) {
            Ok(()) => {
                self.outbox
                    .push(Effect::Notify(Notification::success(COPIED_MESSAGE)));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.outbox
                    .push(Effect::Notify(Notification::error(COPY_FAILED_MESSAGE)));
                Err(e)
            }
        }
    }

    /// Moves the session clock forward, firing every timer that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.torn_down {
            return;
        }

        let target = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(fired) = self.scheduler.next_due(target) {
            self.dispatch(fired);
        }
        self.scheduler.settle(target);
    }

    fn dispatch(&mut self, fired: Fired) {
        if self.countdown.owns(&fired) {
            if let Some(CountdownEvent::Expired) = self.countdown.on_tick(&mut self.scheduler) {
                self.navigate(Destination::PaymentFailed);
            }
        } else if self.sequencer.owns(&fired) {
            if let Some(Outcome::Failure) = self.sequencer.on_timeout() {
                self.navigate(Destination::PaymentFailed);
            }
        } else {
            debug!(id = fired.id, kind = ?fired.kind, "stale timer ignored");
        }
    }

    fn navigate(&mut self, dest: Destination) {
        info!(path = dest.path(), at_ms = self.scheduler.now_ms(), "navigation requested");
        self.outbox.push(Effect::Navigate(dest));
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    /// Cancels all pending timers and discards undelivered effects. Safe to
    /// call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.countdown.cancel(&mut self.scheduler);
        self.sequencer.cancel(&mut self.scheduler);
        self.scheduler.clear();
        self.outbox.clear();
        self.torn_down = true;
        info!(at_ms = self.scheduler.now_ms(), "payment session torn down");
    }

    pub fn instructions(&self) -> &PaymentInstructions {
        &self.instructions
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn time_left(&self) -> String {
        self.countdown.display()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn receipt(&self) -> Option<&ReceiptFile> {
        self.receipt.file()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.sequencer.state()
    }

    pub fn is_confirming(&self) -> bool {
        self.sequencer.is_confirming()
    }

    pub fn can_submit(&self) -> bool {
        !self.torn_down && self.sequencer.accepts_submit()
    }

    pub fn can_select_file(&self) -> bool {
        !self.torn_down && self.sequencer.accepts_file_selection()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for PaymentSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
