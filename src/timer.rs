/// Length of one countdown tick.
pub const TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    CountdownTick,
    ConfirmationTimeout,
}

/// Ownership token for a pending one-shot timer. Not `Clone`: whoever
/// armed the timer is the only one who can cancel it.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: u64,
    pub at_ms: u64,
    pub kind: TimerKind,
}

impl Fired {
    pub fn is(&self, handle: &TimerHandle) -> bool {
        self.id == handle.id
    }
}

#[derive(Debug)]
struct Pending {
    id: u64,
    due_ms: u64,
    kind: TimerKind,
}

/// One-shot timers on a virtual millisecond clock.
///
/// Nothing here sleeps. The owner moves the clock forward with
/// [`Scheduler::next_due`] and [`Scheduler::settle`]; in the TUI that is the
/// measured wall time of each loop iteration, in tests it is exact.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, kind: TimerKind) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            kind,
        });
        TimerHandle { id }
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle.id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: &TimerHandle) -> bool {
        self.pending.iter().any(|p| p.id == handle.id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest timer due at or before `until_ms`,
    /// moving the clock to its due time. Ties fire in arming order.
    pub fn next_due(&mut self, until_ms: u64) -> Option<Fired> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))
            .map(|(i, _)| i)?;

        let p = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(p.due_ms);
        Some(Fired {
            id: p.id,
            at_ms: p.due_ms,
            kind: p.kind,
        })
    }

    /// Moves the clock to `until_ms` once every due timer has been taken.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Formats seconds as zero-padded `mm:ss`.
pub fn format_time(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
