//! Periodic timer scheduling on simulation time.
//!
//! The engine owns one `Scheduler`. Starting or resetting a run and
//! completing it call `cancel_all`; the generation counter lets the engine
//! discard ticks handed out before the cancellation.

/// The three periodic processes. Ordering breaks ties between timers due
/// at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    Countdown,
    Hazard,
    Execution,
}

/// A due timer, stamped with the generation that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub kind: TimerKind,
    pub generation: u64,
    pub due_ms: u64,
}

#[derive(Debug, Clone)]
struct Timer {
    kind: TimerKind,
    period_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    generation: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler clock (ms).
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop every timer and invalidate ticks already handed out.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
        self.generation += 1;
    }

    /// Fire `kind` every `period_ms`, first one period from now. Replaces an
    /// existing timer of the same kind.
    pub fn schedule_every(&mut self, kind: TimerKind, period_ms: u64) {
        let period_ms = period_ms.max(1);
        self.timers.retain(|t| t.kind != kind);
        self.timers.push(Timer {
            kind,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// Moves the clock to the tick's due time and re-arms the timer for its
    /// next period. Returns `None` when nothing is due.
    pub fn next_due(&mut self, until_ms: u64) -> Option<ScheduledTick> {
        let timer = self
            .timers
            .iter_mut()
            .filter(|t| t.next_due_ms <= until_ms)
            .min_by_key(|t| (t.next_due_ms, t.kind))?;

        let due_ms = timer.next_due_ms;
        timer.next_due_ms += timer.period_ms;
        let kind = timer.kind;
        self.now_ms = self.now_ms.max(due_ms);

        Some(ScheduledTick {
            kind,
            generation: self.generation,
            due_ms,
        })
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Whether `tick` was issued by the current generation.
    pub fn is_current(&self, tick: &ScheduledTick) -> bool {
        tick.generation == self.generation
    }
}
