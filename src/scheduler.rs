//! Tick source seam.
//!
//! The game asks a [`Scheduler`] for a repeating timer and later cancels it.
//! Whoever drives the scheduler delivers each due tick back to the game
//! together with the handle it belongs to.

use std::time::{Duration, Instant};

/// Identifies one started timer. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        TimerHandle(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Start a timer firing every `interval`.
    fn start(&mut self, interval: Duration) -> TimerHandle;

    /// Stop `handle`. Cancelling an unknown or already cancelled handle is a
    /// no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Debug)]
struct ActiveTimer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Instant,
}

/// Fixed-interval timers driven by polling with the current time.
///
/// A timer that falls more than one interval behind skips the missed ticks
/// rather than firing a burst.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    timers: Vec<ActiveTimer>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        IntervalScheduler::default()
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Earliest instant at which some timer becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.next_due).min()
    }

    /// Handles of every timer due at `now`, each rescheduled for its next
    /// period.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut due = Vec::new();
        for timer in &mut self.timers {
            if timer.next_due > now {
                continue;
            }
            due.push(timer.handle);
            timer.next_due += timer.interval;
            if timer.next_due <= now {
                timer.next_due = now + timer.interval;
            }
        }
        due
    }
}

impl Scheduler for IntervalScheduler {
    /// The first tick is due one `interval` after the call.
    fn start(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(ActiveTimer {
            handle,
            interval,
            next_due: Instant::now() + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
