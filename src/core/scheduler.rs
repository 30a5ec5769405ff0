//! Periodic cadence driving the tracker ticks.
//!
//! The session owns exactly one [`TimerHandle`] at a time. Hosts drive the
//! cadence by calling [`Scheduler::wait`] between ticks.

use super::clock::ManualClock;
use chrono::TimeDelta;
use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    fn schedule(&mut self, interval: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    fn is_scheduled(&self, handle: TimerHandle) -> bool;

    /// Block until the next firing of `handle`.
    /// Returns `false` when the handle is not (or no longer) scheduled.
    fn wait(&mut self, handle: TimerHandle) -> bool;
}

struct Timer {
    interval: Duration,
    next_due: Instant,
}

/// Real-time scheduler: `wait` sleeps the current thread.
#[derive(Default)]
pub struct IntervalScheduler {
    next_id: u64,
    timers: HashMap<TimerHandle, Timer>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.insert(
            handle,
            Timer {
                interval,
                next_due: Instant::now() + interval,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }

    fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    fn wait(&mut self, handle: TimerHandle) -> bool {
        let Some(timer) = self.timers.get_mut(&handle) else {
            return false;
        };

        let now = Instant::now();
        if timer.next_due > now {
            thread::sleep(timer.next_due - now);
            timer.next_due += timer.interval;
        } else {
            // fell behind (suspended process, slow terminal): skip missed firings
            timer.next_due = now + timer.interval;
        }
        true
    }
}

/// Scheduler for tests: never sleeps, counts what happened and optionally
/// moves a [`ManualClock`] forward by the interval on every `wait`.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: HashMap<TimerHandle, Duration>,
    clock: Option<ManualClock>,
    pub scheduled: usize,
    pub cancelled: usize,
    pub fired: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn driving(clock: ManualClock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        self.scheduled += 1;
        let handle = TimerHandle(self.next_id);
        self.active.insert(handle, interval);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active.remove(&handle).is_some() {
            self.cancelled += 1;
        }
    }

    fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.active.contains_key(&handle)
    }

    fn wait(&mut self, handle: TimerHandle) -> bool {
        let Some(&interval) = self.active.get(&handle) else {
            return false;
        };
        if let Some(clock) = &self.clock {
            clock.advance(TimeDelta::from_std(interval).unwrap_or(TimeDelta::zero()));
        }
        self.fired += 1;
        true
    }
}
