use std::time::{Duration, Instant};

/// Holds back a value until input has been quiet for `delay`
///
/// Only the most recent value scheduled within a quiet window survives.
/// Scheduling never fires anything itself: the owner polls
/// [`Debouncer::take_ready`] from its event loop, so even a zero delay is
/// delivered on the next tick rather than synchronously.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Value waiting for the debounce period to expire
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_input_time: None,
            pending: None,
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn schedule(&mut self, value: T) {
        self.schedule_at(value, Instant::now());
    }

    /// Replace any pending value and restart the quiet window at `now`
    pub fn schedule_at(&mut self, value: T, now: Instant) {
        self.last_input_time = Some(now);
        self.pending = Some(value);
    }

    pub fn should_execute_at(&self, now: Instant) -> bool {
        if self.pending.is_none() {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.delay,
            None => false,
        }
    }

    pub fn take_ready(&mut self) -> Option<T> {
        self.take_ready_at(Instant::now())
    }

    /// Hand out the pending value if its quiet window has elapsed
    pub fn take_ready_at(&mut self, now: Instant) -> Option<T> {
        if !self.should_execute_at(now) {
            return None;
        }
        self.last_input_time = None;
        self.pending.take()
    }

    /// Drop the pending value without delivering it
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value becomes ready, if any
    pub fn time_until_ready_at(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref()?;
        let last_time = self.last_input_time?;
        Some(self.delay.saturating_sub(now.saturating_duration_since(last_time)))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
