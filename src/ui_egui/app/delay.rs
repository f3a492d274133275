//! Cancellable fixed-delay callbacks, polled once per frame.

use std::time::{Duration, Instant};

/// A single pending deadline. Re-scheduling supersedes the previous
/// deadline, so at most one callback is ever outstanding.
#[derive(Debug, Default)]
pub struct DelayedTask {
    due: Option<Instant>,
}

impl DelayedTask {
    pub fn schedule(&mut self, delay: Duration) {
        self.due = Some(Instant::now() + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once, on the first poll at or past the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_deadline() {
        let mut task = DelayedTask::default();
        task.schedule(Duration::from_secs(60));
        let now = Instant::now();
        assert!(!task.fire_if_due(now));
        assert!(task.fire_if_due(now + Duration::from_secs(120)));
        assert!(!task.fire_if_due(now + Duration::from_secs(180)));
    }

    #[test]
    fn cancel_clears_the_deadline() {
        let mut task = DelayedTask::default();
        task.schedule(Duration::from_secs(1));
        task.cancel();
        assert!(!task.is_pending());
        assert!(!task.fire_if_due(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn rescheduling_supersedes_the_earlier_deadline() {
        let mut task = DelayedTask::default();
        task.schedule(Duration::from_secs(1));
        task.schedule(Duration::from_secs(600));
        // The first deadline no longer fires.
        assert!(!task.fire_if_due(Instant::now() + Duration::from_secs(60)));
        assert!(task.is_pending());
    }

    #[test]
    fn remaining_time_counts_down() {
        let mut task = DelayedTask::default();
        assert_eq!(task.remaining(Instant::now()), None);
        task.schedule(Duration::from_secs(60));
        let now = Instant::now();
        let remaining = task.remaining(now).unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(30));
    }
}
