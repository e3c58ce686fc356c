//! Cooperative timers for a single-threaded event loop.
//!
//! Neither timer owns a task or a waker: the owning controller stores it and
//! the event loop polls the controller with the current instant. That keeps
//! every timer cancellable by plain state mutation and makes time fully
//! controllable in tests.

use embassy_time::{Duration, Instant};

/// A cancellable one-shot deferred task carrying a payload.
///
/// At most one task is pending: scheduling again supersedes (and returns)
/// the previous payload.
#[derive(Debug, Clone)]
pub struct OneShot<T> {
    pending: Option<(Instant, T)>,
}

impl<T> OneShot<T> {
    /// Create an idle one-shot.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` to become due `delay` after `now`.
    ///
    /// Returns the superseded payload, if any.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> Option<T> {
        let due = now.checked_add(delay).unwrap_or(now);
        self.pending
            .replace((due, payload))
            .map(|(_, superseded)| superseded)
    }

    /// Cancel the pending task, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    /// Whether a task is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The instant the pending task becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// Take the payload if the task is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((due, _)) if due <= now => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A recurring timer with a fixed period.
///
/// The timer is either armed (one deadline) or stopped; re-arming replaces
/// the deadline, so there is never more than one schedule per instance.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// Create a stopped interval.
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Arm (or re-arm) the timer: the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now.checked_add(self.period).unwrap_or(now));
    }

    /// Stop the timer. Pending ticks are discarded.
    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Whether the timer is armed.
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// The timer period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The instant of the next tick, when armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Count the ticks that elapsed up to `now` and move the deadline past it.
    ///
    /// A poll that arrives late reports every missed period, so a caller
    /// polling after `3 × period` sees 3 ticks, not 1.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        let Some(late) = now.checked_duration_since(next) else {
            return 0;
        };

        let period_ticks = self.period.as_ticks();
        if period_ticks == 0 {
            // Degenerate period: one tick per poll, re-armed at `now`.
            self.next = Some(now);
            return 1;
        }

        let fired = late
            .as_ticks()
            .checked_div(period_ticks)
            .unwrap_or(0)
            .saturating_add(1);
        let advance = Duration::from_ticks(period_ticks.saturating_mul(fired));
        self.next = Some(next.checked_add(advance).unwrap_or(now));
        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_one_shot_not_due_before_deadline() {
        let mut task = OneShot::new();
        task.schedule(at(0), Duration::from_millis(50), "play");
        assert_eq!(task.take_due(at(49)), None);
        assert!(task.is_pending());
    }

    #[test]
    fn test_one_shot_due_at_deadline() {
        let mut task = OneShot::new();
        task.schedule(at(0), Duration::from_millis(50), "play");
        assert_eq!(task.take_due(at(50)), Some("play"));
        assert!(!task.is_pending());
        // Fires once only.
        assert_eq!(task.take_due(at(100)), None);
    }

    #[test]
    fn test_one_shot_zero_delay_due_immediately() {
        let mut task = OneShot::new();
        task.schedule(at(10), Duration::from_millis(0), 1u8);
        assert_eq!(task.take_due(at(10)), Some(1));
    }

    #[test]
    fn test_one_shot_schedule_supersedes() {
        let mut task = OneShot::new();
        assert_eq!(task.schedule(at(0), Duration::from_millis(10), 'a'), None);
        assert_eq!(task.schedule(at(5), Duration::from_millis(10), 'b'), Some('a'));
        assert_eq!(task.deadline(), Some(at(15)));
        assert_eq!(task.take_due(at(15)), Some('b'));
    }

    #[test]
    fn test_one_shot_cancel() {
        let mut task = OneShot::new();
        task.schedule(at(0), Duration::from_millis(10), 7u32);
        assert_eq!(task.cancel(), Some(7));
        assert_eq!(task.take_due(at(100)), None);
    }

    #[test]
    fn test_interval_stopped_never_ticks() {
        let mut timer = Interval::new(Duration::from_millis(100));
        assert_eq!(timer.poll(at(1_000)), 0);
    }

    #[test]
    fn test_interval_ticks_once_per_period() {
        let mut timer = Interval::new(Duration::from_millis(100));
        timer.start(at(0));
        assert_eq!(timer.poll(at(99)), 0);
        assert_eq!(timer.poll(at(100)), 1);
        assert_eq!(timer.poll(at(150)), 0);
        assert_eq!(timer.poll(at(200)), 1);
    }

    #[test]
    fn test_interval_reports_missed_periods() {
        let mut timer = Interval::new(Duration::from_millis(100));
        timer.start(at(0));
        assert_eq!(timer.poll(at(350)), 3);
        assert_eq!(timer.next_deadline(), Some(at(400)));
    }

    #[test]
    fn test_interval_restart_replaces_deadline() {
        let mut timer = Interval::new(Duration::from_millis(100));
        timer.start(at(0));
        timer.start(at(60));
        assert_eq!(timer.poll(at(100)), 0);
        assert_eq!(timer.poll(at(160)), 1);
    }

    #[test]
    fn test_interval_stop_discards_pending() {
        let mut timer = Interval::new(Duration::from_millis(100));
        timer.start(at(0));
        timer.stop();
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(at(500)), 0);
    }
}
