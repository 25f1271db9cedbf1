//! Poll-driven trailing debounce.
//!
//! No threads and no timers: the host pumps [`Debounce::poll`] from whatever
//! tick it already has (a frame loop, a timer wheel, a test clock), and the
//! latest payload fires once the quiet period elapses. Re-triggering before
//! the deadline replaces the payload and pushes the deadline out.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer holding the latest payload.
#[derive(Debug)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    /// New debouncer with the given quiet period. A zero delay makes
    /// [`Debounce::trigger`] fire immediately.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an occurrence at `now`.
    ///
    /// With a zero delay the payload is returned right away and nothing is
    /// queued. Otherwise the payload replaces any pending one and the
    /// deadline restarts.
    pub fn trigger(&mut self, now: Instant, payload: T) -> Option<T> {
        if self.delay.is_zero() {
            self.pending = None;
            return Some(payload);
        }
        self.pending = Some((now + self.delay, payload));
        None
    }

    /// Fire the pending payload if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    /// Drop the pending payload without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a payload is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending payload, for hosts that sleep until the next
    /// interesting instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_after_quiet_period() {
        let mut d = Debounce::new(DELAY);
        let t0 = Instant::now();
        assert_eq!(d.trigger(t0, "a"), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.poll(t0 + DELAY), Some("a"));
        assert!(!d.is_pending());
    }

    #[test]
    fn retrigger_coalesces_and_extends() {
        let mut d = Debounce::new(DELAY);
        let t0 = Instant::now();
        d.trigger(t0, "first");
        d.trigger(t0 + Duration::from_millis(200), "second");
        // Original deadline passes without firing.
        assert_eq!(d.poll(t0 + DELAY), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some("second"));
    }

    #[test]
    fn zero_delay_is_immediate() {
        let mut d = Debounce::new(Duration::ZERO);
        let t0 = Instant::now();
        assert_eq!(d.trigger(t0, 7), Some(7));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0), None);
    }

    #[test]
    fn cancel_drops_payload() {
        let mut d = Debounce::new(DELAY);
        let t0 = Instant::now();
        d.trigger(t0, "x");
        d.cancel();
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn poll_fires_once() {
        let mut d = Debounce::new(DELAY);
        let t0 = Instant::now();
        d.trigger(t0, 1);
        assert_eq!(d.poll(t0 + DELAY), Some(1));
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn deadline_is_exposed() {
        let mut d = Debounce::new(DELAY);
        assert_eq!(d.next_deadline(), None);
        let t0 = Instant::now();
        d.trigger(t0, ());
        assert_eq!(d.next_deadline(), Some(t0 + DELAY));
    }
}
