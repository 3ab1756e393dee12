// Debounce primitive for filter recomputation
//
// Every input-change event arms a deadline; arming again replaces any
// pending deadline (last-write-wins, at most one pending at a time).
// The event loop sleeps until the deadline and calls fire_at when it
// expires, so a burst of keystrokes collapses into one recompute that
// sees the final query state.
//
// All methods take explicit instants, which keeps the collapse
// behavior testable without wall-clock sleeps.

use std::time::{Duration, Instant};

/// Cancellable single-deadline scheduler
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + delay`.
    /// A pending deadline is replaced, never queued.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The pending deadline, if one is armed
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has expired at `now`.
    /// Returns true exactly once per armed deadline.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    #[test]
    fn fires_once_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.arm(t0);
        assert!(!debouncer.fire_at(t0 + Duration::from_millis(100)));
        assert!(debouncer.fire_at(t0 + DELAY));
        // Consumed: does not fire again
        assert!(!debouncer.fire_at(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn rearming_collapses_a_burst_into_one_firing() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        // Five events, 50ms apart - each within the delay of the last
        for i in 0..5 {
            let now = t0 + Duration::from_millis(50 * i);
            debouncer.arm(now);
            // Nothing fires while the burst is ongoing
            assert!(!debouncer.fire_at(now));
        }

        let last_event = t0 + Duration::from_millis(200);
        // Still pending just before the final deadline
        assert!(!debouncer.fire_at(last_event + DELAY - Duration::from_millis(1)));
        // Exactly one firing, at the deadline of the last event
        assert!(debouncer.fire_at(last_event + DELAY));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.arm(t0);
        debouncer.cancel();
        assert!(!debouncer.fire_at(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn rearm_pushes_deadline_forward() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.arm(t0);
        let first = debouncer.deadline().unwrap();
        debouncer.arm(t0 + Duration::from_millis(150));
        let second = debouncer.deadline().unwrap();
        assert!(second > first);
        // The original deadline no longer fires
        assert!(!debouncer.fire_at(first));
    }
}
