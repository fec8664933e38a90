//! Auto-hide of the viewer chrome after a stretch without input.
//!
//! At most one idle timer is pending at a time. Every activity supersedes the
//! previous timer by bumping a generation counter, so a timer that was
//! cancelled but still fires (or a host timer that cannot be cancelled) is
//! ignored.

use log::debug;

pub const IDLE_AFTER_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub generation: u64,
    pub deadline_ms: u64,
}

impl PendingTimer {
    pub fn delay_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }
}

#[derive(Debug, Clone)]
pub struct IdleTracker {
    idle_after_ms: u64,
    is_idle: bool,
    generation: u64,
    pending: Option<PendingTimer>,
}

impl IdleTracker {
    pub fn new(idle_after_ms: u64) -> Self {
        Self {
            idle_after_ms,
            is_idle: false,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.is_idle
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Pointer or keyboard activity: show the chrome and restart the timer.
    pub fn activity(&mut self, now_ms: u64) -> PendingTimer {
        self.is_idle = false;
        self.generation += 1;
        let timer = PendingTimer {
            generation: self.generation,
            deadline_ms: now_ms + self.idle_after_ms,
        };
        self.pending = Some(timer);
        timer
    }

    /// The timer for `generation` went off. Returns `true` only when this
    /// flips the tracker into the idle state.
    pub fn fire(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(timer) if timer.generation == generation => {
                self.pending = None;
                self.is_idle = true;
                debug!("viewer idle (timer {generation})");
                true
            }
            _ => false,
        }
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(timer) if now_ms >= timer.deadline_ms => self.fire(timer.generation),
            _ => false,
        }
    }

    /// Drop the pending timer without going idle.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for IdleTracker {
    fn default() -> Self {
        Self::new(IDLE_AFTER_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_activity_keeps_single_timer() {
        let mut idle = IdleTracker::default();
        let mut last = idle.activity(0);
        for t in (100..2900).step_by(100) {
            last = idle.activity(t);
            assert!(!idle.is_idle());
            assert!(!idle.poll(t));
        }
        assert_eq!(idle.pending(), Some(last));
        assert_eq!(last.deadline_ms, 2800 + IDLE_AFTER_MS);
    }

    #[test]
    fn test_goes_idle_exactly_once() {
        let mut idle = IdleTracker::default();
        idle.activity(1000);
        assert!(!idle.poll(3999));
        assert!(idle.poll(4000));
        assert!(idle.is_idle());
        assert!(!idle.poll(5000));
        assert!(idle.pending().is_none());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut idle = IdleTracker::default();
        let first = idle.activity(0);
        let second = idle.activity(500);
        assert!(!idle.fire(first.generation));
        assert!(!idle.is_idle());
        assert!(idle.fire(second.generation));
    }

    #[test]
    fn test_activity_wakes_from_idle() {
        let mut idle = IdleTracker::default();
        let t = idle.activity(0);
        idle.fire(t.generation);
        assert!(idle.is_idle());
        idle.activity(10_000);
        assert!(!idle.is_idle());
    }

    #[test]
    fn test_cancel_never_goes_idle() {
        let mut idle = IdleTracker::default();
        idle.activity(0);
        idle.cancel();
        assert!(!idle.poll(1_000_000));
        assert!(!idle.is_idle());
    }

    #[test]
    fn test_delay_saturates() {
        let t = PendingTimer {
            generation: 1,
            deadline_ms: 3000,
        };
        assert_eq!(t.delay_ms(1000), 2000);
        assert_eq!(t.delay_ms(4000), 0);
    }
}
