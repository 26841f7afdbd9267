use crate::GameEvent;

/// The time budget of a rush run.
///
/// The clock does not read wall time. An external scheduler calls
/// [`RushClock::tick`] once per second; ticks that arrive while the clock is
/// paused are dropped, so resuming continues from the exact remaining value.
///
/// # Examples
///
/// ```
/// use gridcrack_game::{GameEvent, RushClock};
///
/// let mut clock = RushClock::new(3, 2);
/// assert_eq!(clock.tick(), Some(GameEvent::TimerWarning { remaining: 2 }));
///
/// clock.pause();
/// assert_eq!(clock.tick(), None);
/// assert_eq!(clock.remaining(), 2);
///
/// clock.resume();
/// clock.tick();
/// assert_eq!(clock.tick(), Some(GameEvent::TimeExpired));
/// assert!(clock.is_expired());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RushClock {
    remaining: u32,
    warning_threshold: u32,
    paused: bool,
}

impl RushClock {
    /// Creates a running clock with `seconds` left.
    #[must_use]
    pub const fn new(seconds: u32, warning_threshold: u32) -> Self {
        Self {
            remaining: seconds,
            warning_threshold,
            paused: false,
        }
    }

    /// Returns the seconds left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns `true` while the clock is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` once the clock has reached zero.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Returns `true` if the remaining time is at or below the warning threshold.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.remaining <= self.warning_threshold
    }

    /// Stops the clock. Pausing a paused clock does nothing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Restarts the clock. Resuming a running clock does nothing.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Adds `seconds` to a clock that has not expired.
    pub fn add_seconds(&mut self, seconds: u32) {
        if !self.is_expired() {
            self.remaining = self.remaining.saturating_add(seconds);
        }
    }

    /// Counts down one second.
    ///
    /// Returns [`GameEvent::TimeExpired`] on the tick that reaches zero and
    /// [`GameEvent::TimerWarning`] on every other tick that ends at or below
    /// the warning threshold. Ticks while paused or expired do nothing.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.paused || self.is_expired() {
            return None;
        }
        self.remaining -= 1;
        if self.is_expired() {
            Some(GameEvent::TimeExpired)
        } else if self.is_warning() {
            Some(GameEvent::TimerWarning {
                remaining: self.remaining,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_quietly_above_threshold() {
        let mut clock = RushClock::new(5, 2);
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.remaining(), 3);
        assert_eq!(clock.tick(), Some(GameEvent::TimerWarning { remaining: 2 }));
        assert_eq!(clock.tick(), Some(GameEvent::TimerWarning { remaining: 1 }));
        assert_eq!(clock.tick(), Some(GameEvent::TimeExpired));
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut clock = RushClock::new(10, 0);
        clock.pause();
        clock.pause();
        for _ in 0..5 {
            assert_eq!(clock.tick(), None);
        }
        assert_eq!(clock.remaining(), 10);

        clock.resume();
        clock.resume();
        assert!(!clock.is_paused());
        clock.tick();
        assert_eq!(clock.remaining(), 9);
    }

    #[test]
    fn test_bonus_only_before_expiry() {
        let mut clock = RushClock::new(1, 0);
        clock.add_seconds(4);
        assert_eq!(clock.remaining(), 5);

        let mut clock = RushClock::new(1, 0);
        assert_eq!(clock.tick(), Some(GameEvent::TimeExpired));
        clock.add_seconds(4);
        assert!(clock.is_expired());
    }

    #[test]
    fn test_zero_budget_starts_expired() {
        let mut clock = RushClock::new(0, 5);
        assert!(clock.is_expired());
        assert_eq!(clock.tick(), None);
    }
}
