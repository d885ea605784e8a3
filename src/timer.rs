//! Auto-advance timer state machine.
//!
//! The timer is a value, not a scheduled callback: arming it yields the
//! delay to schedule plus an epoch stamp, and a tick message only takes
//! effect if it still carries the live epoch. Re-arming replaces the value
//! and bumps the epoch, which invalidates every previously scheduled tick,
//! so at most one pending tick can ever fire.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Disarmed,
    Armed { interval: Duration },
}

/// Disarmed/Armed auto-advance timer with epoch-based invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTimer {
    state: TimerState,
    epoch: u64,
}

impl Default for SlideTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Disarmed,
            epoch: 0,
        }
    }

    /// Disarms the timer. Any tick already in flight becomes stale.
    pub fn disarm(&mut self) {
        self.state = TimerState::Disarmed;
        self.epoch += 1;
    }

    /// Disarms, then arms for a fresh full interval if the carousel has more
    /// than one slide and a positive interval is configured. Returns the
    /// delay to schedule and the epoch the resulting tick must carry, or
    /// `None` if the timer stays disarmed.
    pub fn rearm(&mut self, slide_count: usize, interval_secs: Option<f32>) -> Option<(Duration, u64)> {
        self.disarm();

        match interval_secs {
            Some(secs) if slide_count > 1 && secs > 0.0 => {
                // Non-finite and Duration-overflowing intervals leave the
                // timer disarmed, like the non-positive ones above.
                let interval = Duration::try_from_secs_f32(secs).ok()?;
                self.state = TimerState::Armed { interval };
                self.epoch += 1;
                Some((interval, self.epoch))
            }
            _ => None,
        }
    }

    /// Whether a tick stamped with `epoch` is still the live one.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.is_armed() && self.epoch == epoch
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            TimerState::Armed { interval } => Some(interval),
            TimerState::Disarmed => None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
