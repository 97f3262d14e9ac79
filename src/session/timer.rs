//! Countdown timer for a quiz session.

/// Lifecycle of a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Created but never started.
    Stopped,
    /// Counting down, one tick per second.
    Running,
    /// Reached zero. Terminal until restarted.
    Expired,
    /// Stopped by a manual submit before reaching zero.
    Cancelled,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was ignored because the timer is not running.
    Idle,
    /// One second elapsed and time remains.
    Counting,
    /// This tick brought the timer to zero.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Timer {
    remaining_seconds: u32,
    status: TimerStatus,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            remaining_seconds: 0,
            status: TimerStatus::Stopped,
        }
    }

    /// Start counting down from `total_seconds`.
    ///
    /// Only a stopped or expired timer can be started; a cancelled timer
    /// stays cancelled and a running one keeps its remaining time.
    pub fn start(&mut self, total_seconds: u32) {
        if matches!(self.status, TimerStatus::Stopped | TimerStatus::Expired) {
            self.remaining_seconds = total_seconds;
            self.status = TimerStatus::Running;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Reports [`TickOutcome::Expired`] exactly once, on the tick that
    /// reaches zero.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != TimerStatus::Running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = TimerStatus::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Counting
        }
    }

    pub fn cancel(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Cancelled;
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Remaining time as `mm:ss`.
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = Timer::new();
        timer.start(120);

        let expirations = (0..120)
            .map(|_| timer.tick())
            .filter(|outcome| *outcome == TickOutcome::Expired)
            .count();

        assert_eq!(expirations, 1);
        assert_eq!(timer.status(), TimerStatus::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_expiry_happens_on_last_tick() {
        let mut timer = Timer::new();
        timer.start(3);

        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::Expired);
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut timer = Timer::new();
        timer.start(2);
        timer.tick();
        timer.cancel();

        assert_eq!(timer.status(), TimerStatus::Cancelled);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds(), 1);
    }

    #[test]
    fn test_cancel_before_final_tick_wins() {
        let mut timer = Timer::new();
        timer.start(1);
        timer.cancel();

        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.status(), TimerStatus::Cancelled);
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut timer = Timer::new();
        timer.start(1);
        timer.tick();
        timer.start(5);

        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn test_stopped_timer_ignores_ticks() {
        let mut timer = Timer::new();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.status(), TimerStatus::Stopped);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(120), "02:00");
        assert_eq!(format_clock(754), "12:34");
    }
}
