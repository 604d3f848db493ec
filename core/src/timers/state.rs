//! Timer snapshot types and tick arithmetic

/// Ticks after the last hit before logging out is allowed.
pub const COMBAT_TIMEOUT_TICKS: u32 = 16;

/// Real-world length of one game tick.
pub const MILLIS_PER_TICK: u32 = 600;

/// Convert the configured grace period to game ticks.
///
/// Truncating `secs * 50 / 30` (0.6 s per tick), so 3 s → 5 ticks.
pub fn grace_period_ticks(secs: u32) -> u32 {
    secs.saturating_mul(50) / 30
}

/// Whole seconds left in a grace window, as shown in the "OK (n)" label.
pub fn grace_ticks_to_secs(grace_ticks: u32) -> u32 {
    grace_ticks.saturating_mul(30) / 50
}

/// Which leg of the countdown the timer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Nothing to show
    Idle,
    /// Recently hit, logging out is blocked
    Counting,
    /// Countdown expired, still showing confirmation
    Grace,
}

/// Read-only copy of the timer counters handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub logout_ticks: u32,
    pub grace_ticks: u32,
}

impl DisplayState {
    pub fn phase(&self) -> TimerPhase {
        if self.logout_ticks > 0 {
            TimerPhase::Counting
        } else if self.grace_ticks > 0 {
            TimerPhase::Grace
        } else {
            TimerPhase::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == TimerPhase::Idle
    }

    /// Elapsed fraction of the countdown: 0.0 just hit, 1.0 expired.
    pub fn progress(&self) -> f32 {
        let remaining = self.logout_ticks.min(COMBAT_TIMEOUT_TICKS) as f32;
        1.0 - remaining / COMBAT_TIMEOUT_TICKS as f32
    }
}
