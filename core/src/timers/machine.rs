//! Countdown state machine
//!
//! The timer moves through three phases:
//! - Idle: nothing to show
//! - Counting: hit recently, `logout_ticks` counts down from 16
//! - Grace: countdown over, `grace_ticks` keeps the "OK" display up
//!
//! Any damage to the local player restarts the countdown from the top.

use tracing::debug;

use super::state::{COMBAT_TIMEOUT_TICKS, DisplayState, grace_period_ticks};

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was running
    Idle,
    /// Countdown decremented and is still running
    Counting,
    /// Countdown just hit zero; logging out is now safe
    SafeToLogout,
    /// Grace window decremented and is still running
    Grace,
    /// Grace window just ran out
    GraceEnded,
}

/// Logout countdown counters.
///
/// Both counters only ever decrease between resets, and at most one of them is
/// non-zero at a time.
#[derive(Debug, Clone, Default)]
pub struct CombatTimer {
    logout_ticks: u32,
    grace_ticks: u32,
}

impl CombatTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the countdown after the local player was hit.
    pub fn on_damage(&mut self) {
        self.logout_ticks = COMBAT_TIMEOUT_TICKS;
        self.grace_ticks = 0;
        self.check_invariants();
    }

    /// Advance one game tick.
    ///
    /// `grace_period_secs` is read at expiry time so config edits made while
    /// counting apply to the upcoming grace window.
    pub fn on_tick(&mut self, grace_period_secs: u32) -> TickOutcome {
        let outcome = if self.logout_ticks > 0 {
            self.logout_ticks -= 1;
            if self.logout_ticks == 0 {
                self.grace_ticks = grace_period_ticks(grace_period_secs);
                debug!(
                    grace_ticks = self.grace_ticks,
                    "Combat timer expired, entering grace period"
                );
                TickOutcome::SafeToLogout
            } else {
                TickOutcome::Counting
            }
        } else if self.grace_ticks > 0 {
            self.grace_ticks -= 1;
            if self.grace_ticks == 0 {
                TickOutcome::GraceEnded
            } else {
                TickOutcome::Grace
            }
        } else {
            TickOutcome::Idle
        };

        self.check_invariants();
        outcome
    }

    /// Drop straight back to idle.
    pub fn reset(&mut self) {
        self.logout_ticks = 0;
        self.grace_ticks = 0;
    }

    pub fn logout_ticks(&self) -> u32 {
        self.logout_ticks
    }

    pub fn grace_ticks(&self) -> u32 {
        self.grace_ticks
    }

    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            logout_ticks: self.logout_ticks,
            grace_ticks: self.grace_ticks,
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.logout_ticks == 0 || self.grace_ticks == 0,
            "logout and grace countdowns overlap: {self:?}"
        );
        debug_assert!(self.logout_ticks <= COMBAT_TIMEOUT_TICKS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::TimerPhase;

    fn run_ticks(timer: &mut CombatTimer, n: usize, grace_secs: u32) -> Vec<TickOutcome> {
        (0..n).map(|_| timer.on_tick(grace_secs)).collect()
    }

    #[test]
    fn damage_starts_full_countdown() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        assert_eq!(timer.logout_ticks(), COMBAT_TIMEOUT_TICKS);
        assert_eq!(timer.grace_ticks(), 0);
        assert_eq!(timer.snapshot().phase(), TimerPhase::Counting);
    }

    #[test]
    fn damage_refreshes_rather_than_adds() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        run_ticks(&mut timer, 5, 3);
        assert_eq!(timer.logout_ticks(), 11);

        timer.on_damage();
        assert_eq!(timer.logout_ticks(), COMBAT_TIMEOUT_TICKS);
    }

    #[test]
    fn damage_during_grace_cancels_grace() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        run_ticks(&mut timer, 16, 3);
        assert_eq!(timer.snapshot().phase(), TimerPhase::Grace);

        timer.on_damage();
        assert_eq!(timer.logout_ticks(), COMBAT_TIMEOUT_TICKS);
        assert_eq!(timer.grace_ticks(), 0);
    }

    #[test]
    fn full_countdown_then_grace_then_idle() {
        let mut timer = CombatTimer::new();
        timer.on_damage();

        for expected in (1..COMBAT_TIMEOUT_TICKS).rev() {
            assert_eq!(timer.on_tick(3), TickOutcome::Counting);
            assert_eq!(timer.logout_ticks(), expected);
            assert_eq!(timer.grace_ticks(), 0);
        }

        assert_eq!(timer.on_tick(3), TickOutcome::SafeToLogout);
        assert_eq!(timer.logout_ticks(), 0);
        assert_eq!(timer.grace_ticks(), 5);

        let outcomes = run_ticks(&mut timer, 5, 3);
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Grace,
                TickOutcome::Grace,
                TickOutcome::Grace,
                TickOutcome::Grace,
                TickOutcome::GraceEnded,
            ]
        );
        assert!(timer.snapshot().is_idle());

        assert!(run_ticks(&mut timer, 10, 3).iter().all(|o| *o == TickOutcome::Idle));
        assert!(timer.snapshot().is_idle());
    }

    #[test]
    fn zero_grace_period_goes_straight_to_idle() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        let outcomes = run_ticks(&mut timer, 16, 0);
        assert_eq!(outcomes.last(), Some(&TickOutcome::SafeToLogout));
        assert!(timer.snapshot().is_idle());
    }

    #[test]
    fn grace_length_is_read_at_expiry() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        run_ticks(&mut timer, 15, 3);
        timer.on_tick(6);
        assert_eq!(timer.grace_ticks(), 10);
    }

    #[test]
    fn reset_is_hard() {
        let mut timer = CombatTimer::new();
        timer.on_damage();
        run_ticks(&mut timer, 3, 3);
        timer.reset();
        assert_eq!(timer.snapshot(), DisplayState::default());
    }
}
