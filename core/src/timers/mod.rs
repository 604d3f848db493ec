//! Combat logout timer
//!
//! This module provides:
//! - **State**: Snapshot types and tick constants
//! - **Machine**: The countdown/grace state machine
//! - **Gate**: Decides whether the machine should be listening at all
//!
//! # Lifecycle
//!
//! 1. Local player takes damage → countdown restarts at 16 ticks
//! 2. Each game tick decrements the countdown
//! 3. Countdown reaches zero → safe to log out, grace window starts
//! 4. Grace window elapses → idle

mod error;
mod gate;
mod machine;
mod state;

pub use error::TimerError;
pub use gate::{ActivationGate, ContextState, GateTransition};
pub use machine::{CombatTimer, TickOutcome};
pub use state::{
    COMBAT_TIMEOUT_TICKS, DisplayState, MILLIS_PER_TICK, TimerPhase, grace_period_ticks,
    grace_ticks_to_secs,
};
