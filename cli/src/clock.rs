//! Real-time game tick source
//!
//! Emulates the host's 0.6 s game tick so the CLI can be watched counting down.

use std::time::Duration;

use combat_logout_core::timers::MILLIS_PER_TICK;
use combat_logout_core::{GameSignal, SignalSender};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

/// Spawn a task sending one `Tick` every game tick until the timer goes away.
pub fn start(sender: SignalSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(u64::from(MILLIS_PER_TICK)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick of an interval completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if sender.send(GameSignal::Tick).await.is_err() {
                debug!("Timer closed, stopping clock");
                break;
            }
        }
    })
}
