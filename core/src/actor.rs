//! Timer task for multi-threaded hosts
//!
//! A single tokio task owns the [`LogoutTimer`] and applies signals one at a
//! time in the order they were sent. Callers hold a cheap [`TimerHandle`]
//! (or clones of its [`SignalSender`]) and read the latest counters from a
//! `watch` channel without touching the timer itself.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::audio::AlertSink;
use crate::service::{LogoutTimer, TimerSnapshot};
use crate::signal_processor::{GameSignal, SignalHandler};
use crate::timers::{DisplayState, TimerError};

const COMMAND_BUFFER: usize = 256;

enum Command {
    Signal(GameSignal),
    Snapshot(oneshot::Sender<TimerSnapshot>),
    Shutdown,
}

/// Cloneable sender for feeding signals into a running timer task
#[derive(Clone)]
pub struct SignalSender {
    tx: mpsc::Sender<Command>,
}

impl SignalSender {
    pub async fn send(&self, signal: GameSignal) -> Result<(), TimerError> {
        self.tx
            .send(Command::Signal(signal))
            .await
            .map_err(|_| TimerError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Handle to a spawned timer task
pub struct TimerHandle {
    sender: SignalSender,
    state_rx: watch::Receiver<DisplayState>,
    task: JoinHandle<()>,
}

/// Start the timer on its own task. The timer is started up before the first
/// signal is processed.
pub fn spawn<S>(mut timer: LogoutTimer<S>) -> TimerHandle
where
    S: AlertSink + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);
    let (state_tx, state_rx) = watch::channel(timer.display_state());

    let task = tokio::spawn(async move {
        timer.start_up();
        state_tx.send_replace(timer.display_state());

        while let Some(command) = rx.recv().await {
            match command {
                Command::Signal(signal) => {
                    timer.handle_signal(&signal);
                    state_tx.send_if_modified(|state| {
                        let next = timer.display_state();
                        let changed = *state != next;
                        *state = next;
                        changed
                    });
                }
                Command::Snapshot(reply) => {
                    let _ = reply.send(timer.snapshot());
                }
                Command::Shutdown => break,
            }
        }

        timer.shut_down();
        state_tx.send_replace(timer.display_state());
        debug!("Timer task stopped");
    });

    TimerHandle {
        sender: SignalSender { tx },
        state_rx,
        task,
    }
}

impl TimerHandle {
    pub async fn send(&self, signal: GameSignal) -> Result<(), TimerError> {
        self.sender.send(signal).await
    }

    /// A sender that can be moved into other tasks
    pub fn sender(&self) -> SignalSender {
        self.sender.clone()
    }

    /// Latest published counters
    pub fn display_state(&self) -> DisplayState {
        *self.state_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state_rx.clone()
    }

    /// Full render snapshot, taken after every signal sent before this call.
    pub async fn snapshot(&self) -> Result<TimerSnapshot, TimerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .tx
            .send(Command::Snapshot(reply_tx))
            .await
            .map_err(|_| TimerError::Closed)?;
        reply_rx.await.map_err(|_| TimerError::Closed)
    }

    /// Stop the task, resetting the timer, and wait for it to finish.
    pub async fn shutdown(self) -> Result<(), TimerError> {
        // A closed channel means the task is already on its way out.
        let _ = self.sender.tx.send(Command::Shutdown).await;
        self.task.await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioEvent, NoAlerts};
    use crate::timers::COMBAT_TIMEOUT_TICKS;
    use combat_logout_types::TimerConfig;

    fn unrestricted() -> TimerConfig {
        TimerConfig {
            restrict_to_dangerous_context: false,
            ..TimerConfig::default()
        }
    }

    #[tokio::test]
    async fn signals_are_applied_in_order() {
        let handle = spawn(LogoutTimer::silent(unrestricted()));

        handle.send(GameSignal::local_hit()).await.unwrap();
        for _ in 0..4 {
            handle.send(GameSignal::Tick).await.unwrap();
        }

        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.active);
        assert_eq!(snapshot.state.logout_ticks, COMBAT_TIMEOUT_TICKS - 4);
        assert_eq!(handle.display_state(), snapshot.state);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn watchers_see_updates() {
        let handle = spawn(LogoutTimer::silent(unrestricted()));
        let mut rx = handle.subscribe();

        handle.send(GameSignal::local_hit()).await.unwrap();
        rx.wait_for(|state| state.logout_ticks == COMBAT_TIMEOUT_TICKS)
            .await
            .unwrap();

        handle.shutdown().await.unwrap();
        rx.wait_for(|state| state.is_idle()).await.unwrap();
    }

    #[tokio::test]
    async fn senders_report_closed_after_shutdown() {
        let handle = spawn(LogoutTimer::new(TimerConfig::default(), NoAlerts));
        let sender = handle.sender();
        handle.shutdown().await.unwrap();

        assert!(sender.is_closed());
        assert!(matches!(
            sender.send(GameSignal::Tick).await,
            Err(TimerError::Closed)
        ));
    }

    #[tokio::test]
    async fn alerts_reach_the_audio_channel() {
        let (audio_tx, mut audio_rx) = mpsc::unbounded_channel();
        let config = TimerConfig {
            sound_alert: true,
            ..unrestricted()
        };
        let handle = spawn(LogoutTimer::new(config, audio_tx));

        handle.send(GameSignal::local_hit()).await.unwrap();
        for _ in 0..COMBAT_TIMEOUT_TICKS {
            handle.send(GameSignal::Tick).await.unwrap();
        }

        assert_eq!(audio_rx.recv().await, Some(AudioEvent::SafeToLogout));
        handle.shutdown().await.unwrap();
    }
}
