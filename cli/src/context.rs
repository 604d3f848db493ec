use combat_logout_core::actor::{self, TimerHandle};
use combat_logout_core::{AudioEvent, LogoutTimer, TimerConfig, TimerError};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

/// Background tasks owned by the CLI
#[derive(Default)]
pub struct BackgroundTasks {
    pub clock: Option<JoinHandle<()>>,
    pub audio: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn stop_clock(&mut self) -> bool {
        match self.clock.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

/// Holds all shared state for the CLI application.
pub struct CliContext {
    pub timer: TimerHandle,
    pub tasks: Mutex<BackgroundTasks>,
}

impl CliContext {
    /// Spawn the timer task and an audio task that announces alerts.
    pub fn new(config: TimerConfig) -> Self {
        let (audio_tx, mut audio_rx) = mpsc::channel::<AudioEvent>(16);

        let audio = tokio::spawn(async move {
            while let Some(event) = audio_rx.recv().await {
                match event {
                    AudioEvent::SafeToLogout => {
                        info!("Safe to logout");
                        println!("\x07*ding* safe to logout");
                    }
                }
            }
        });

        let timer = actor::spawn(LogoutTimer::new(config, audio_tx));

        Self {
            timer,
            tasks: Mutex::new(BackgroundTasks {
                clock: None,
                audio: Some(audio),
            }),
        }
    }

    /// Stop background tasks and the timer.
    pub async fn shutdown(self) -> Result<(), TimerError> {
        let mut tasks = self.tasks.into_inner();
        tasks.stop_clock();
        self.timer.shutdown().await?;
        // The audio channel closes with the timer
        if let Some(audio) = tasks.audio.take() {
            audio.await?;
        }
        Ok(())
    }
}
