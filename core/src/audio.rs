//! Alert output for the "safe to logout" moment
//!
//! The core never plays audio itself. It pushes an [`AudioEvent`] into an
//! [`AlertSink`] and moves on; playback belongs to whoever drains the sink.

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Events that can trigger audio playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// The logout countdown just reached zero
    SafeToLogout,
}

/// Fire-and-forget receiver of alert events.
pub trait AlertSink {
    fn alert(&mut self, event: AudioEvent);
}

/// Sink that drops every alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAlerts;

impl AlertSink for NoAlerts {
    fn alert(&mut self, _event: AudioEvent) {}
}

impl AlertSink for mpsc::Sender<AudioEvent> {
    fn alert(&mut self, event: AudioEvent) {
        match self.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!(?event, "Audio queue full, dropping alert");
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                debug!(?event, "Audio receiver gone, dropping alert");
            }
        }
    }
}

impl AlertSink for mpsc::UnboundedSender<AudioEvent> {
    fn alert(&mut self, event: AudioEvent) {
        if self.send(event).is_err() {
            debug!(?event, "Audio receiver gone, dropping alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_sink_drops_when_full() {
        let (mut tx, mut rx) = mpsc::channel(1);
        tx.alert(AudioEvent::SafeToLogout);
        tx.alert(AudioEvent::SafeToLogout);

        assert_eq!(rx.try_recv().ok(), Some(AudioEvent::SafeToLogout));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_sink_is_ignored() {
        let (mut tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        tx.alert(AudioEvent::SafeToLogout);
    }
}
