use super::signal::GameSignal;

/// Trait for systems that react to host signals.
pub trait SignalHandler {
    /// Handle a single signal. Signals must be delivered in the order the
    /// host observed them.
    fn handle_signal(&mut self, signal: &GameSignal);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[GameSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
