pub mod actor;
pub mod audio;
pub mod color;
pub mod context;
pub mod display;
pub mod format;
pub mod service;
pub mod signal_processor;
pub mod timers;


// Re-exports for convenience
pub use actor::{SignalSender, TimerHandle};
pub use audio::{AlertSink, AudioEvent, NoAlerts};
pub use color::{COLOR_STOPS, Hsb, color_for_progress, rgba_for_progress};
pub use context::{ConfigError, TimeFormat, TimerConfig, TimerConfigExt};
pub use display::{HeadBar, PanelLine};
pub use format::{format_grace, format_time, format_time_compact};
pub use service::{LogoutTimer, TimerSnapshot};
pub use signal_processor::{GameSignal, SignalHandler};
pub use timers::{
    ActivationGate, COMBAT_TIMEOUT_TICKS, CombatTimer, ContextState, DisplayState, TimerError,
    TimerPhase,
};
