mod config;
mod error;

pub use config::{
    APP_NAME, CONFIG_NAME, Color, MAX_GRACE_PERIOD_SECS, TimeFormat, TimerConfig, TimerConfigExt,
    timer_colors,
};
pub use error::ConfigError;
