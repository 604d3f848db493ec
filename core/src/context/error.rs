//! Error types for context operations

use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("grace period of {secs}s exceeds the maximum of {max}s")]
    GracePeriodTooLong { secs: u32, max: u32 },
}
