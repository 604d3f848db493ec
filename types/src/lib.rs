//! Shared configuration types for the combat logout timer
//!
//! This crate contains the serializable settings shared between the timer core
//! and any frontend that edits them (CLI, host plugin UI).

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color as stored in configuration files.
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Time Format
// ─────────────────────────────────────────────────────────────────────────────

/// How the remaining countdown is rendered.
///
/// Stored as a lowercase string. Unrecognised names load as [`TimeFormat::Plain`]
/// so a hand-edited config degrades to the bare tick count instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFormat {
    /// Game ticks, e.g. `16 ticks`
    Ticks,
    /// Seconds with at most one decimal, e.g. `9.6s`
    #[default]
    Seconds,
    /// Whole milliseconds, e.g. `9600ms`
    Milliseconds,
    /// Bare tick count with no unit
    Plain,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 4] = [
        TimeFormat::Ticks,
        TimeFormat::Seconds,
        TimeFormat::Milliseconds,
        TimeFormat::Plain,
    ];

    /// Config key for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticks => "ticks",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Plain => "plain",
        }
    }

    /// Parse a config key, case-insensitively. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
    }

    /// Human-readable label for settings UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ticks => "Game ticks",
            Self::Seconds => "Seconds",
            Self::Milliseconds => "Milliseconds",
            Self::Plain => "Plain",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for TimeFormat {
    fn from(name: String) -> Self {
        Self::parse(&name).unwrap_or(Self::Plain)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> Self {
        format.as_str().to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Default colors for the timer displays
pub mod timer_colors {
    use super::Color;

    pub const DANGER: Color = [255, 0, 0, 255];
    pub const SAFE: Color = [0, 255, 0, 255];
    pub const BLACK: Color = [0, 0, 0, 255];
    /// Translucent backdrop behind the head bar fill
    pub const BAR_BACKGROUND: Color = [0, 0, 0, 150];
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_grace_period_secs() -> u32 {
    3
}
fn default_danger_color() -> Color {
    timer_colors::DANGER
}
fn default_safe_color() -> Color {
    timer_colors::SAFE
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Config
// ─────────────────────────────────────────────────────────────────────────────

/// User settings for the combat logout timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Only run the timer in dangerous contexts (PvP worlds, wilderness-type areas)
    #[serde(default = "default_true", alias = "pvp_only")]
    pub restrict_to_dangerous_context: bool,

    /// Show the "Logout:" panel line
    #[serde(default = "default_true")]
    pub show_overlay: bool,

    /// Show the progress bar above the player
    #[serde(default = "default_true")]
    pub show_head_bar: bool,

    /// Seconds to keep showing "OK" after the countdown expires
    #[serde(default = "default_grace_period_secs", alias = "grace_period")]
    pub grace_period_secs: u32,

    #[serde(default)]
    pub time_format: TimeFormat,

    /// Play a sound when it becomes safe to log out
    #[serde(default)]
    pub sound_alert: bool,

    /// Color the timer starts with
    #[serde(default = "default_danger_color")]
    pub danger_color: Color,

    /// Color shown once it is safe to log out
    #[serde(default = "default_safe_color")]
    pub safe_color: Color,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            restrict_to_dangerous_context: true,
            show_overlay: true,
            show_head_bar: true,
            grace_period_secs: default_grace_period_secs(),
            time_format: TimeFormat::default(),
            sound_alert: false,
            danger_color: timer_colors::DANGER,
            safe_color: timer_colors::SAFE,
        }
    }
}
