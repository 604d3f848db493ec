//! Display models handed to the host overlay layer
//!
//! The host draws two things:
//! - a panel line: `Logout:  9.6s`
//! - a small bar above the player that shrinks as the countdown runs out
//!
//! Both are plain data; pixel work stays with the host.

use combat_logout_types::{Color, TimerConfig, timer_colors};

use crate::color::rgba_for_progress;
use crate::format::{format_grace, format_time, format_time_compact};
use crate::timers::{DisplayState, TimerPhase};

pub const PANEL_LABEL: &str = "Logout:";

/// Head bar dimensions in pixels
pub const HEAD_BAR_WIDTH: u32 = 50;
pub const HEAD_BAR_HEIGHT: u32 = 4;

/// One label/value row in the overlay panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLine {
    pub label: &'static str,
    pub text: String,
    pub text_color: Color,
}

impl PanelLine {
    /// Build the panel row, or `None` when the panel should not be drawn.
    ///
    /// With a zero grace period the panel stays up showing "OK" while idle.
    pub fn build(state: DisplayState, config: &TimerConfig) -> Option<Self> {
        if !config.show_overlay {
            return None;
        }

        let (text, text_color) = match state.phase() {
            TimerPhase::Counting => (
                format_time(state.logout_ticks, config.time_format),
                rgba_for_progress(state.progress()),
            ),
            TimerPhase::Grace => (format_grace(state.grace_ticks), config.safe_color),
            TimerPhase::Idle if config.grace_period_secs > 0 => return None,
            TimerPhase::Idle => (format_grace(0), config.safe_color),
        };

        Some(Self {
            label: PANEL_LABEL,
            text,
            text_color,
        })
    }
}

/// Countdown bar drawn above the local player
#[derive(Debug, Clone, PartialEq)]
pub struct HeadBar {
    pub width: u32,
    pub height: u32,
    /// Filled width in pixels, shrinking toward zero
    pub fill_width: u32,
    /// Elapsed fraction used for the color
    pub progress: f32,
    pub fill_color: Color,
    pub bg_color: Color,
    /// Text centered above the bar
    pub text: String,
    pub text_color: Color,
    pub shadow_color: Color,
}

impl HeadBar {
    /// Build the bar, or `None` unless actively counting down.
    pub fn build(state: DisplayState, config: &TimerConfig) -> Option<Self> {
        if !config.show_head_bar || state.phase() != TimerPhase::Counting {
            return None;
        }

        let progress = state.progress();
        let color = rgba_for_progress(progress);

        Some(Self {
            width: HEAD_BAR_WIDTH,
            height: HEAD_BAR_HEIGHT,
            fill_width: (HEAD_BAR_WIDTH as f32 * (1.0 - progress)) as u32,
            progress,
            fill_color: color,
            bg_color: timer_colors::BAR_BACKGROUND,
            text: format_time_compact(state.logout_ticks, config.time_format),
            text_color: color,
            shadow_color: timer_colors::BLACK,
        })
    }
}
