//! Countdown text formatting
//!
//! One game tick is 0.6 s, so every tick count has an exact one-decimal
//! representation in seconds. Seconds are built from tenths to avoid float
//! noise like `1.7999999999999998`.

use combat_logout_types::TimeFormat;

use crate::timers::{MILLIS_PER_TICK, grace_ticks_to_secs};

/// Milliseconds covered by `ticks` game ticks.
pub fn ticks_to_millis(ticks: u32) -> u64 {
    u64::from(ticks) * u64::from(MILLIS_PER_TICK)
}

/// Seconds covered by `ticks`, with a trailing `.0` dropped.
pub fn ticks_to_seconds(ticks: u32) -> String {
    let tenths = ticks_to_millis(ticks) / 100;
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    }
}

/// Format remaining countdown for the panel line.
pub fn format_time(ticks: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::Ticks => format!("{} ticks", ticks),
        TimeFormat::Seconds => format!("{}s", ticks_to_seconds(ticks)),
        TimeFormat::Milliseconds => format!("{}ms", ticks_to_millis(ticks)),
        TimeFormat::Plain => ticks.to_string(),
    }
}

/// Short form drawn above the head bar.
pub fn format_time_compact(ticks: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::Ticks => format!("{} t", ticks),
        TimeFormat::Seconds => format!("{} s", ticks_to_seconds(ticks)),
        TimeFormat::Milliseconds => format!("{} ms", ticks_to_millis(ticks)),
        TimeFormat::Plain => ticks.to_string(),
    }
}

/// Label shown while the grace window runs, e.g. `OK (3)`.
pub fn format_grace(grace_ticks: u32) -> String {
    if grace_ticks == 0 {
        "OK".to_string()
    } else {
        format!("OK ({})", grace_ticks_to_secs(grace_ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_drop_trailing_zero() {
        assert_eq!(format_time(16, TimeFormat::Seconds), "9.6s");
        assert_eq!(format_time(5, TimeFormat::Seconds), "3s");
        assert_eq!(format_time(3, TimeFormat::Seconds), "1.8s");
        assert_eq!(format_time(0, TimeFormat::Seconds), "0s");
    }

    #[test]
    fn ticks_and_millis() {
        let ticks = format_time(16, TimeFormat::Ticks);
        assert!(ticks.contains("16"));
        assert!(ticks.ends_with("ticks"));

        assert_eq!(format_time(16, TimeFormat::Milliseconds), "9600ms");
        assert_eq!(format_time(16, TimeFormat::Plain), "16");
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_time_compact(16, TimeFormat::Ticks), "16 t");
        assert_eq!(format_time_compact(16, TimeFormat::Seconds), "9.6 s");
        assert_eq!(format_time_compact(1, TimeFormat::Milliseconds), "600 ms");
        assert_eq!(format_time_compact(7, TimeFormat::Plain), "7");
    }

    #[test]
    fn grace_label() {
        assert_eq!(format_grace(5), "OK (3)");
        assert_eq!(format_grace(1), "OK (0)");
        assert_eq!(format_grace(0), "OK");
    }
}
