//! Countdown color gradient
//!
//! Progress is mapped onto five HSB stops, red through bright green, so the
//! text and bar turn green as logging out gets closer.

use combat_logout_types::Color;

/// Hue/saturation/brightness color. Hue is in turns (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self { hue, saturation, brightness }
    }

    /// Convert to opaque RGBA.
    pub fn to_rgba(self) -> Color {
        let channel = |v: f32| (v * 255.0 + 0.5) as u8;
        let Hsb { hue, saturation, brightness } = self;

        if saturation == 0.0 {
            let v = channel(brightness);
            return [v, v, v, 255];
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        [channel(r), channel(g), channel(b), 255]
    }
}

/// Gradient stops, evenly spaced over [0, 1].
pub const COLOR_STOPS: [Hsb; 5] = [
    Hsb::new(0.0, 0.9, 0.9),           // Red
    Hsb::new(30.0 / 360.0, 0.9, 0.9),  // Orange
    Hsb::new(60.0 / 360.0, 0.9, 0.9),  // Yellow
    Hsb::new(90.0 / 360.0, 0.9, 0.9),  // Yellow-green
    Hsb::new(120.0 / 360.0, 0.9, 1.0), // Bright green
];

/// Color for a countdown progress value (0.0 = just hit, 1.0 = expired).
///
/// Out-of-range and NaN input is clamped.
pub fn color_for_progress(progress: f32) -> Hsb {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

    let last = COLOR_STOPS.len() - 1;
    let scaled = progress * last as f32;
    let index = scaled as usize;
    let remainder = scaled - index as f32;

    if index >= last {
        return COLOR_STOPS[last];
    }

    let start = COLOR_STOPS[index];
    let end = COLOR_STOPS[index + 1];

    Hsb {
        hue: interpolate_hue(start.hue, end.hue, remainder),
        saturation: start.saturation + (end.saturation - start.saturation) * remainder,
        brightness: start.brightness + (end.brightness - start.brightness) * remainder,
    }
}

/// RGBA shortcut for [`color_for_progress`].
pub fn rgba_for_progress(progress: f32) -> Color {
    color_for_progress(progress).to_rgba()
}

/// Interpolate around the hue circle along the shorter arc.
fn interpolate_hue(h1: f32, h2: f32, t: f32) -> f32 {
    let diff = h2 - h1;
    let h2 = if diff > 0.5 {
        h2 - 1.0
    } else if diff < -0.5 {
        h2 + 1.0
    } else {
        h2
    };

    let h = h1 + (h2 - h1) * t;
    if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    }
}
