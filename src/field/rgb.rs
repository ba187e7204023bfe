//! RGB-family fields: `rgb`, `hsl`, `hsv` and `cmyk`.

use palette::{Hsl, Hsv, IntoColor};

use super::{format_number, format_percent, labeled};
use crate::color::ColorMatch;

/// Renders `**RGB:** rgb(r, g, b)` with 8-bit channels.
pub fn rgb(color: &ColorMatch) -> String {
    let (r, g, b, _) = color.to_rgba8();
    labeled("RGB", format!("rgb({r}, {g}, {b})"))
}

/// Renders `**HSL:** hsl(h, s%, l%)`.
pub fn hsl(color: &ColorMatch) -> String {
    let hsl: Hsl = color.srgb().into_color();
    labeled(
        "HSL",
        format!(
            "hsl({}, {}, {})",
            format_hue(hsl.hue.into_positive_degrees()),
            format_percent(hsl.saturation),
            format_percent(hsl.lightness),
        ),
    )
}

/// Renders `**HSV:** hsv(h, s%, v%)`.
pub fn hsv(color: &ColorMatch) -> String {
    let hsv: Hsv = color.srgb().into_color();
    labeled(
        "HSV",
        format!(
            "hsv({}, {}, {})",
            format_hue(hsv.hue.into_positive_degrees()),
            format_percent(hsv.saturation),
            format_percent(hsv.value),
        ),
    )
}

/// Renders `**CMYK:** cmyk(c%, m%, y%, k%)`.
pub fn cmyk(color: &ColorMatch) -> String {
    let (c, m, y, k) = to_cmyk(color);
    labeled(
        "CMYK",
        format!(
            "cmyk({}, {}, {}, {})",
            format_percent(c),
            format_percent(m),
            format_percent(y),
            format_percent(k),
        ),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Naive device CMYK from non-linear sRGB (no ICC profile).
pub fn to_cmyk(color: &ColorMatch) -> (f32, f32, f32, f32) {
    let (r, g, b) = color.srgb().into_components();
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, 1.0); // Pure black
    }

    let scale = 1.0 - k;
    (
        (1.0 - r - k) / scale,
        (1.0 - g - k) / scale,
        (1.0 - b - k) / scale,
        k,
    )
}

/// Formats a hue as whole degrees in `0..360`.
pub(crate) fn format_hue(degrees: f32) -> String {
    format_number(degrees.round().rem_euclid(360.0), 0)
}

// ============================================================================
// Tests
// ============================================================================
