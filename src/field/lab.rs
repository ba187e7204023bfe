//! CIE fields: `lab` and `lch` (D65 white point).

use palette::{IntoColor, Lab, Lch};

use super::rgb::format_hue;
use super::{format_number, labeled};
use crate::color::ColorMatch;

/// Renders `**Lab:** lab(l, a, b)` with two decimals.
pub fn lab(color: &ColorMatch) -> String {
    let lab: Lab = color.srgb().into_color();
    labeled(
        "Lab",
        format!(
            "lab({}, {}, {})",
            format_number(lab.l, 2),
            format_number(lab.a, 2),
            format_number(lab.b, 2),
        ),
    )
}

/// Renders `**LCH:** lch(l, c, h)`; hue in whole degrees.
pub fn lch(color: &ColorMatch) -> String {
    let lab: Lab = color.srgb().into_color();
    let lch: Lch = lab.into_color();

    // Achromatic colors have no meaningful hue
    let hue = if format_number(lch.chroma, 2) == "0" {
        "0".to_string()
    } else {
        format_hue(lch.hue.into_positive_degrees())
    };

    labeled(
        "LCH",
        format!(
            "lch({}, {}, {})",
            format_number(lch.l, 2),
            format_number(lch.chroma, 2),
            hue,
        ),
    )
}

// ============================================================================
// Tests
// ============================================================================
