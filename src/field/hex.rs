//! `hex` and `alpha` fields.

use super::{format_number, labeled};
use crate::color::ColorMatch;

/// Renders `**Hex:** #rrggbb`, or `#rrggbbaa` when the color is translucent.
pub fn hex(color: &ColorMatch) -> String {
    labeled("Hex", hex_code(color))
}

/// Renders `**Alpha:** a` with two decimals.
///
/// Declines for opaque colors, where the alpha line adds nothing.
pub fn alpha(color: &ColorMatch) -> Option<String> {
    if color.is_opaque() {
        return None;
    }
    Some(labeled("Alpha", format_number(color.alpha(), 2)))
}

/// Returns the lowercase CSS hex code of a match.
pub fn hex_code(color: &ColorMatch) -> String {
    let (r, g, b, a) = color.to_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

// ============================================================================
// Tests
// ============================================================================
