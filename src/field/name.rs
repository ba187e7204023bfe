//! `css-color-name` field.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::labeled;
use crate::color::ColorMatch;

/// CSS Color Level 4 named colors, alphabetical.
///
/// Where two names share a value (`aqua`/`cyan`, `gray`/`grey`, ...) the
/// first one listed is reported.
const CSS_COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Reverse lookup from 8-bit RGB to the first matching CSS name.
static NAMES_BY_RGB: LazyLock<HashMap<(u8, u8, u8), &'static str>> = LazyLock::new(|| {
    let mut names = HashMap::with_capacity(CSS_COLOR_NAMES.len());
    for &name in CSS_COLOR_NAMES {
        if let Some(rgb) = palette::named::from_str(name) {
            names.entry(rgb.into_components()).or_insert(name);
        }
    }
    names
});

/// Renders `**Name:** <css name>`.
///
/// Declines unless the color exactly matches a named color. Fully
/// transparent colors are reported as `transparent`; other translucent
/// colors never have a name.
pub fn css_color_name(color: &ColorMatch) -> Option<String> {
    lookup_name(color).map(|name| labeled("Name", name))
}

/// Returns the CSS name of a match, if it has one.
pub fn lookup_name(color: &ColorMatch) -> Option<&'static str> {
    let (r, g, b, a) = color.to_rgba8();
    match a {
        0 => Some("transparent"),
        u8::MAX => NAMES_BY_RGB.get(&(r, g, b)).copied(),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_have_names() {
        assert_eq!(lookup_name(&ColorMatch::rgb8(255, 0, 0)), Some("red"));
        assert_eq!(lookup_name(&ColorMatch::rgb8(255, 255, 255)), Some("white"));
        assert_eq!(lookup_name(&ColorMatch::rgb8(100, 149, 237)), Some("cornflowerblue"));
    }

    #[test]
    fn aliases_report_first_alphabetical_name() {
        assert_eq!(lookup_name(&ColorMatch::rgb8(0, 255, 255)), Some("aqua"));
        assert_eq!(lookup_name(&ColorMatch::rgb8(255, 0, 255)), Some("fuchsia"));
        assert_eq!(lookup_name(&ColorMatch::rgb8(128, 128, 128)), Some("gray"));
    }

    #[test]
    fn unnamed_colors_decline() {
        assert_eq!(css_color_name(&ColorMatch::rgb8(254, 0, 0)), None);
        assert_eq!(css_color_name(&ColorMatch::rgba8(255, 0, 0, 128)), None);
    }

    #[test]
    fn fully_transparent_is_named_transparent() {
        assert_eq!(
            css_color_name(&ColorMatch::rgba8(12, 34, 56, 0)).as_deref(),
            Some("**Name:** transparent")
        );
    }

    #[test]
    fn renders_labeled_line() {
        assert_eq!(
            css_color_name(&ColorMatch::rgb8(0, 0, 128)).as_deref(),
            Some("**Name:** navy")
        );
    }
}
