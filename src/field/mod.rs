//! Field renderers for color displays.
//!
//! A field is a named unit of formatting logic: given a [`ColorMatch`], it
//! produces one line of display text, or declines when it has nothing to
//! say about that color.
//!
//! # Architecture
//!
//! Every renderer implements [`FieldRenderer`], which defines:
//! - The stable name used as a configuration token and registry key
//! - How the renderer formats a match (or declines)
//!
//! The built-in renderers form the closed [`Field`] enum. Hosts with
//! additional renderers implement [`FieldRenderer`] themselves and register
//! them in a [`FieldRegistry`](registry::FieldRegistry).

pub mod hex;
pub mod lab;
pub mod name;
pub mod preview;
pub mod registry;
pub mod rgb;

pub use preview::PreviewSize;
pub use registry::{DEFAULT_FIELDS, FieldRegistry};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorMatch;

// ============================================================================
// Normalization
// ============================================================================

/// Canonicalizes a field name for lookup and comparison.
///
/// This is the only normalization used for registry keys, default entries,
/// configured names, and exclusions. It is idempotent.
///
/// ```
/// use color_info::normalize_field_name;
///
/// assert_eq!(normalize_field_name("Preview-XL"), "preview-xl");
/// ```
pub fn normalize_field_name(name: &str) -> String {
    name.to_lowercase()
}

// ============================================================================
// Errors
// ============================================================================

/// Errors a field renderer can report instead of a line of output.
///
/// The display pipeline logs these and skips the failing field; they never
/// abort a whole display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The match contains NaN or infinite channels.
    #[error("field `{field}` cannot render a color with non-finite channels")]
    NonFinite { field: String },

    /// Any other renderer-specific failure.
    #[error("field `{field}` failed: {message}")]
    Other { field: String, message: String },
}

/// Error returned when parsing an unknown field name into a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color field `{0}`")]
pub struct FieldParseError(pub String);

// ============================================================================
// FieldRenderer Trait
// ============================================================================

/// A named renderer that turns a color match into a line of text.
///
/// `Ok(None)` and `Ok(Some(String::new()))` both mean "not applicable to
/// this match" and are dropped by the pipeline. Implementations must be
/// `Send + Sync` so registries can be shared process-wide.
///
/// # Example
///
/// ```
/// use color_info::{ColorMatch, FieldError, FieldRenderer};
///
/// struct Luma;
///
/// impl FieldRenderer for Luma {
///     fn name(&self) -> &str {
///         "luma"
///     }
///
///     fn render(&self, color: &ColorMatch) -> Result<Option<String>, FieldError> {
///         let (r, g, b, _) = color.to_rgba8();
///         let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
///         Ok(Some(format!("luma: {}", luma.round())))
///     }
/// }
///
/// assert_eq!(Luma.render(&ColorMatch::rgb8(255, 255, 255)).unwrap().unwrap(), "luma: 255");
/// ```
pub trait FieldRenderer: Send + Sync {
    /// The stable name of this field, matched case-insensitively.
    fn name(&self) -> &str;

    /// Renders the match, or returns `Ok(None)` to decline.
    fn render(&self, color: &ColorMatch) -> Result<Option<String>, FieldError>;
}

// ============================================================================
// Built-in Fields
// ============================================================================

/// The built-in color fields.
///
/// Names serialize in kebab-case (`preview-square-xl`, `css-color-name`)
/// and parse case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Field {
    Preview,
    PreviewXl,
    PreviewSquare,
    PreviewSquareXl,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Lab,
    Lch,
    Alpha,
    Hex,
    CssColorName,
}

impl Field {
    /// Every built-in field, in registration order.
    pub const ALL: [Field; 13] = [
        Field::Preview,
        Field::PreviewXl,
        Field::PreviewSquare,
        Field::PreviewSquareXl,
        Field::Rgb,
        Field::Hsl,
        Field::Hsv,
        Field::Cmyk,
        Field::Lab,
        Field::Lch,
        Field::Alpha,
        Field::Hex,
        Field::CssColorName,
    ];

    /// Returns the canonical (normalized) name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::PreviewXl => "preview-xl",
            Self::PreviewSquare => "preview-square",
            Self::PreviewSquareXl => "preview-square-xl",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Alpha => "alpha",
            Self::Hex => "hex",
            Self::CssColorName => "css-color-name",
        }
    }

    /// Returns the swatch size for preview fields.
    pub fn preview_size(&self) -> Option<PreviewSize> {
        match self {
            Self::Preview => Some(PreviewSize::BAR),
            Self::PreviewXl => Some(PreviewSize::BAR_XL),
            Self::PreviewSquare => Some(PreviewSize::SQUARE),
            Self::PreviewSquareXl => Some(PreviewSize::SQUARE_XL),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_field_name(s);
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

impl FieldRenderer for Field {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn render(&self, color: &ColorMatch) -> Result<Option<String>, FieldError> {
        if !color.is_finite() {
            return Err(FieldError::NonFinite {
                field: self.as_str().to_string(),
            });
        }

        if let Some(size) = self.preview_size() {
            return Ok(Some(preview::render(color, size)));
        }

        let line = match self {
            Self::Rgb => Some(rgb::rgb(color)),
            Self::Hsl => Some(rgb::hsl(color)),
            Self::Hsv => Some(rgb::hsv(color)),
            Self::Cmyk => Some(rgb::cmyk(color)),
            Self::Lab => Some(lab::lab(color)),
            Self::Lch => Some(lab::lch(color)),
            Self::Hex => Some(hex::hex(color)),
            Self::Alpha => hex::alpha(color),
            Self::CssColorName => name::css_color_name(color),
            Self::Preview | Self::PreviewXl | Self::PreviewSquare | Self::PreviewSquareXl => None,
        };
        Ok(line)
    }
}

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Formats one display line as `**label:** value`.
pub(crate) fn labeled(label: &str, value: impl fmt::Display) -> String {
    format!("**{label}:** {value}")
}

/// Rounds to `places` decimals and drops trailing zeros.
///
/// Negative zero (including values that round to it) prints as `0`.
pub(crate) fn format_number(value: f32, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a `0.0..=1.0` ratio as a whole percentage (`50%`).
pub(crate) fn format_percent(ratio: f32) -> String {
    format!("{}%", format_number(ratio * 100.0, 0))
}

// ============================================================================
// Tests
// ============================================================================
