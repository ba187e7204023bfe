//! Color match types.
//!
//! A [`ColorMatch`] is a single color occurrence found in source text. It is
//! produced by an extractor outside this crate and handed to the display
//! pipeline unchanged.

use palette::{Srgb, Srgba};

/// A byte range within the source text.
///
/// Used to record where a color literal was found so hosts can anchor the
/// rendered display (e.g. as a hover) at the right position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character of the match
    pub start: usize,
    /// Byte offset one past the last character of the match
    pub end: usize,
}

impl Span {
    /// Creates a new span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One recognized color occurrence.
///
/// The color is stored as non-linear sRGB with straight (non-premultiplied)
/// alpha, all channels in `0.0..=1.0`. Field renderers read it but never
/// modify it.
///
/// # Example
///
/// ```
/// use color_info::{ColorMatch, Span};
///
/// let red = ColorMatch::rgb8(255, 0, 0).with_span(Span::new(10, 17));
/// assert!(red.is_opaque());
/// assert_eq!(red.span.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch {
    /// The matched color.
    pub color: Srgba,

    /// Where the color was found in the source text.
    pub span: Span,
}

impl ColorMatch {
    /// Creates a new match from a color and its source span.
    pub fn new(color: Srgba, span: Span) -> Self {
        Self { color, span }
    }

    /// Creates an opaque match from 8-bit channels with an empty span.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Creates a match from 8-bit channels (alpha included) with an empty span.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let color = Srgba::<u8>::new(r, g, b, a).into_format::<f32, f32>();
        Self::new(color, Span::default())
    }

    /// Returns a copy of this match anchored at `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the color without its alpha channel.
    pub fn srgb(&self) -> Srgb {
        self.color.color
    }

    /// Returns the alpha channel (0.0-1.0).
    pub fn alpha(&self) -> f32 {
        self.color.alpha
    }

    /// Returns true if the color has no transparency.
    ///
    /// Uses the 8-bit alpha, so values that round to 255 count as opaque.
    pub fn is_opaque(&self) -> bool {
        self.to_rgba8().3 == u8::MAX
    }

    /// Returns true if every channel is a finite number.
    ///
    /// Matches that fail this check are malformed; built-in renderers
    /// reject them instead of printing `NaN`.
    pub fn is_finite(&self) -> bool {
        let (r, g, b, a) = self.color.into_components();
        [r, g, b, a].iter().all(|c| c.is_finite())
    }

    /// Returns the color quantized to 8-bit channels `(r, g, b, a)`.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let rgba: Srgba<u8> = self.color.into_format();
        rgba.into_components()
    }
}

// ============================================================================
// Tests
// ============================================================================
