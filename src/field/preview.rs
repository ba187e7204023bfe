//! Preview swatch fields.
//!
//! Swatches are small SVG documents embedded as base64 `data:` URIs inside a
//! Markdown image, so any Markdown host can show them without fetching
//! anything. Translucent colors are drawn over a checkerboard.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::format_number;
use crate::color::ColorMatch;

// ============================================================================
// PreviewSize
// ============================================================================

/// Pixel dimensions of a preview swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

impl PreviewSize {
    /// `preview`: a wide bar.
    pub const BAR: Self = Self::new(80, 20);
    /// `preview-xl`: a large wide bar.
    pub const BAR_XL: Self = Self::new(200, 50);
    /// `preview-square`: a small square.
    pub const SQUARE: Self = Self::new(20, 20);
    /// `preview-square-xl`: a large square.
    pub const SQUARE_XL: Self = Self::new(50, 50);

    /// Creates a swatch size of `width` x `height` pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Side length of one checkerboard cell in pixels.
const CHECKER_CELL: u32 = 5;

// ============================================================================
// Rendering
// ============================================================================

/// Renders a swatch as a Markdown image line.
pub fn render(color: &ColorMatch, size: PreviewSize) -> String {
    format!("![]({})", svg_data_uri(&swatch_svg(color, size)))
}

/// Builds the SVG markup for a swatch of `size` filled with the match color.
pub fn swatch_svg(color: &ColorMatch, size: PreviewSize) -> String {
    let (r, g, b, _) = color.to_rgba8();
    let PreviewSize { width, height } = size;
    let fill = format!("#{r:02x}{g:02x}{b:02x}");

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    if color.is_opaque() {
        svg.push_str(&format!(
            r#"<rect width="{width}" height="{height}" fill="{fill}"/>"#
        ));
    } else {
        let cell = CHECKER_CELL;
        let tile = cell * 2;
        svg.push_str(&format!(
            concat!(
                r#"<defs><pattern id="checker" width="{tile}" height="{tile}" patternUnits="userSpaceOnUse">"#,
                r##"<rect width="{tile}" height="{tile}" fill="#ffffff"/>"##,
                r##"<rect width="{cell}" height="{cell}" fill="#cccccc"/>"##,
                r##"<rect x="{cell}" y="{cell}" width="{cell}" height="{cell}" fill="#cccccc"/>"##,
                r#"</pattern></defs>"#,
                r#"<rect width="{width}" height="{height}" fill="url(#checker)"/>"#,
            ),
            tile = tile,
            cell = cell,
            width = width,
            height = height,
        ));
        svg.push_str(&format!(
            r#"<rect width="{width}" height="{height}" fill="{fill}" fill-opacity="{}"/>"#,
            format_number(color.alpha(), 2),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Encodes SVG markup as a base64 `data:` URI.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_markdown_image(line: &str) -> String {
        let uri = line
            .strip_prefix("![](")
            .and_then(|rest| rest.strip_suffix(')'))
            .expect("markdown image");
        let payload = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data uri");
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn opaque_swatch_is_a_single_rect() {
        let svg = swatch_svg(&ColorMatch::rgb8(255, 0, 0), PreviewSize::SQUARE);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="20" height="20""#));
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(!svg.contains("checker"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn nearly_opaque_swatch_has_no_checkerboard() {
        use crate::color::Span;
        use palette::Srgba;

        let m = ColorMatch::new(Srgba::new(1.0, 0.0, 0.0, 0.999), Span::default());
        let svg = swatch_svg(&m, PreviewSize::SQUARE);
        assert!(!svg.contains("checker"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn translucent_swatch_has_checkerboard() {
        let svg = swatch_svg(&ColorMatch::rgba8(0, 0, 255, 128), PreviewSize::BAR);
        assert!(svg.contains(r#"<pattern id="checker" width="10" height="10""#));
        assert!(svg.contains(r#"fill="url(#checker)""#));
        assert!(svg.contains(r##"fill="#0000ff" fill-opacity="0.5""##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn render_embeds_svg_as_markdown_image() {
        let color = ColorMatch::rgb8(0, 128, 0);
        let line = render(&color, PreviewSize::BAR_XL);
        assert!(line.starts_with("![](data:image/svg+xml;base64,"));

        let svg = decode_markdown_image(&line);
        assert_eq!(svg, swatch_svg(&color, PreviewSize::BAR_XL));
        assert!(svg.contains(r#"width="200" height="50""#));
    }

    #[test]
    fn sizes_differ_per_variant() {
        let sizes = [
            PreviewSize::BAR,
            PreviewSize::BAR_XL,
            PreviewSize::SQUARE,
            PreviewSize::SQUARE_XL,
        ];
        for (i, a) in sizes.iter().enumerate() {
            for b in &sizes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(PreviewSize::SQUARE.width, PreviewSize::SQUARE.height);
        assert_eq!(PreviewSize::SQUARE_XL.width, PreviewSize::SQUARE_XL.height);
    }
}
