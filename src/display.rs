//! Color display pipeline.

use std::sync::Arc;

use crate::color::ColorMatch;
use crate::config::{ConfigSource, DisplayConfiguration};
use crate::field::{FieldRegistry, FieldRenderer};

/// Separator placed between rendered fields (one blank line).
pub const FIELD_SEPARATOR: &str = "\n\n";

// ============================================================================
// ColorDisplay
// ============================================================================

/// Renders color matches into multi-line display text.
///
/// `ColorDisplay` holds a configuration source and a [`FieldRegistry`]. On
/// every call it reads a fresh configuration snapshot and runs the
/// pipeline:
///
/// 1. **Select** - the configured `fields`, or the registry defaults
/// 2. **Filter** - drop names listed in `excludedFields`
/// 3. **Resolve** - look each name up in the registry; unknown names are skipped
/// 4. **Render** - run each renderer on the match, in field order
/// 5. **Join** - keep non-empty lines and join them with a blank line
///
/// Nothing in the pipeline fails: unknown fields, declining renderers and
/// failing renderers all just produce less output.
///
/// # Example
///
/// ```
/// use color_info::{ColorDisplay, ColorMatch, DisplayConfiguration};
///
/// let config = DisplayConfiguration::new().with_fields(["hex", "alpha", "rgb"]);
/// let display = ColorDisplay::new(config);
///
/// // Alpha declines for opaque colors
/// let text = display.display(&ColorMatch::rgb8(255, 0, 0)).unwrap();
/// assert_eq!(text, "**Hex:** #ff0000\n\n**RGB:** rgb(255, 0, 0)");
///
/// // Nothing to show
/// let display = ColorDisplay::new(DisplayConfiguration::new().with_fields(["notreal"]));
/// assert_eq!(display.display(&ColorMatch::rgb8(255, 0, 0)), None);
/// ```
pub struct ColorDisplay<C = DisplayConfiguration> {
    /// Where settings are read from on each call.
    config: C,

    /// Renderers addressable by normalized name, plus the default list.
    registry: Arc<FieldRegistry>,
}

impl<C: ConfigSource> ColorDisplay<C> {
    /// Creates a display over the built-in fields.
    pub fn new(config: C) -> Self {
        Self::with_registry(config, FieldRegistry::builtin())
    }

    /// Creates a display over a custom registry.
    pub fn with_registry(config: C, registry: Arc<FieldRegistry>) -> Self {
        Self { config, registry }
    }

    /// Returns the configuration source.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Returns the field registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Renders a match, or returns `None` when no field produced output.
    pub fn display(&self, color: &ColorMatch) -> Option<String> {
        let display = self.render_fields(color);
        if display.is_empty() {
            log::trace!("No color fields rendered for match at {:?}", color.span);
            return None;
        }
        Some(display)
    }

    /// Returns the normalized field names that survive selection and
    /// exclusion, in display order. Names may still be unknown.
    pub fn field_names(&self) -> Vec<String> {
        self.config
            .snapshot()
            .active_fields(self.registry.default_fields())
    }

    /// Resolves the active field names to renderers, skipping unknown names.
    pub fn renderers(&self) -> Vec<Arc<dyn FieldRenderer>> {
        self.resolve(&self.field_names())
    }

    fn resolve(&self, names: &[String]) -> Vec<Arc<dyn FieldRenderer>> {
        names
            .iter()
            .filter_map(|name| {
                let renderer = self.registry.lookup(name);
                if renderer.is_none() {
                    log::debug!("Ignoring unknown color field `{name}`");
                }
                renderer.cloned()
            })
            .collect()
    }

    fn render_fields(&self, color: &ColorMatch) -> String {
        let lines: Vec<String> = self
            .renderers()
            .iter()
            .filter_map(|renderer| match renderer.render(color) {
                Ok(line) => line.filter(|line| !line.is_empty()),
                Err(e) => {
                    log::warn!("Skipping color field `{}`: {e}", renderer.name());
                    None
                }
            })
            .collect();

        lines.join(FIELD_SEPARATOR)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldError;
    use palette::Srgba;
    use parking_lot::RwLock;

    /// Test renderer with a scripted outcome.
    enum Scripted {
        Line(&'static str, &'static str),
        Decline(&'static str),
        Empty(&'static str),
        Fail(&'static str),
    }

    impl FieldRenderer for Scripted {
        fn name(&self) -> &str {
            match self {
                Self::Line(name, _) | Self::Decline(name) | Self::Empty(name) | Self::Fail(name) => {
                    *name
                }
            }
        }

        fn render(&self, _color: &ColorMatch) -> Result<Option<String>, FieldError> {
            match self {
                Self::Line(_, line) => Ok(Some(line.to_string())),
                Self::Decline(_) => Ok(None),
                Self::Empty(_) => Ok(Some(String::new())),
                Self::Fail(name) => Err(FieldError::Other {
                    field: name.to_string(),
                    message: "boom".into(),
                }),
            }
        }
    }

    fn scripted_registry() -> Arc<FieldRegistry> {
        let renderers: Vec<Arc<dyn FieldRenderer>> = vec![
            Arc::new(Scripted::Line("a", "A")),
            Arc::new(Scripted::Line("b", "B")),
            Arc::new(Scripted::Decline("none")),
            Arc::new(Scripted::Empty("empty")),
            Arc::new(Scripted::Fail("fail")),
        ];
        Arc::new(FieldRegistry::new(renderers).with_defaults(["b", "a"]))
    }

    fn scripted(fields: &[&str]) -> ColorDisplay {
        let config = DisplayConfiguration::new().with_fields(fields.iter().copied());
        ColorDisplay::with_registry(config, scripted_registry())
    }

    fn black() -> ColorMatch {
        ColorMatch::rgb8(0, 0, 0)
    }

    #[test]
    fn joins_with_single_blank_line() {
        let display = scripted(&["a", "b"]);
        assert_eq!(display.display(&black()).as_deref(), Some("A\n\nB"));
    }

    #[test]
    fn declined_and_empty_outputs_are_dropped() {
        let display = scripted(&["a", "none", "empty", "b"]);
        assert_eq!(display.display(&black()).as_deref(), Some("A\n\nB"));
    }

    #[test]
    fn failing_renderer_does_not_suppress_others() {
        let display = scripted(&["fail", "a", "fail", "b"]);
        assert_eq!(display.display(&black()).as_deref(), Some("A\n\nB"));
    }

    #[test]
    fn all_empty_returns_none() {
        let display = scripted(&["none", "empty", "fail"]);
        assert_eq!(display.display(&black()), None);
    }

    #[test]
    fn unknown_fields_return_none() {
        let display = scripted(&["notreal"]);
        assert!(display.renderers().is_empty());
        assert_eq!(display.display(&black()), None);
    }

    #[test]
    fn empty_field_list_returns_none() {
        let display = scripted(&[]);
        assert!(display.field_names().is_empty());
        assert_eq!(display.display(&black()), None);
    }

    #[test]
    fn output_follows_field_order_not_registration_order() {
        let display = scripted(&["B", "a"]);
        assert_eq!(display.display(&black()).as_deref(), Some("B\n\nA"));
    }

    #[test]
    fn absent_fields_use_registry_defaults() {
        let display = ColorDisplay::with_registry(DisplayConfiguration::new(), scripted_registry());
        assert_eq!(display.field_names(), ["b", "a"]);
        assert_eq!(display.display(&black()).as_deref(), Some("B\n\nA"));
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        let config = DisplayConfiguration::new()
            .with_fields(["A", "B"])
            .with_excluded_fields(["a"]);
        let display = ColorDisplay::with_registry(config, scripted_registry());
        assert_eq!(display.display(&black()).as_deref(), Some("B"));
    }

    #[test]
    fn display_is_repeatable() {
        let display = scripted(&["a", "b"]);
        assert_eq!(display.display(&black()), display.display(&black()));
    }

    #[test]
    fn builtin_defaults_for_opaque_red() {
        let display = ColorDisplay::new(DisplayConfiguration::new());
        let text = display.display(&ColorMatch::rgb8(255, 0, 0)).unwrap();
        let lines: Vec<&str> = text.split(FIELD_SEPARATOR).collect();

        // Alpha declines for opaque colors
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("![](data:image/svg+xml;base64,"));
        assert_eq!(lines[1], "**RGB:** rgb(255, 0, 0)");
        assert_eq!(lines[2], "**HSL:** hsl(0, 100%, 50%)");
        assert_eq!(lines[3], "**CMYK:** cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(lines[4], "**Hex:** #ff0000");
    }

    #[test]
    fn builtin_defaults_include_alpha_for_translucent() {
        let display = ColorDisplay::new(DisplayConfiguration::new());
        let text = display.display(&ColorMatch::rgba8(255, 0, 0, 128)).unwrap();
        assert!(text.ends_with("**Hex:** #ff000080\n\n**Alpha:** 0.5"));
    }

    #[test]
    fn upper_and_lower_case_fields_agree() {
        let red = ColorMatch::rgb8(255, 0, 0);
        let upper = ColorDisplay::new(DisplayConfiguration::new().with_fields(["HEX"]));
        let lower = ColorDisplay::new(DisplayConfiguration::new().with_fields(["hex"]));
        assert_eq!(upper.display(&red), lower.display(&red));
        assert_eq!(upper.display(&red).as_deref(), Some("**Hex:** #ff0000"));
    }

    #[test]
    fn exclusion_example_from_settings() {
        let config = DisplayConfiguration::new()
            .with_fields(["Hex", "RGB", "Alpha"])
            .with_excluded_fields(["rgb"]);
        let display = ColorDisplay::new(config);
        assert_eq!(display.field_names(), ["hex", "alpha"]);

        let text = display.display(&ColorMatch::rgba8(0, 0, 255, 51)).unwrap();
        assert_eq!(text, "**Hex:** #0000ff33\n\n**Alpha:** 0.2");
    }

    #[test]
    fn css_name_declines_and_is_dropped() {
        let display =
            ColorDisplay::new(DisplayConfiguration::new().with_fields(["css-color-name", "hex"]));
        assert_eq!(
            display.display(&ColorMatch::rgb8(255, 0, 0)).as_deref(),
            Some("**Name:** red\n\n**Hex:** #ff0000")
        );
        assert_eq!(
            display.display(&ColorMatch::rgb8(1, 2, 3)).as_deref(),
            Some("**Hex:** #010203")
        );
    }

    #[test]
    fn nearly_opaque_fields_agree() {
        let config = DisplayConfiguration::new().with_fields(["hex", "alpha", "css-color-name"]);
        let display = ColorDisplay::new(config);
        let nearly_opaque = ColorMatch::new(
            Srgba::new(1.0, 0.0, 0.0, 0.999),
            crate::color::Span::default(),
        );
        assert_eq!(
            display.display(&nearly_opaque).as_deref(),
            Some("**Hex:** #ff0000\n\n**Name:** red")
        );
    }

    #[test]
    fn malformed_match_renders_nothing() {
        let display = ColorDisplay::new(DisplayConfiguration::new());
        let broken = ColorMatch::new(
            Srgba::new(f32::NAN, 0.0, 0.0, 1.0),
            crate::color::Span::default(),
        );
        assert_eq!(display.display(&broken), None);
    }

    #[test]
    fn live_configuration_is_reread_every_call() {
        let settings = Arc::new(RwLock::new(DisplayConfiguration::new().with_fields(["a"])));
        let display = ColorDisplay::with_registry(Arc::clone(&settings), scripted_registry());
        assert_eq!(display.display(&black()).as_deref(), Some("A"));

        settings.write().excluded_fields = Some(vec!["A".into()]);
        assert_eq!(display.display(&black()), None);

        *settings.write() = DisplayConfiguration::new();
        assert_eq!(display.display(&black()).as_deref(), Some("B\n\nA"));
    }
}
