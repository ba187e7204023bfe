//! color-info: configurable text displays for detected colors
//!
//! This crate turns a detected color (a [`ColorMatch`]) into a Markdown
//! display made of selectable fields such as RGB, HSL, hex, alpha, CSS name
//! and preview swatches. Which fields appear, and in what order, is driven
//! by a user configuration.
//!
//! # Example
//!
//! ```
//! use color_info::{ColorDisplay, ColorMatch, DisplayConfiguration};
//!
//! let config = DisplayConfiguration::new()
//!     .with_fields(["HSL", "Hex", "Alpha"])
//!     .with_excluded_fields(["hsl"]);
//! let display = ColorDisplay::new(config);
//!
//! let text = display.display(&ColorMatch::rgba8(255, 0, 0, 128)).unwrap();
//! assert_eq!(text, "**Hex:** #ff000080\n\n**Alpha:** 0.5");
//! ```
//!
//! # Settings
//!
//! Host settings are plain JSON with `fields` and `excludedFields`:
//!
//! ```
//! use color_info::{ColorDisplay, ColorMatch, DisplayConfiguration};
//!
//! let config = DisplayConfiguration::from_json(r#"{ "excludedFields": ["preview"] }"#).unwrap();
//! let display = ColorDisplay::new(config);
//!
//! // Default fields, minus the preview swatch
//! assert_eq!(display.field_names(), ["rgb", "hsl", "cmyk", "hex", "alpha"]);
//! ```
//!
//! # Custom Fields
//!
//! Hosts can register their own renderers alongside or instead of the
//! built-in [`Field`]s:
//!
//! ```
//! use std::sync::Arc;
//! use color_info::{
//!     ColorDisplay, ColorMatch, DisplayConfiguration, Field, FieldError, FieldRegistry,
//!     FieldRenderer,
//! };
//!
//! struct Brightness;
//!
//! impl FieldRenderer for Brightness {
//!     fn name(&self) -> &str {
//!         "brightness"
//!     }
//!
//!     fn render(&self, color: &ColorMatch) -> Result<Option<String>, FieldError> {
//!         let (r, g, b, _) = color.to_rgba8();
//!         Ok(Some(format!("brightness: {}", r.max(g).max(b))))
//!     }
//! }
//!
//! let mut renderers: Vec<Arc<dyn FieldRenderer>> = vec![Arc::new(Brightness)];
//! renderers.extend(Field::ALL.map(|f| Arc::new(f) as Arc<dyn FieldRenderer>));
//! let registry = Arc::new(FieldRegistry::new(renderers).with_defaults(["hex", "brightness"]));
//!
//! let display = ColorDisplay::with_registry(DisplayConfiguration::new(), registry);
//! let text = display.display(&ColorMatch::rgb8(0, 200, 0)).unwrap();
//! assert_eq!(text, "**Hex:** #00c800\n\nbrightness: 200");
//! ```

mod color;
mod config;
mod display;
mod field;

#[cfg(feature = "tsify")]
mod bindings;

pub use color::{ColorMatch, Span};
pub use config::{ConfigError, ConfigSource, DisplayConfiguration};
pub use display::{ColorDisplay, FIELD_SEPARATOR};
pub use field::{
    DEFAULT_FIELDS, Field, FieldError, FieldParseError, FieldRegistry, FieldRenderer,
    PreviewSize, normalize_field_name,
};

#[cfg(feature = "tsify")]
pub use bindings::ColorInfo;
