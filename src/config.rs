//! Display configuration and the sources it is read from.
//!
//! A [`DisplayConfiguration`] is a snapshot of the two host settings the
//! pipeline cares about. The host owns the live settings store; the
//! pipeline reads a fresh snapshot through [`ConfigSource`] on every call.
//!
//! # Example
//!
//! ```
//! use color_info::DisplayConfiguration;
//!
//! let config = DisplayConfiguration::from_json(
//!     r#"{ "fields": ["Hex", "RGB", "Alpha"], "excludedFields": ["rgb"] }"#,
//! ).unwrap();
//!
//! let defaults = ["preview".to_string()];
//! assert_eq!(config.active_fields(&defaults), ["hex", "alpha"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::field::normalize_field_name;

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings document was not valid JSON or had the wrong shape.
    #[error("invalid color display settings: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// DisplayConfiguration
// ============================================================================

/// The `fields` / `excludedFields` settings.
///
/// `None` means the setting is absent. An absent `fields` falls back to
/// the registry's default list; a present but empty `fields` shows
/// nothing.
///
/// # JSON Format
///
/// ```json
/// {
///   "fields": ["preview", "hex", "rgb"],
///   "excludedFields": ["alpha"]
/// }
/// ```
///
/// Entries may be any JSON scalar; numbers and booleans are stringified
/// before matching, so a stray `1` is simply an unknown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "tsify",
    derive(tsify_next::Tsify),
    tsify(from_wasm_abi, into_wasm_abi)
)]
pub struct DisplayConfiguration {
    /// Ordered field names to display. `None` means use the defaults.
    #[serde(
        default,
        deserialize_with = "deserialize_names",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<Vec<String>>"))]
    #[cfg_attr(feature = "tsify", tsify(optional))]
    pub fields: Option<Vec<String>>,

    /// Field names to hide, regardless of order.
    #[serde(
        default,
        deserialize_with = "deserialize_names",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<Vec<String>>"))]
    #[cfg_attr(feature = "tsify", tsify(optional))]
    pub excluded_fields: Option<Vec<String>>,
}

impl DisplayConfiguration {
    /// Creates an empty configuration (defaults, nothing excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered field list.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the excluded field list.
    pub fn with_excluded_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves the normalized field list to display, in order.
    ///
    /// 1. `fields` if present, otherwise `defaults`
    /// 2. every name normalized
    /// 3. names in `excludedFields` (normalized) removed, order kept
    pub fn active_fields(&self, defaults: &[String]) -> Vec<String> {
        let excluded = self.excluded_set();
        let fields = self.fields.as_deref().unwrap_or(defaults);

        fields
            .iter()
            .map(|name| normalize_field_name(name))
            .filter(|name| !excluded.contains(name))
            .collect()
    }

    /// Returns the normalized exclusion set.
    pub fn excluded_set(&self) -> HashSet<String> {
        self.excluded_fields
            .iter()
            .flatten()
            .map(|name| normalize_field_name(name))
            .collect()
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserializes a configuration from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Accepts a list of arbitrary JSON scalars and stringifies each entry.
fn deserialize_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| values.into_iter().map(stringify_name).collect()))
}

fn stringify_name(value: Value) -> String {
    match value {
        Value::String(name) => name,
        other => other.to_string(),
    }
}

// ============================================================================
// ConfigSource Trait
// ============================================================================

/// Anything the display pipeline can read a configuration snapshot from.
///
/// The pipeline calls [`snapshot`](Self::snapshot) once per display, so a
/// live source sees host changes on the next call without any caching.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use color_info::{ColorDisplay, ColorMatch, DisplayConfiguration};
/// use parking_lot::RwLock;
///
/// let settings = Arc::new(RwLock::new(DisplayConfiguration::new().with_fields(["hex"])));
/// let display = ColorDisplay::new(Arc::clone(&settings));
/// let red = ColorMatch::rgb8(255, 0, 0);
///
/// assert_eq!(display.display(&red).as_deref(), Some("**Hex:** #ff0000"));
///
/// *settings.write() = DisplayConfiguration::new().with_fields(["rgb"]);
/// assert_eq!(display.display(&red).as_deref(), Some("**RGB:** rgb(255, 0, 0)"));
/// ```
pub trait ConfigSource {
    /// Returns the current configuration.
    fn snapshot(&self) -> DisplayConfiguration;
}

impl ConfigSource for DisplayConfiguration {
    fn snapshot(&self) -> DisplayConfiguration {
        self.clone()
    }
}

impl ConfigSource for RwLock<DisplayConfiguration> {
    fn snapshot(&self) -> DisplayConfiguration {
        self.read().clone()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn snapshot(&self) -> DisplayConfiguration {
        (**self).snapshot()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn snapshot(&self) -> DisplayConfiguration {
        (**self).snapshot()
    }
}

// ============================================================================
// Tests
// ============================================================================
