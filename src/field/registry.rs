//! Lookup table from normalized field name to renderer.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use super::{Field, FieldRenderer, normalize_field_name};

/// Fields shown when the configuration does not list any, in display order.
pub const DEFAULT_FIELDS: [Field; 6] = [
    Field::Preview,
    Field::Rgb,
    Field::Hsl,
    Field::Cmyk,
    Field::Hex,
    Field::Alpha,
];

static BUILTIN: LazyLock<Arc<FieldRegistry>> = LazyLock::new(|| {
    let renderers = Field::ALL
        .into_iter()
        .map(|field| Arc::new(field) as Arc<dyn FieldRenderer>);
    let registry =
        FieldRegistry::new(renderers).with_defaults(DEFAULT_FIELDS.iter().map(Field::as_str));
    Arc::new(registry)
});

// ============================================================================
// FieldRegistry
// ============================================================================

/// The closed set of known renderers, addressable by normalized name.
///
/// A registry is built once and never mutated afterwards. It also carries
/// the default field list used when the configuration names no fields.
///
/// # Example
///
/// ```
/// use color_info::FieldRegistry;
///
/// let registry = FieldRegistry::builtin();
/// assert!(registry.lookup("HEX").is_some());
/// assert!(registry.lookup("notreal").is_none());
/// ```
pub struct FieldRegistry {
    renderers: HashMap<String, Arc<dyn FieldRenderer>>,
    defaults: Vec<String>,
}

impl FieldRegistry {
    /// Builds a registry from renderers, keyed by their normalized names.
    ///
    /// If two renderers normalize to the same name the later one wins; a
    /// warning is logged since that almost always indicates a naming bug.
    pub fn new<I>(renderers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn FieldRenderer>>,
    {
        let mut map = HashMap::new();
        for renderer in renderers {
            let key = normalize_field_name(renderer.name());
            if map.insert(key.clone(), renderer).is_some() {
                log::warn!("Duplicate color field `{key}`, keeping the last registration");
            }
        }

        Self {
            renderers: map,
            defaults: Vec::new(),
        }
    }

    /// Sets the default field list (names are normalized).
    pub fn with_defaults<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.defaults = names
            .into_iter()
            .map(|name| normalize_field_name(name.as_ref()))
            .collect();
        self
    }

    /// Returns the shared registry of built-in [`Field`]s.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Finds the renderer registered under `name`, compared case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn FieldRenderer>> {
        self.renderers.get(&normalize_field_name(name))
    }

    /// Returns true if a renderer is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// The default field list, normalized, in display order.
    pub fn default_fields(&self) -> &[String] {
        &self.defaults
    }

    /// Registered (normalized) names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns true if no renderers are registered.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("names", &self.names())
            .field("defaults", &self.defaults)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
