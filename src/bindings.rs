//! WebAssembly bindings for JavaScript hosts.
//!
//! This module provides [`ColorInfo`], a wrapper around [`ColorDisplay`]
//! that an editor extension can call directly. The host pushes its settings
//! whenever they change; each `display` call reads the latest ones.
//!
//! # Feature Flag
//!
//! This module is only available with the `tsify` feature enabled:
//!
//! ```toml
//! [dependencies]
//! color-info = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { ColorInfo } from 'color-info';
//!
//! await init();
//!
//! const info = new ColorInfo({ fields: ['preview', 'hex', 'rgb'] });
//! const hover = info.display(255, 0, 0, 1.0); // string | undefined
//!
//! // Forward configuration changes from the host
//! info.updateSettings({ excludedFields: ['preview'] });
//! ```

use std::sync::Arc;

use palette::Srgba;
use parking_lot::RwLock;
use wasm_bindgen::prelude::*;

use crate::color::{ColorMatch, Span};
use crate::config::DisplayConfiguration;
use crate::display::ColorDisplay;

// ============================================================================
// ColorInfo
// ============================================================================

/// A [`ColorDisplay`] over the built-in fields with host-updatable settings.
#[wasm_bindgen]
pub struct ColorInfo {
    settings: Arc<RwLock<DisplayConfiguration>>,
    display: ColorDisplay<Arc<RwLock<DisplayConfiguration>>>,
}

#[wasm_bindgen]
impl ColorInfo {
    /// Creates a display with the given settings object.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: DisplayConfiguration) -> ColorInfo {
        let settings = Arc::new(RwLock::new(settings));
        Self {
            display: ColorDisplay::new(Arc::clone(&settings)),
            settings,
        }
    }

    /// Creates a display from a settings JSON string.
    #[wasm_bindgen(js_name = "fromSettingsJson")]
    pub fn from_settings_json(json: &str) -> Result<ColorInfo, JsError> {
        let settings = DisplayConfiguration::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse settings: {}", e)))?;
        Ok(Self::new(settings))
    }

    /// Replaces the settings used by subsequent `display` calls.
    #[wasm_bindgen(js_name = "updateSettings")]
    pub fn update_settings(&self, settings: DisplayConfiguration) {
        *self.settings.write() = settings;
    }

    /// Returns the current settings.
    pub fn settings(&self) -> DisplayConfiguration {
        self.settings.read().clone()
    }

    // ---- Rendering ----

    /// Renders a color given as 0-255 channels and a 0-1 alpha.
    ///
    /// Returns `undefined` when no field has anything to show.
    pub fn display(&self, r: u8, g: u8, b: u8, alpha: f32) -> Option<String> {
        let color = Srgba::<u8>::new(r, g, b, 255).into_format::<f32, f32>();
        let color = Srgba::new(color.red, color.green, color.blue, alpha.clamp(0.0, 1.0));
        self.display.display(&ColorMatch::new(color, Span::default()))
    }

    /// Returns the active field names after defaults and exclusions.
    #[wasm_bindgen(js_name = "fieldNames")]
    pub fn field_names(&self) -> Vec<String> {
        self.display.field_names()
    }
}
