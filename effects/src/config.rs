// Effect Configuration
// Immutable for the page lifetime; every binder receives it by reference.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::tokens::*;

/// Window global the host page may set to override individual fields,
/// e.g. `window.__effectsConfig = { buttonHoverScale: 1.1 }`.
pub const CONFIG_GLOBAL: &str = "__effectsConfig";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectConfig {
    pub button_hover_scale: f64,
    pub button_press_scale: f64,
    pub transition_speed: String,
    pub hover_elevation: String,
    pub normal_elevation: String,
    pub card_hover_transform: String,
    pub status_indicator_pulse: bool,
    pub enable_gradient_shift: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            button_hover_scale: BUTTON_HOVER_SCALE,
            button_press_scale: BUTTON_PRESS_SCALE,
            transition_speed: TRANSITION_SPEED.to_string(),
            hover_elevation: ELEVATION_HOVER.to_string(),
            normal_elevation: ELEVATION_RESTING.to_string(),
            card_hover_transform: CARD_HOVER_TRANSFORM.to_string(),
            status_indicator_pulse: true,
            enable_gradient_shift: true,
        }
    }
}

impl EffectConfig {
    /// Resolve the page-level configuration: defaults overlaid with the
    /// optional `window.__effectsConfig` global. A malformed global is
    /// reported on the console and ignored.
    pub fn from_page() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(raw) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
            return Self::default();
        };
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(error) => {
                web_sys::console::warn_1(
                    &format!("effects: ignoring malformed {}: {}", CONFIG_GLOBAL, error).into(),
                );
                Self::default()
            }
        }
    }

    /// Standing `all <speed> ease` transition for hover effects.
    pub fn transition(&self) -> String {
        transition_all(&self.transition_speed)
    }

    pub fn hover_scale_transform(&self) -> String {
        format!("scale({})", self.button_hover_scale)
    }

    pub fn press_scale_transform(&self) -> String {
        format!("scale({})", self.button_press_scale)
    }
}
