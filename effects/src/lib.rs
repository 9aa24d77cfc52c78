// AniData Panel Effects
// Decorative pointer-driven animation behavior for the control panel UI:
// hover/press scaling on buttons, elevation on cards, pulsing status
// indicators, shifting gradients, navigation nudges and click ripples.
// Binds onto the host page's existing markup; it never builds UI itself.

pub mod binders;
pub mod config;
pub mod dom;
pub mod stylesheet;
pub mod tokens;

pub use binders::*;
pub use config::EffectConfig;
pub use dom::EffectsHandle;

use wasm_bindgen::JsValue;

/// Wire every effect family onto the current document, in a fixed order.
///
/// Binding is idempotent per element, so calling this again only picks up
/// elements added since the previous call. The returned handle owns the
/// registered listeners; keep it alive for as long as the effects should
/// stay attached.
pub fn init_effects(config: &EffectConfig) -> Result<EffectsHandle, JsValue> {
    let document = dom::document()?;
    let mut handle = EffectsHandle::new();
    handle.merge(bind_button_effects(&document, config)?);
    handle.merge(bind_card_effects(&document, config)?);
    handle.merge(bind_status_indicator_effects(&document, config)?);
    handle.merge(bind_gradient_effects(&document, config)?);
    handle.merge(bind_navigation_transitions(&document, config)?);
    handle.merge(bind_ripple_effect(&document)?);
    Ok(handle)
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
