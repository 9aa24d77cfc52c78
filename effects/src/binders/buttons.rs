// Button Effects
// Hover scale with elevated shadow, pressed scale with a fast transition.
// The computed box-shadow at bind time is the rest state restored on
// pointer-leave.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::EffectConfig;
use crate::dom::{self, EffectsHandle, ListenerGuard};
use crate::tokens::{PRESS_TRANSITION_SPEED, transition_all};

pub const BUTTON_SELECTOR: &str = "button, .action-button";
const MARKER: &str = "data-effect-buttons";

pub fn bind_button_effects(
    document: &Document,
    config: &EffectConfig,
) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();

    for button in dom::query_all(document, BUTTON_SELECTOR)? {
        if !dom::mark_bound(&button, MARKER) {
            continue;
        }
        handle.track_marker(button.clone(), MARKER);

        let rest_shadow = dom::computed_style(&button, "box-shadow");
        let hover_transform = config.hover_scale_transform();
        let press_transform = config.press_scale_transform();
        let hover_shadow = config.hover_elevation.clone();
        let transition = config.transition();

        let enter = {
            let button = button.clone();
            let hover_transform = hover_transform.clone();
            let hover_shadow = hover_shadow.clone();
            let transition = transition.clone();
            move |_: web_sys::Event| {
                let style = button.style();
                let _ = style.set_property("transform", &hover_transform);
                let _ = style.set_property("box-shadow", &hover_shadow);
                let _ = style.set_property("transition", &transition);
            }
        };
        handle.push(ListenerGuard::attach(&button, "pointerenter", enter)?);

        let leave = {
            let button = button.clone();
            let rest_shadow = rest_shadow.clone();
            let transition = transition.clone();
            move |_: web_sys::Event| {
                let style = button.style();
                let _ = style.set_property("transform", "scale(1)");
                let _ = style.set_property("box-shadow", &rest_shadow);
                let _ = style.set_property("transition", &transition);
            }
        };
        handle.push(ListenerGuard::attach(&button, "pointerleave", leave)?);

        let press = {
            let button = button.clone();
            let press_transform = press_transform.clone();
            move |_: web_sys::Event| {
                let style = button.style();
                let _ = style.set_property("transform", &press_transform);
                let _ = style.set_property("transition", &transition_all(PRESS_TRANSITION_SPEED));
            }
        };
        handle.push(ListenerGuard::attach(&button, "pointerdown", press)?);

        let release = {
            let button = button.clone();
            move |_: web_sys::Event| {
                let style = button.style();
                let _ = style.set_property("transform", &hover_transform);
                let _ = style.set_property("transition", &transition);
            }
        };
        handle.push(ListenerGuard::attach(&button, "pointerup", release)?);
    }

    Ok(handle)
}
