// Navigation Transitions
// Nav items and tab buttons get a standing transition at bind time and a
// small vertical nudge while hovered.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::EffectConfig;
use crate::dom::{self, EffectsHandle, ListenerGuard};
use crate::tokens::{NAV_HOVER_TRANSFORM, NAV_REST_TRANSFORM};

pub const NAV_SELECTOR: &str = ".nav-item, .tab-button";
const MARKER: &str = "data-effect-nav";

pub fn bind_navigation_transitions(
    document: &Document,
    config: &EffectConfig,
) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();

    for item in dom::query_all(document, NAV_SELECTOR)? {
        if !dom::mark_bound(&item, MARKER) {
            continue;
        }
        handle.track_marker(item.clone(), MARKER);

        let _ = item.style().set_property("transition", &config.transition());

        let enter = {
            let item = item.clone();
            move |_: web_sys::Event| {
                let _ = item.style().set_property("transform", NAV_HOVER_TRANSFORM);
            }
        };
        handle.push(ListenerGuard::attach(&item, "pointerenter", enter)?);

        let leave = {
            let item = item.clone();
            move |_: web_sys::Event| {
                let _ = item.style().set_property("transform", NAV_REST_TRANSFORM);
            }
        };
        handle.push(ListenerGuard::attach(&item, "pointerleave", leave)?);
    }

    Ok(handle)
}
