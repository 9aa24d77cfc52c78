// Card Effects
// Cards and server-list rows lift on hover: translate transform plus the
// elevated shadow. Both computed box-shadow and transform are captured at
// bind time and restored exactly on pointer-leave.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::EffectConfig;
use crate::dom::{self, EffectsHandle, ListenerGuard};

pub const CARD_SELECTOR: &str = ".card, .panel, .server-item";
const MARKER: &str = "data-effect-cards";

pub fn bind_card_effects(
    document: &Document,
    config: &EffectConfig,
) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();

    for card in dom::query_all(document, CARD_SELECTOR)? {
        if !dom::mark_bound(&card, MARKER) {
            continue;
        }
        handle.track_marker(card.clone(), MARKER);

        let rest_shadow = dom::computed_style(&card, "box-shadow");
        let rest_transform = dom::computed_style(&card, "transform");
        let hover_transform = config.card_hover_transform.clone();
        let hover_shadow = config.hover_elevation.clone();
        let transition = config.transition();

        let enter = {
            let card = card.clone();
            let hover_transform = hover_transform.clone();
            let hover_shadow = hover_shadow.clone();
            let transition = transition.clone();
            move |_: web_sys::Event| {
                let style = card.style();
                let _ = style.set_property("transform", &hover_transform);
                let _ = style.set_property("box-shadow", &hover_shadow);
                let _ = style.set_property("transition", &transition);
            }
        };
        handle.push(ListenerGuard::attach(&card, "pointerenter", enter)?);

        let leave = {
            let card = card.clone();
            move |_: web_sys::Event| {
                let style = card.style();
                let _ = style.set_property("transform", &rest_transform);
                let _ = style.set_property("box-shadow", &rest_shadow);
                let _ = style.set_property("transition", &transition);
            }
        };
        handle.push(ListenerGuard::attach(&card, "pointerleave", leave)?);
    }

    Ok(handle)
}
