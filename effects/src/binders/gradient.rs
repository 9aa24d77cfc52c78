// Gradient Shift
// Enlarges the background of gradient-styled elements and drifts its
// position back and forth, a slow shimmer on primary surfaces. Gated by
// the `enableGradientShift` config toggle.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::EffectConfig;
use crate::dom::{self, EffectsHandle};
use crate::stylesheet;
use crate::tokens::{GRADIENT_SHIFT_ANIMATION, KEYFRAME_GRADIENT_SHIFT};

pub const GRADIENT_SELECTOR: &str = ".primary-button, .gradient-bg";
const MARKER: &str = "data-effect-gradient";

const GRADIENT_BACKGROUND_SIZE: &str = "200% 200%";

fn gradient_keyframes() -> String {
    format!(
        "@keyframes {} {{\n  0% {{ background-position: 0% 50%; }}\n  50% {{ background-position: 100% 50%; }}\n  100% {{ background-position: 0% 50%; }}\n}}",
        KEYFRAME_GRADIENT_SHIFT
    )
}

pub fn bind_gradient_effects(
    document: &Document,
    config: &EffectConfig,
) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();
    if !config.enable_gradient_shift {
        return Ok(handle);
    }

    let targets = dom::query_all(document, GRADIENT_SELECTOR)?;
    if targets.is_empty() {
        return Ok(handle);
    }
    stylesheet::ensure_rule(document, KEYFRAME_GRADIENT_SHIFT, &gradient_keyframes())?;

    for element in targets {
        if !dom::mark_bound(&element, MARKER) {
            continue;
        }
        handle.track_marker(element.clone(), MARKER);

        let style = element.style();
        let _ = style.set_property("background-size", GRADIENT_BACKGROUND_SIZE);
        let _ = style.set_property("animation", GRADIENT_SHIFT_ANIMATION);
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_rule_pans_and_returns() {
        let css = gradient_keyframes();
        assert!(css.starts_with("@keyframes gradientShift"));
        assert!(css.contains("0% { background-position: 0% 50%; }"));
        assert!(css.contains("50% { background-position: 100% 50%; }"));
        assert!(css.contains("100% { background-position: 0% 50%; }"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlElement;

    fn gradient_element() -> HtmlElement {
        let document = dom::document().unwrap();
        let element = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_class_name("gradient-bg");
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn shifting_background_is_applied() {
        let document = dom::document().unwrap();
        let element = gradient_element();

        let _handle = bind_gradient_effects(&document, &EffectConfig::default()).unwrap();

        let style = element.style();
        assert_eq!(
            style.get_property_value("background-size").unwrap(),
            "200% 200%"
        );
        assert_eq!(
            style.get_property_value("animation").unwrap(),
            "gradientShift 8s ease infinite"
        );
        element.remove();
    }

    #[wasm_bindgen_test]
    fn disabled_toggle_leaves_elements_untouched() {
        let document = dom::document().unwrap();
        let element = gradient_element();

        let config = EffectConfig {
            enable_gradient_shift: false,
            ..EffectConfig::default()
        };
        let handle = bind_gradient_effects(&document, &config).unwrap();

        assert_eq!(handle.bound_count(), 0);
        assert_eq!(element.style().get_property_value("animation").unwrap(), "");
        element.remove();
    }
}
