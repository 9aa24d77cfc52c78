// Status Indicator Effects
// The connection indicator carries a `status` attribute. "connected" gets
// an expanding teal ring, "connecting" a slow opacity blink, anything else
// stays still. Gated by the `statusIndicatorPulse` config toggle.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::EffectConfig;
use crate::dom::{self, EffectsHandle};
use crate::stylesheet;
use crate::tokens::*;

pub const STATUS_SELECTOR: &str = ".status-indicator, #statusIndicator";
const MARKER: &str = "data-effect-status";

pub const STATUS_CONNECTED: &str = "connected";
pub const STATUS_CONNECTING: &str = "connecting";

fn pulse_keyframes() -> String {
    format!(
        "@keyframes {} {{\n  0% {{ box-shadow: 0 0 0 0 {}; }}\n  70% {{ box-shadow: 0 0 0 10px {}; }}\n  100% {{ box-shadow: 0 0 0 0 {}; }}\n}}",
        KEYFRAME_PULSE, STATUS_RING, STATUS_RING_FADED, STATUS_RING_FADED
    )
}

fn blink_keyframes() -> String {
    format!(
        "@keyframes {} {{\n  0% {{ opacity: 1; }}\n  50% {{ opacity: 0.6; }}\n  100% {{ opacity: 1; }}\n}}",
        KEYFRAME_BLINK
    )
}

pub fn bind_status_indicator_effects(
    document: &Document,
    config: &EffectConfig,
) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();
    if !config.status_indicator_pulse {
        return Ok(handle);
    }

    for indicator in dom::query_all(document, STATUS_SELECTOR)? {
        if !dom::mark_bound(&indicator, MARKER) {
            continue;
        }
        handle.track_marker(indicator.clone(), MARKER);

        match indicator.get_attribute("status").as_deref() {
            Some(STATUS_CONNECTED) => {
                stylesheet::ensure_rule(document, KEYFRAME_PULSE, &pulse_keyframes())?;
                let _ = indicator.style().set_property("animation", PULSE_ANIMATION);
            }
            Some(STATUS_CONNECTING) => {
                stylesheet::ensure_rule(document, KEYFRAME_BLINK, &blink_keyframes())?;
                let _ = indicator.style().set_property("animation", BLINK_ANIMATION);
            }
            _ => {}
        }
    }

    Ok(handle)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlElement;

    fn indicator(status: Option<&str>) -> HtmlElement {
        let document = dom::document().unwrap();
        let element = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_class_name("status-indicator");
        if let Some(status) = status {
            element.set_attribute("status", status).unwrap();
        }
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn animation_follows_the_status_attribute() {
        let document = dom::document().unwrap();
        let connected = indicator(Some("connected"));
        let connecting = indicator(Some("connecting"));
        let disconnected = indicator(Some("disconnected"));
        let untagged = indicator(None);

        let _handle =
            bind_status_indicator_effects(&document, &EffectConfig::default()).unwrap();

        assert_eq!(
            connected.style().get_property_value("animation").unwrap(),
            "pulse 2s infinite"
        );
        assert_eq!(
            connecting.style().get_property_value("animation").unwrap(),
            "blink 1.5s infinite"
        );
        assert_eq!(
            disconnected.style().get_property_value("animation").unwrap(),
            ""
        );
        assert_eq!(untagged.style().get_property_value("animation").unwrap(), "");

        for element in [connected, connecting, disconnected, untagged] {
            element.remove();
        }
    }

    #[wasm_bindgen_test]
    fn disabled_toggle_is_a_noop() {
        let document = dom::document().unwrap();
        let connected = indicator(Some("connected"));

        let config = EffectConfig {
            status_indicator_pulse: false,
            ..EffectConfig::default()
        };
        let handle = bind_status_indicator_effects(&document, &config).unwrap();

        assert_eq!(handle.bound_count(), 0);
        assert_eq!(connected.style().get_property_value("animation").unwrap(), "");
        connected.remove();
    }
}
