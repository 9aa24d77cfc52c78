// Click Ripple
// Every click on a button spawns a transient circular overlay that expands
// from the click point and fades, then removes itself. The overlay CSS is
// registered once; hosts get `position: relative; overflow: hidden` so the
// wave clips to their bounds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::binders::buttons::BUTTON_SELECTOR;
use crate::dom::{self, EffectsHandle, ListenerGuard};
use crate::tokens::{KEYFRAME_RIPPLE, RIPPLE_FILL, RIPPLE_LIFETIME_MS};

pub const RIPPLE_CLASS: &str = "ripple";
const MARKER: &str = "data-effect-ripple";

fn ripple_css() -> String {
    format!(
        ".{} {{\n  position: absolute;\n  background: {};\n  border-radius: 50%;\n  transform: scale(0);\n  animation: {} 0.6s linear;\n  pointer-events: none;\n}}\n@keyframes {} {{\n  to {{ transform: scale(2.5); opacity: 0; }}\n}}",
        RIPPLE_CLASS, RIPPLE_FILL, KEYFRAME_RIPPLE, KEYFRAME_RIPPLE
    )
}

/// Overlay geometry for a click at `(client_x, client_y)` on a host with
/// the given bounding rect: diameter is the larger host dimension and the
/// overlay is centered on the click point.
pub fn ripple_geometry(
    rect_left: f64,
    rect_top: f64,
    width: f64,
    height: f64,
    client_x: f64,
    client_y: f64,
) -> (f64, f64, f64) {
    let size = width.max(height);
    let x = client_x - rect_left - size / 2.0;
    let y = client_y - rect_top - size / 2.0;
    (size, x, y)
}

pub fn bind_ripple_effect(document: &Document) -> Result<EffectsHandle, JsValue> {
    let mut handle = EffectsHandle::new();

    let hosts = dom::query_all(document, BUTTON_SELECTOR)?;
    if hosts.is_empty() {
        return Ok(handle);
    }
    stylesheet_rule(document)?;

    for host in hosts {
        if !dom::mark_bound(&host, MARKER) {
            continue;
        }
        handle.track_marker(host.clone(), MARKER);

        // The overlay is positioned against the host and must not escape it.
        let style = host.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("overflow", "hidden");

        let click = {
            let document = document.clone();
            let host = host.clone();
            move |event: web_sys::Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let client_x = mouse.client_x() as f64;
                let client_y = mouse.client_y() as f64;
                if let Err(error) = spawn_ripple(&document, &host, client_x, client_y) {
                    web_sys::console::error_1(&error);
                }
            }
        };
        handle.push(ListenerGuard::attach(&host, "click", click)?);
    }

    Ok(handle)
}

fn stylesheet_rule(document: &Document) -> Result<(), JsValue> {
    crate::stylesheet::ensure_rule(document, KEYFRAME_RIPPLE, &ripple_css())
}

fn spawn_ripple(
    document: &Document,
    host: &HtmlElement,
    client_x: f64,
    client_y: f64,
) -> Result<(), JsValue> {
    let rect = host.get_bounding_client_rect();
    let (size, x, y) = ripple_geometry(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        client_x,
        client_y,
    );

    let overlay: HtmlElement = document
        .create_element("span")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("ripple overlay is not an html element"))?;
    overlay.set_class_name(RIPPLE_CLASS);
    let style = overlay.style();
    let _ = style.set_property("width", &format!("{}px", size));
    let _ = style.set_property("height", &format!("{}px", size));
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
    host.append_child(&overlay)?;

    Timeout::new(RIPPLE_LIFETIME_MS, move || overlay.remove()).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_centers_on_the_click_point() {
        // 100x40 host at (10, 20); click at (60, 40)
        let (size, x, y) = ripple_geometry(10.0, 20.0, 100.0, 40.0, 60.0, 40.0);
        assert_eq!(size, 100.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, -30.0);
    }

    #[test]
    fn geometry_uses_the_larger_dimension() {
        let (size, _, _) = ripple_geometry(0.0, 0.0, 30.0, 80.0, 0.0, 0.0);
        assert_eq!(size, 80.0);
    }

    #[test]
    fn overlay_rule_scales_up_and_fades() {
        let css = ripple_css();
        assert!(css.starts_with(".ripple {"));
        assert!(css.contains("animation: ripple 0.6s linear;"));
        assert!(css.contains("@keyframes ripple"));
        assert!(css.contains("transform: scale(2.5); opacity: 0;"));
    }
}
