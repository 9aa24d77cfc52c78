// DOM Support
// Query helpers, rest-state capture and RAII listener ownership shared by
// the effect binders.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Collect every element matching `selector` as an `HtmlElement`.
/// Non-HTML nodes in the match set are skipped.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Computed style value at bind time; this is the rest state restored on
/// pointer-leave.
pub fn computed_style(element: &HtmlElement, property: &str) -> String {
    web_sys::window()
        .and_then(|window| window.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

/// Tag an element as handled by one binder. Returns false when the marker
/// is already present, which makes repeated binding a per-element no-op.
pub fn mark_bound(element: &HtmlElement, marker: &str) -> bool {
    if element.has_attribute(marker) {
        return false;
    }
    let _ = element.set_attribute(marker, "");
    true
}

/// One registered event listener; detached again on drop.
pub struct ListenerGuard {
    target: HtmlElement,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &HtmlElement,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Everything one `init_effects` call wired up: listener guards plus the
/// marker attributes written onto bound elements. Dropping the handle
/// detaches the listeners and clears the markers, after which the elements
/// can be bound again.
#[derive(Default)]
pub struct EffectsHandle {
    listeners: Vec<ListenerGuard>,
    markers: Vec<(HtmlElement, &'static str)>,
}

impl EffectsHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, guard: ListenerGuard) {
        self.listeners.push(guard);
    }

    pub fn track_marker(&mut self, element: HtmlElement, marker: &'static str) {
        self.markers.push((element, marker));
    }

    pub fn merge(&mut self, mut other: EffectsHandle) {
        self.listeners.append(&mut other.listeners);
        self.markers.append(&mut other.markers);
    }

    /// Number of elements this handle bound (counted per binder).
    pub fn bound_count(&self) -> usize {
        self.markers.len()
    }
}

impl Drop for EffectsHandle {
    fn drop(&mut self) {
        for (element, marker) in self.markers.drain(..) {
            let _ = element.remove_attribute(marker);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    fn body_element(tag: &str) -> HtmlElement {
        let document = document().unwrap();
        let element = document
            .create_element(tag)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn marker_makes_rebind_a_noop() {
        let element = body_element("div");
        assert!(mark_bound(&element, "data-effect-marker-test"));
        assert!(!mark_bound(&element, "data-effect-marker-test"));
        element.remove();
    }

    #[wasm_bindgen_test]
    fn listener_guard_detaches_on_drop() {
        let element = body_element("div");
        let guard = ListenerGuard::attach(&element, "pointerenter", {
            let element = element.clone();
            move |_| {
                let _ = element.style().set_property("opacity", "0.5");
            }
        })
        .unwrap();

        element
            .dispatch_event(&Event::new("pointerenter").unwrap())
            .unwrap();
        assert_eq!(element.style().get_property_value("opacity").unwrap(), "0.5");

        let _ = element.style().set_property("opacity", "1");
        drop(guard);
        element
            .dispatch_event(&Event::new("pointerenter").unwrap())
            .unwrap();
        assert_eq!(element.style().get_property_value("opacity").unwrap(), "1");
        element.remove();
    }

    #[wasm_bindgen_test]
    fn handle_drop_clears_markers() {
        let element = body_element("div");
        let mut handle = EffectsHandle::new();
        assert!(mark_bound(&element, "data-effect-handle-test"));
        handle.track_marker(element.clone(), "data-effect-handle-test");
        assert_eq!(handle.bound_count(), 1);
        drop(handle);
        assert!(!element.has_attribute("data-effect-handle-test"));
        element.remove();
    }
}
