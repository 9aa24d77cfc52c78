//! AniData control panel effects entry point.
//!
//! Resolves the page configuration, waits for the document's structural
//! content, then binds every effect exactly once per page load.

use std::cell::RefCell;

use effects::{EffectConfig, EffectsHandle, init_effects};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

thread_local! {
    /// Keeps the bound listeners alive for the page lifetime. The handle
    /// owns JS closures, so it stays on the main thread.
    static EFFECTS: RefCell<Option<EffectsHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    // Bind immediately when the markup is already parsed, otherwise wait
    // for DOMContentLoaded. All binders, ripple included, go through this
    // single gate.
    if document.ready_state() == "loading" {
        let once = Closure::once(bind_effects);
        document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        once.forget();
    } else {
        bind_effects();
    }
    Ok(())
}

fn bind_effects() {
    let config = EffectConfig::from_page();
    match init_effects(&config) {
        Ok(handle) => {
            web_sys::console::log_1(
                &format!("panel effects: {} bindings attached", handle.bound_count()).into(),
            );
            EFFECTS.with(|slot| *slot.borrow_mut() = Some(handle));
        }
        Err(error) => web_sys::console::error_1(&error),
    }
}
