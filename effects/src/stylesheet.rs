// Keyframe Registry
// Named CSS rules are appended to the document head at most once per page,
// regardless of how many binders ask for them.

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Attribute on injected `<style>` elements naming the rule they carry.
pub const RULE_MARKER: &str = "data-effect-rule";

thread_local! {
    static INJECTED_RULES: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

/// Append a named rule to the document head unless it is already present.
pub fn ensure_rule(document: &Document, name: &'static str, css: &str) -> Result<(), JsValue> {
    let already = INJECTED_RULES.with(|rules| rules.borrow().contains(name));
    if already {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let style = document.create_element("style")?;
    style.set_attribute(RULE_MARKER, name)?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;

    INJECTED_RULES.with(|rules| {
        rules.borrow_mut().insert(name);
    });
    Ok(())
}
