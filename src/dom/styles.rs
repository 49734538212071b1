//! Keyframe stylesheets appended to `<head>` at load time.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::consts::{FADE_IN_STYLES, TOAST_STYLES};

/// Style blocks injected on load, in order: card fade-in, then the toast
/// slide animations with the loading marker rule.
pub const INJECTED_STYLES: [&str; 2] = [FADE_IN_STYLES, TOAST_STYLES];

/// Append one `<style>` element per entry of [`INJECTED_STYLES`].
///
/// # Errors
///
/// Returns the JS error if a style element cannot be created or appended.
#[cfg(feature = "hydrate")]
pub fn inject_styles(document: &web_sys::Document) -> Result<(), wasm_bindgen::JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    for css in INJECTED_STYLES {
        let style = document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
    }
    Ok(())
}
