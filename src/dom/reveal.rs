//! Scroll-triggered fade-in for dashboard and appliance cards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Observer settings for card reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// Observe every card in `document` and fade each in as it scrolls into
/// view. The observer lives for the rest of the page.
///
/// # Errors
///
/// Returns the JS error if the observer cannot be created or the selector is
/// rejected.
#[cfg(feature = "hydrate")]
pub fn observe_cards(
    document: &web_sys::Document,
    options: RevealOptions,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::consts::{CARD_SELECTOR, REVEAL_ANIMATION};

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                // Cards leaving the viewport keep their finished animation.
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(card) = entry.target().dyn_into::<HtmlElement>() {
                    let _ = card.style().set_property("animation", REVEAL_ANIMATION);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let handler = callback.as_ref().unchecked_ref();
    let observer = IntersectionObserver::new_with_options(handler, &init)?;
    callback.forget();

    let cards = document.query_selector_all(CARD_SELECTOR)?;
    for i in 0..cards.length() {
        let node = cards.item(i);
        if let Some(card) = node.and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&card);
        }
    }
    Ok(())
}
