//! Page-level DOM behavior: navigation highlighting, loading markers, toasts,
//! card reveal, and injected keyframes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule keeps its selectors, timings and CSS decisions in plain
//! functions that run natively; the browser-touching parts are compiled
//! only with the `hydrate` feature.

pub mod loading;
pub mod nav;
pub mod reveal;
pub mod styles;
pub mod toast;

/// Wire the load-time page behavior: card reveal and keyframe styles right
/// away, navigation highlighting once the document has been parsed.
#[cfg(feature = "hydrate")]
pub fn install() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Err(e) = reveal::observe_cards(&document, reveal::RevealOptions::default()) {
        leptos::logging::warn!("card reveal setup failed: {e:?}");
    }
    if let Err(e) = styles::inject_styles(&document) {
        leptos::logging::warn!("style injection failed: {e:?}");
    }

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || nav::highlight_active_links(&doc));
        let listener = on_ready.unchecked_ref();
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", listener) {
            leptos::logging::warn!("DOMContentLoaded listener failed: {e:?}");
        }
    } else {
        nav::highlight_active_links(&document);
    }
}
