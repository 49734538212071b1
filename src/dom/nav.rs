//! Active navigation link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether a link's `href` attribute points at the current page.
///
/// Compares the raw attribute, not the resolved URL, so only links written
/// as the exact path (`/scheduler`) match.
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

/// Recolor and embolden every `.nav-link` that points at the current page.
#[cfg(feature = "hydrate")]
pub fn highlight_active_links(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    use crate::consts::{ACTIVE_LINK_COLOR, ACTIVE_LINK_WEIGHT, NAV_LINK_SELECTOR};

    let Some(current_path) = document.location().and_then(|loc| loc.pathname().ok()) else {
        return;
    };
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let node = links.item(i);
        let Some(link) = node.and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        if !is_active_link(link.get_attribute("href").as_deref(), &current_path) {
            continue;
        }
        let style = link.style();
        let _ = style.set_property("color", ACTIVE_LINK_COLOR);
        let _ = style.set_property("font-weight", ACTIVE_LINK_WEIGHT);
    }
}
