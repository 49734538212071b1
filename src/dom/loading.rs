//! Inline loading indicator for containers awaiting API data.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[cfg(feature = "hydrate")]
use crate::consts::{LOADING_MARKUP, LOADING_SELECTOR};

/// Replace the contents of `element` with the loading marker.
#[cfg(feature = "hydrate")]
pub fn show_loading(element: &web_sys::Element) {
    element.set_inner_html(LOADING_MARKUP);
}

/// Remove the loading marker from `element`, if present.
#[cfg(feature = "hydrate")]
pub fn hide_loading(element: &web_sys::Element) {
    if let Ok(Some(marker)) = element.query_selector(LOADING_SELECTOR) {
        marker.remove();
    }
}
