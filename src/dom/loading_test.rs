use crate::consts::{LOADING_MARKUP, LOADING_SELECTOR, TOAST_STYLES};

#[test]
fn loading_markup_carries_the_selector_class() {
    let class = LOADING_SELECTOR.trim_start_matches('.');
    assert!(LOADING_MARKUP.contains(&format!(r#"class="{class}""#)));
    assert!(LOADING_MARKUP.contains("Loading..."));
}

#[test]
fn loading_marker_is_styled_by_injected_css() {
    assert!(TOAST_STYLES.contains(&format!("{LOADING_SELECTOR} {{")));
}
