use super::*;
use crate::consts::{APPLIANCES_PATH, HOME_PATH, SCHEDULER_PATH};

#[test]
fn matching_href_is_active() {
    assert!(is_active_link(Some(SCHEDULER_PATH), "/scheduler"));
    assert!(is_active_link(Some(HOME_PATH), "/"));
}

#[test]
fn other_or_missing_href_is_inactive() {
    assert!(!is_active_link(Some(APPLIANCES_PATH), "/scheduler"));
    assert!(!is_active_link(None, "/scheduler"));
}

#[test]
fn comparison_is_exact() {
    assert!(!is_active_link(Some("/scheduler/"), "/scheduler"));
    assert!(!is_active_link(Some("http://localhost/scheduler"), "/scheduler"));
}
