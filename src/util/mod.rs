//! Utility helpers shared by page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` holds the pure display/validation helpers; `storage` isolates
//! browser persistence behind an adapter trait so it can be tested natively.

pub mod format;
pub mod storage;
