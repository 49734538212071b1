//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the generic JSON request helper and its transport seam;
//! `scheduler` builds the application's appliance and optimization calls on
//! top of it.

pub mod api;
pub mod scheduler;
