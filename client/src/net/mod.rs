//! Networking modules for the profile REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side calls and `types` defines the typed wire
//! contract shared with the server proxy.

pub mod api;
pub mod types;
