//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router and URL concerns from page and component
//! logic to improve reuse and testability.

pub mod nav;
pub mod query;
