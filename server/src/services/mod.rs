//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream calls so route handlers can stay focused on
//! protocol translation and credential plumbing.

pub mod profile;
