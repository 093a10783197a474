//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render profile chrome and input surfaces; they take state and
//! callbacks as props and leave orchestration to `pages`.

pub mod payment_selector;
pub mod profile_layout;
