//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so it can be unit-tested
//! without a browser; pages wrap it in `RwSignal`s.

pub mod payment;
pub mod profile;
