//! Loader result for the payment profile route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route renders nothing useful until the profile read settles, so the
//! page matches on `ProfileLoad` instead of assuming the data is present.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{ApiError, PaymentProfile};

/// Data the payment route needs once its loader succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentLoaderData {
    pub user: PaymentProfile,
    /// Active profile-layout tab parsed from `?tab=`.
    pub tab: u32,
}

/// Lifecycle of the payment route's loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileLoad {
    #[default]
    Loading,
    Ready(PaymentLoaderData),
    /// The read failed; holds the user-facing error text.
    Failed(String),
}

impl ProfileLoad {
    /// Fold a profile read into the route's load state.
    #[must_use]
    pub fn from_result(result: Result<PaymentProfile, ApiError>, tab: u32) -> Self {
        match result {
            Ok(user) => Self::Ready(PaymentLoaderData { user, tab }),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&PaymentLoaderData> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}
