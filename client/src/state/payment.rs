//! Per-mount view state for the payment-method page.
//!
//! DESIGN
//! ======
//! `saved` only ever changes from a server-confirmed response, never
//! optimistically. `saving` gates `begin_save` so a second click while a
//! request is in flight cannot submit twice.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use crate::net::types::{ApiError, PaymentMethodId, PaymentProfile};

/// Local state for one mount of the payment-method page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentViewState {
    /// Last payment method the server confirmed.
    pub saved: Option<PaymentMethodId>,
    /// The user's in-progress choice.
    pub pending: Option<PaymentMethodId>,
    /// Last error text, empty when there is none.
    pub error: String,
    /// A change request is in flight.
    pub saving: bool,
}

impl PaymentViewState {
    /// Seed both the saved and pending values from loader data.
    #[must_use]
    pub fn from_profile(profile: &PaymentProfile) -> Self {
        Self {
            saved: profile.default_payment_method.clone(),
            pending: profile.default_payment_method.clone(),
            ..Self::default()
        }
    }

    /// Record a selector change. Blank identifiers clear the selection.
    pub fn select(&mut self, id: PaymentMethodId) {
        self.pending = Some(id).filter(|id| !id.is_blank());
    }

    /// Whether the save control should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        if self.saving {
            return false;
        }
        match &self.pending {
            Some(pending) if !pending.is_blank() => self.saved.as_ref() != Some(pending),
            _ => false,
        }
    }

    /// Mark a save as in flight and hand back the selection to submit.
    ///
    /// Returns `None` (and changes nothing) when saving is not allowed.
    pub fn begin_save(&mut self) -> Option<PaymentMethodId> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.pending.clone()
    }

    /// Apply the server's answer to a change request.
    ///
    /// Success replaces `saved` and clears the error. Failure keeps `saved`
    /// and `pending` as they were and stores the server's message.
    pub fn finish_save(&mut self, result: Result<PaymentMethodId, ApiError>) {
        self.saving = false;
        match result {
            Ok(confirmed) => {
                self.saved = Some(confirmed);
                self.error.clear();
            }
            Err(e) => self.error = e.to_string(),
        }
    }
}
