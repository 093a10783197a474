//! Wire DTOs for the storefront profile API.
//!
//! DESIGN
//! ======
//! The profile service speaks camelCase JSON with loosely populated fields.
//! These types pin that contract down at the client boundary so pages only
//! ever see typed values, and the server proxy reuses them to normalize
//! upstream responses before they reach the browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque payment method identifier understood by the backend and the selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodId(String);

impl PaymentMethodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank identifiers mean "nothing selected".
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PaymentMethodId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PaymentMethodId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account summary nested in the profile payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Profile + payment data returned by `GET /user/profile/payment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProfile {
    #[serde(default)]
    pub username: String,
    /// `None` when the account has no saved method (null, missing, or blank).
    #[serde(default, deserialize_with = "deserialize_optional_method")]
    pub default_payment_method: Option<PaymentMethodId>,
    #[serde(default)]
    pub user: Option<ProfileUser>,
}

impl PaymentProfile {
    /// Name shown in the profile chrome: the account name, else the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

fn deserialize_optional_method<'de, D>(deserializer: D) -> Result<Option<PaymentMethodId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(PaymentMethodId).filter(|id| !id.is_blank()))
}

/// Error body shape shared by the profile service and the proxy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Fallback message when a failed response carries no usable `message`.
#[must_use]
pub fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pull the user-facing message out of an error body, falling back to the status.
#[must_use]
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(status))
}

/// Decode the confirmed identifier from a change-method response.
///
/// The profile service may answer with a JSON string (`"card_B"`) or with the
/// bare identifier as plain text; both are accepted, as are numeric ids.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is empty or a non-string JSON value.
pub fn decode_payment_method(body: &str) -> Result<PaymentMethodId, ApiError> {
    let trimmed = body.trim();
    let id = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Number(n)) => n.to_string(),
        Ok(other) => return Err(ApiError::Decode(format!("expected payment method string, got {other}"))),
        Err(_) => trimmed.to_owned(),
    };
    let id = PaymentMethodId(id);
    if id.is_blank() {
        return Err(ApiError::Decode("empty payment method".to_owned()));
    }
    Ok(id)
}

/// Failure taxonomy for calls made through [`crate::net::api`].
///
/// `Rejected` displays exactly the server's message so views can render it
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Rejected` error from a failed response's status and body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: error_message_from_body(status, body) }
    }
}
