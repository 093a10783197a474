//! REST helpers for the storefront profile endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the server's
//! `/api` proxy. Server-side (SSR): every call returns
//! [`ApiError::Unavailable`] since these endpoints carry the browser's
//! session cookies and are only meaningful there.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields `Result<_, ApiError>`. Non-success statuses become
//! `ApiError::Rejected` carrying the server's `message` field, so views can
//! render it without inspecting raw bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, PaymentMethodId, PaymentProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::decode_payment_method;

/// Proxy path for the profile + payment read.
pub const PAYMENT_PROFILE_ENDPOINT: &str = "/api/user/profile/payment";

/// Proxy path for the default payment method write.
pub const CHANGE_PAYMENT_METHOD_ENDPOINT: &str = "/api/user/cart/changepm";

/// Query parameter naming the requested payment method.
pub const PAYMENT_METHOD_PARAM: &str = "paymentMethod";

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_profile_response(status: u16, body: &str) -> Result<PaymentProfile, ApiError> {
    if !is_success(status) {
        return Err(ApiError::rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_change_response(status: u16, body: &str) -> Result<PaymentMethodId, ApiError> {
    if !is_success(status) {
        return Err(ApiError::rejected(status, body));
    }
    decode_payment_method(body)
}

/// Fetch the current user's profile and saved payment method.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent,
/// [`ApiError::Rejected`] for non-success statuses, and [`ApiError::Decode`]
/// for malformed bodies.
pub async fn fetch_payment_profile() -> Result<PaymentProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PAYMENT_PROFILE_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_profile_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to make `selection` the account's default payment method.
///
/// Returns the server-confirmed identifier, which may differ from `selection`.
///
/// # Errors
///
/// Same taxonomy as [`fetch_payment_profile`]; a declined change surfaces as
/// [`ApiError::Rejected`] with the server's message.
pub async fn change_default_payment_method(selection: &PaymentMethodId) -> Result<PaymentMethodId, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(CHANGE_PAYMENT_METHOD_ENDPOINT)
            .query([(PAYMENT_METHOD_PARAM, selection.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_change_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selection;
        Err(ApiError::Unavailable)
    }
}
