//! Profile proxy routes: the browser-facing side of the profile service.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{ApiErrorBody, PaymentMethodId};
use serde::Deserialize;

use crate::services::profile::{ForwardedAuth, ProfileError};
use crate::state::AppState;

const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "profile service unavailable";
const UPSTREAM_MALFORMED_MESSAGE: &str = "unexpected response from profile service";
const INTERNAL_MESSAGE: &str = "internal error";

#[derive(Debug, Deserialize)]
pub struct ChangePaymentMethodQuery {
    #[serde(rename = "paymentMethod")]
    pub(crate) payment_method: Option<String>,
}

/// `GET /api/user/profile/payment`: relay the caller's profile + payment data.
pub async fn payment_profile(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = ForwardedAuth::from_headers(&headers);
    match state.profile.fetch_payment_profile(&auth).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => profile_error_response(&e),
    }
}

/// `PUT /api/user/cart/changepm?paymentMethod=<id>`: change the default payment method.
pub async fn change_payment_method(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ChangePaymentMethodQuery>,
) -> Response {
    let Some(selection) = query
        .payment_method
        .map(PaymentMethodId::from)
        .filter(|id| !id.is_blank())
    else {
        return error_response(StatusCode::BAD_REQUEST, "paymentMethod is required");
    };

    let auth = ForwardedAuth::from_headers(&headers);
    match state.profile.change_payment_method(&auth, &selection).await {
        Ok(confirmed) => {
            tracing::info!(payment_method = %confirmed, "default payment method changed");
            Json(confirmed).into_response()
        }
        Err(e) => profile_error_response(&e),
    }
}

pub(crate) fn profile_error_to_status(err: &ProfileError) -> StatusCode {
    match err {
        ProfileError::Rejected { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
        ProfileError::Upstream(_) | ProfileError::Parse(_) => StatusCode::BAD_GATEWAY,
        ProfileError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn profile_error_message(err: &ProfileError) -> &str {
    match err {
        ProfileError::Rejected { message, .. } => message,
        ProfileError::Upstream(_) => UPSTREAM_UNAVAILABLE_MESSAGE,
        ProfileError::Parse(_) => UPSTREAM_MALFORMED_MESSAGE,
        ProfileError::HttpClientBuild(_) => INTERNAL_MESSAGE,
    }
}

fn profile_error_response(err: &ProfileError) -> Response {
    let status = profile_error_to_status(err);
    if matches!(err, ProfileError::Rejected { .. }) {
        tracing::warn!(status = status.as_u16(), error = %err, "profile service rejected request");
    } else {
        tracing::error!(error = %err, "profile service call failed");
    }
    error_response(status, profile_error_message(err))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiErrorBody { message: Some(message.to_owned()) })).into_response()
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
