//! Profile service client: reads the account's payment profile and changes
//! its default payment method on the upstream backend.
//!
//! DESIGN
//! ======
//! The browser's credentials are forwarded verbatim; this server holds no
//! session state of its own. Responses are decoded into the same typed DTOs
//! the client uses so the proxy only ever emits well-formed bodies.

use std::time::Duration;

use axum::http::{HeaderMap, header};
use client::net::types::{PaymentMethodId, PaymentProfile, decode_payment_method, error_message_from_body};

const PAYMENT_PROFILE_PATH: &str = "/user/profile/payment";
const CHANGE_PAYMENT_METHOD_PATH: &str = "/user/cart/changepm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Errors produced by profile service calls.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("profile service request failed: {0}")]
    Upstream(String),

    /// The profile service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The success body did not match the expected shape.
    #[error("profile service response parse failed: {0}")]
    Parse(String),
}

/// Browser credentials relayed to the profile service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedAuth {
    pub authorization: Option<String>,
    pub cookie: Option<String>,
}

impl ForwardedAuth {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        Self { authorization: read(header::AUTHORIZATION), cookie: read(header::COOKIE) }
    }

    fn apply(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(authorization) = &self.authorization {
            req = req.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(cookie) = &self.cookie {
            req = req.header(reqwest::header::COOKIE, cookie);
        }
        req
    }
}

/// HTTP client bound to one profile service base URL.
#[derive(Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    /// Build a client for `base_url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(base_url: &str, timeouts: ProfileTimeouts) -> Result<Self, ProfileError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ProfileError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /user/profile/payment` on behalf of the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Upstream`] on transport failure,
    /// [`ProfileError::Rejected`] for non-success statuses, and
    /// [`ProfileError::Parse`] for malformed bodies.
    pub async fn fetch_payment_profile(&self, auth: &ForwardedAuth) -> Result<PaymentProfile, ProfileError> {
        let req = auth.apply(self.http.get(self.url(PAYMENT_PROFILE_PATH)));
        let body = send_for_body(req).await?;
        serde_json::from_str(&body).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// `PUT /user/cart/changepm?paymentMethod=<id>` on behalf of the caller.
    ///
    /// Returns the identifier the service confirmed.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ProfileClient::fetch_payment_profile`].
    pub async fn change_payment_method(
        &self,
        auth: &ForwardedAuth,
        selection: &PaymentMethodId,
    ) -> Result<PaymentMethodId, ProfileError> {
        let req = self
            .http
            .put(self.url(CHANGE_PAYMENT_METHOD_PATH))
            .query(&[(client::net::api::PAYMENT_METHOD_PARAM, selection.as_str())]);
        let body = send_for_body(auth.apply(req)).await?;
        decode_payment_method(&body).map_err(|e| ProfileError::Parse(e.to_string()))
    }
}

async fn send_for_body(req: reqwest::RequestBuilder) -> Result<String, ProfileError> {
    let resp = req.send().await.map_err(|e| ProfileError::Upstream(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ProfileError::Upstream(e.to_string()))?;
    if !status.is_success() {
        let status = status.as_u16();
        return Err(ProfileError::Rejected { status, message: error_message_from_body(status, &body) });
    }
    Ok(body)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
