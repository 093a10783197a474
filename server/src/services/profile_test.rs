use axum::http::HeaderValue;

use super::*;
use crate::state::test_helpers::{GOOD_BEARER, GOOD_COOKIE, spawn_fake_profile_service};

fn timeouts() -> ProfileTimeouts {
    ProfileTimeouts { request_secs: 5, connect_secs: 2 }
}

fn bearer() -> ForwardedAuth {
    ForwardedAuth { authorization: Some(GOOD_BEARER.to_owned()), cookie: None }
}

// =============================================================================
// ForwardedAuth
// =============================================================================

#[test]
fn forwarded_auth_reads_authorization_and_cookie() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=xyz; theme=dark"));
    let auth = ForwardedAuth::from_headers(&headers);
    assert_eq!(auth.authorization.as_deref(), Some("Bearer abc"));
    assert_eq!(auth.cookie.as_deref(), Some("session=xyz; theme=dark"));
}

#[test]
fn forwarded_auth_empty_without_headers() {
    assert_eq!(ForwardedAuth::from_headers(&HeaderMap::new()), ForwardedAuth::default());
}

#[test]
fn new_trims_trailing_slash() {
    let client = ProfileClient::new("http://profile.internal/", timeouts()).unwrap();
    assert_eq!(client.base_url(), "http://profile.internal");
    assert_eq!(client.url(PAYMENT_PROFILE_PATH), "http://profile.internal/user/profile/payment");
}

// =============================================================================
// fetch_payment_profile
// =============================================================================

#[tokio::test]
async fn fetch_payment_profile_decodes_profile() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let profile = client.fetch_payment_profile(&bearer()).await.unwrap();

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.default_payment_method, Some(PaymentMethodId::from("card_A")));
    assert_eq!(profile.display_name(), "Alice");
}

#[tokio::test]
async fn fetch_payment_profile_forwards_cookie() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();
    let auth = ForwardedAuth { authorization: None, cookie: Some(GOOD_COOKIE.to_owned()) };

    assert!(client.fetch_payment_profile(&auth).await.is_ok());
}

#[tokio::test]
async fn fetch_payment_profile_without_credentials_is_rejected() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let err = client.fetch_payment_profile(&ForwardedAuth::default()).await.unwrap_err();

    match err {
        ProfileError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Full authentication is required");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_payment_profile_unreachable_is_upstream_error() {
    let client = ProfileClient::new("http://127.0.0.1:1", timeouts()).unwrap();
    let err = client.fetch_payment_profile(&bearer()).await.unwrap_err();
    assert!(matches!(err, ProfileError::Upstream(_)), "got {err:?}");
}

// =============================================================================
// change_payment_method
// =============================================================================

#[tokio::test]
async fn change_payment_method_returns_confirmed_id() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let confirmed = client
        .change_payment_method(&bearer(), &PaymentMethodId::from("card_B"))
        .await
        .unwrap();

    assert_eq!(confirmed, PaymentMethodId::from("card_B"));
}

#[tokio::test]
async fn change_payment_method_accepts_plain_text_body() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let confirmed = client
        .change_payment_method(&bearer(), &PaymentMethodId::from("plain_text"))
        .await
        .unwrap();

    assert_eq!(confirmed, PaymentMethodId::from("credit_card"));
}

#[tokio::test]
async fn change_payment_method_surfaces_decline_message() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let err = client
        .change_payment_method(&bearer(), &PaymentMethodId::from("card_declined"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Card declined");
}

#[tokio::test]
async fn change_payment_method_synthesizes_message_for_bare_failure() {
    let base = spawn_fake_profile_service().await;
    let client = ProfileClient::new(&base, timeouts()).unwrap();

    let err = client
        .change_payment_method(&bearer(), &PaymentMethodId::from("server_error"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Rejected { status: 500, .. }));
    assert_eq!(err.to_string(), "request failed: 500");
}
