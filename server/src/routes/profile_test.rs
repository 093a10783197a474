use axum::body::to_bytes;
use axum::http::{HeaderValue, header};

use super::*;
use crate::state::test_helpers::{BROKEN_COOKIE, GOOD_BEARER, spawn_fake_profile_service, test_app_state};

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn bearer_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static(GOOD_BEARER));
    headers
}

fn change_query(raw: Option<&str>) -> Query<ChangePaymentMethodQuery> {
    Query(ChangePaymentMethodQuery { payment_method: raw.map(str::to_owned) })
}

// =============================================================================
// Error mapping
// =============================================================================

#[test]
fn profile_error_to_status_passes_rejected_status_through() {
    let err = ProfileError::Rejected { status: 402, message: "Card declined".to_owned() };
    assert_eq!(profile_error_to_status(&err), StatusCode::PAYMENT_REQUIRED);
}

#[test]
fn profile_error_to_status_maps_transport_and_parse_to_bad_gateway() {
    assert_eq!(profile_error_to_status(&ProfileError::Upstream("refused".to_owned())), StatusCode::BAD_GATEWAY);
    assert_eq!(profile_error_to_status(&ProfileError::Parse("eof".to_owned())), StatusCode::BAD_GATEWAY);
}

#[test]
fn profile_error_to_status_invalid_upstream_status_is_bad_gateway() {
    let err = ProfileError::Rejected { status: 42, message: "odd".to_owned() };
    assert_eq!(profile_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// GET /api/user/profile/payment
// =============================================================================

#[tokio::test]
async fn payment_profile_relays_typed_profile() {
    let state = test_app_state(&spawn_fake_profile_service().await);

    let resp = payment_profile(State(state), bearer_headers()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["defaultPaymentMethod"], "card_A");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body.get("addresses").is_none());
}

#[tokio::test]
async fn payment_profile_passes_backend_rejection_through() {
    let state = test_app_state(&spawn_fake_profile_service().await);

    let resp = payment_profile(State(state), HeaderMap::new()).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["message"], "Full authentication is required");
}

#[tokio::test]
async fn payment_profile_malformed_backend_body_is_bad_gateway() {
    let state = test_app_state(&spawn_fake_profile_service().await);
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static(BROKEN_COOKIE));

    let resp = payment_profile(State(state), headers).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(resp).await["message"], "unexpected response from profile service");
}

#[tokio::test]
async fn payment_profile_unreachable_backend_is_bad_gateway() {
    let state = test_app_state("http://127.0.0.1:1");

    let resp = payment_profile(State(state), bearer_headers()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(resp).await["message"], "profile service unavailable");
}

// =============================================================================
// PUT /api/user/cart/changepm
// =============================================================================

#[tokio::test]
async fn change_payment_method_returns_confirmed_id_as_json_string() {
    let state = test_app_state(&spawn_fake_profile_service().await);

    let resp = change_payment_method(State(state), bearer_headers(), change_query(Some("card_B"))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!("card_B"));
}

#[tokio::test]
async fn change_payment_method_normalizes_plain_text_backend_reply() {
    let state = test_app_state(&spawn_fake_profile_service().await);

    let resp = change_payment_method(State(state), bearer_headers(), change_query(Some("plain_text"))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!("credit_card"));
}

#[tokio::test]
async fn change_payment_method_relays_decline_message() {
    let state = test_app_state(&spawn_fake_profile_service().await);

    let resp = change_payment_method(State(state), bearer_headers(), change_query(Some("card_declined"))).await;

    assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(json_body(resp).await["message"], "Card declined");
}

#[tokio::test]
async fn change_payment_method_requires_selection() {
    let state = test_app_state("http://127.0.0.1:1");

    for raw in [None, Some(""), Some("  ")] {
        let resp = change_payment_method(State(state.clone()), bearer_headers(), change_query(raw)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "expected 400 for {raw:?}");
        assert_eq!(json_body(resp).await["message"], "paymentMethod is required");
    }
}
