use super::*;

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(302));
    assert!(!is_success(402));
}

#[test]
fn parse_profile_response_decodes_success_body() {
    let profile = parse_profile_response(200, r#"{"username":"alice","defaultPaymentMethod":"card_A"}"#).unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.default_payment_method, Some(PaymentMethodId::from("card_A")));
}

#[test]
fn parse_profile_response_maps_failure_to_rejected() {
    let err = parse_profile_response(401, r#"{"message":"Unauthorized"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 401, message: "Unauthorized".to_owned() });
}

#[test]
fn parse_profile_response_reports_malformed_body() {
    let err = parse_profile_response(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn parse_change_response_returns_confirmed_method() {
    assert_eq!(parse_change_response(200, r#""card_B""#), Ok(PaymentMethodId::from("card_B")));
}

#[test]
fn parse_change_response_surfaces_server_message() {
    let err = parse_change_response(402, r#"{"message":"Card declined"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Card declined");
}

#[test]
fn parse_change_response_synthesizes_message_without_body() {
    let err = parse_change_response(503, "").unwrap_err();
    assert_eq!(err.to_string(), "request failed: 503");
}
