// self
use oauth2_facebook::{
	error::ResponseError,
	response::{BodyFormat, decode_body, normalize_content_type, translate_error},
};

#[test]
fn mislabeled_token_responses_negotiate_their_real_format() {
	assert_eq!(normalize_content_type("text/javascript; charset=UTF-8"), Some(BodyFormat::Json));
	assert_eq!(normalize_content_type("Text/JavaScript"), Some(BodyFormat::Json));
	assert_eq!(normalize_content_type("text/plain; charset=UTF-8"), Some(BodyFormat::Form));
	assert_eq!(normalize_content_type("application/json"), None);
	assert_eq!(BodyFormat::Json.content_type(), "application/json");
	assert_eq!(BodyFormat::Form.content_type(), "application/x-www-form-urlencoded");
}

#[test]
fn old_graph_token_responses_decode_from_form_bodies() {
	let decoded = decode_body(
		BodyFormat::Form,
		"access_token=mock_access_token&expires=3600&refresh_token=mock_refresh_token",
	)
	.expect("Form body should decode.");

	assert_eq!(
		decoded,
		serde_json::json!({
			"access_token": "mock_access_token",
			"expires": "3600",
			"refresh_token": "mock_refresh_token",
		}),
	);
}

#[test]
fn json_bodies_decode_and_reject_malformed_payloads() {
	let decoded = decode_body(
		BodyFormat::Json,
		r#"{"access_token":"mock_access_token","token_type":"bearer","expires_in":3600}"#,
	)
	.expect("JSON body should decode.");

	assert_eq!(decoded["access_token"], "mock_access_token");

	let err = decode_body(BodyFormat::Json, "access_token=mock_access_token")
		.expect_err("A form body declared as JSON should be rejected.");

	assert!(matches!(err, ResponseError::MalformedBody { format: BodyFormat::Json, .. }));
}

#[test]
fn error_payloads_raise_a_provider_error() {
	let payload = serde_json::json!({
		"error": {"message": "Foo auth error", "type": "OAuthException", "code": 191},
	});
	let err = translate_error(&payload)
		.expect_err("A non-empty error object should raise a provider error.");

	assert_eq!(err.to_string(), "OAuthException: Foo auth error");

	match err {
		ResponseError::Graph { code, raw, .. } => {
			assert_eq!(code, 191);
			assert_eq!(raw, payload);
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[test]
fn successful_payloads_pass_the_error_check() {
	translate_error(&serde_json::json!({
		"access_token": "mock_access_token",
		"token_type": "bearer",
	}))
	.expect("A payload without an error object should pass.");
	translate_error(&serde_json::json!({"error": {}}))
		.expect("An empty error object should pass.");
}
