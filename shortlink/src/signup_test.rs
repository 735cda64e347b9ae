use super::*;

#[test]
fn success_envelope_reports_backend_message() {
    let body = r#"{"success":true,"message":"User registered successfully","data":{}}"#;
    assert_eq!(
        signup_outcome(200, body),
        Ok(SignupOutcome { success: true, message: "User registered successfully".to_owned() })
    );
}

#[test]
fn success_without_message_uses_default() {
    let outcome = signup_outcome(201, r#"{"success":true}"#).expect("outcome");
    assert!(outcome.success);
    assert_eq!(outcome.message, SIGNUP_OK_MESSAGE);
}

#[test]
fn duplicate_email_on_200_is_failed_outcome_not_error() {
    let body = r#"{"success":false,"message":"Email is already in use"}"#;
    assert_eq!(
        signup_outcome(200, body),
        Ok(SignupOutcome { success: false, message: "Email is already in use".to_owned() })
    );
}

#[test]
fn refusal_without_message_uses_fallback() {
    let outcome = signup_outcome(200, r#"{"success":false}"#).expect("outcome");
    assert_eq!(outcome, SignupOutcome { success: false, message: SIGNUP_FAILED_MESSAGE.to_owned() });
}

#[test]
fn http_400_with_backend_message_is_failed_outcome() {
    let outcome = signup_outcome(400, r#"{"success":false,"message":"Password is too weak"}"#).expect("outcome");
    assert_eq!(outcome.message, "Password is too weak");
    assert!(!outcome.success);
}

#[test]
fn http_400_without_body_uses_fallback() {
    let outcome = signup_outcome(400, "").expect("outcome");
    assert_eq!(outcome.message, SIGNUP_FAILED_MESSAGE);
}

#[test]
fn server_error_with_message_is_failed_outcome() {
    let outcome = signup_outcome(500, r#"{"message":"Database unavailable"}"#).expect("outcome");
    assert_eq!(outcome, SignupOutcome { success: false, message: "Database unavailable".to_owned() });
}

#[test]
fn bare_server_error_is_raised() {
    let err = signup_outcome(503, "Service Unavailable").expect_err("should raise");
    assert!(matches!(err, ApiError::Transport { status: Some(503), .. }));
}

#[test]
fn garbage_success_body_is_raised() {
    assert!(matches!(signup_outcome(200, "<html>"), Err(ApiError::Transport { .. })));
}
