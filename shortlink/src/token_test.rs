use super::*;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

#[test]
fn expiry_ms_reads_exp_seconds() {
    let token = make_token(&serde_json::json!({ "sub": "a@b.c", "exp": 1_700_000_000 }));
    assert_eq!(expiry_ms(&token), Ok(1_700_000_000_000));
}

#[test]
fn expiry_ms_rejects_wrong_part_count() {
    assert_eq!(expiry_ms("abc"), Err(TokenError::Shape));
    assert_eq!(expiry_ms("a.b.c.d"), Err(TokenError::Shape));
}

#[test]
fn expiry_ms_rejects_bad_base64() {
    assert_eq!(expiry_ms("a.!!!.c"), Err(TokenError::Encoding));
}

#[test]
fn expiry_ms_rejects_non_object_payload() {
    let body = URL_SAFE_NO_PAD.encode("[1,2]");
    assert_eq!(expiry_ms(&format!("h.{body}.s")), Err(TokenError::Payload));
}

#[test]
fn expiry_ms_requires_exp_claim() {
    let token = make_token(&serde_json::json!({ "sub": "a@b.c" }));
    assert_eq!(expiry_ms(&token), Err(TokenError::MissingExpiry));
}

#[test]
fn expiry_ms_tolerates_padding() {
    let body = format!("{}==", URL_SAFE_NO_PAD.encode(r#"{"exp":10}"#));
    assert_eq!(expiry_ms(&format!("h.{body}.s")), Ok(10_000));
}

#[test]
fn is_live_compares_against_now() {
    let token = make_token(&serde_json::json!({ "exp": 100 }));
    assert!(is_live(&token, 99_999));
    assert!(!is_live(&token, 100_000));
    assert!(!is_live("garbage", 0));
}
