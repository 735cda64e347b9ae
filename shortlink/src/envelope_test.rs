use super::*;
use crate::model::{Organization, ShortUrl};

#[test]
fn decode_data_returns_payload_of_successful_envelope() {
    let body = r#"{"success":true,"message":"ok","data":{"id":1,"name":"Acme"},"timestamp":"2024-01-01T00:00:00"}"#;
    let org: Organization = decode_data(200, body).expect("decode");
    assert_eq!(org.name, "Acme");
}

#[test]
fn decode_data_nests_page_inside_data() {
    let body = r#"{
        "success": true,
        "data": {
            "content": [{"id": 5, "originalUrl": "https://example.com", "shortCode": "abc"}],
            "totalElements": 21,
            "totalPages": 3,
            "number": 1,
            "size": 10
        }
    }"#;
    let page: Page<ShortUrl> = decode_data(200, body).expect("decode");
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_elements, 21);
    assert_eq!(page.number, 1);
}

#[test]
fn decode_data_tolerates_missing_page_counters() {
    let page: Page<Organization> = decode_data(200, r#"{"success":true,"data":{"content":[]}}"#).expect("decode");
    assert_eq!(page, Page::default());
}

#[test]
fn decode_envelope_rejects_success_false_as_business() {
    let body = r#"{"success":false,"message":"Organization not found"}"#;
    let err = decode_envelope::<Organization>(200, body).expect_err("should fail");
    assert_eq!(err, ApiError::Business { status: 200, message: "Organization not found".to_owned() });
}

#[test]
fn decode_envelope_classifies_error_status_before_parsing() {
    let err = decode_envelope::<Organization>(401, "not json").expect_err("should fail");
    assert!(err.is_unauthorized());
}

#[test]
fn decode_envelope_reports_garbage_body_as_transport() {
    let err = decode_envelope::<Organization>(200, "<html>").expect_err("should fail");
    assert!(matches!(err, ApiError::Transport { status: None, .. }));
}

#[test]
fn decode_data_requires_data() {
    let err = decode_data::<Organization>(200, r#"{"success":true,"data":null}"#).expect_err("should fail");
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[test]
fn decode_ack_returns_message() {
    let body = r#"{"success":true,"message":"URL deleted successfully","data":"ok"}"#;
    assert_eq!(decode_ack(200, body).expect("ack"), Some("URL deleted successfully".to_owned()));
}
