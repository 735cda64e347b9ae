use super::*;
use shortlink::endpoints;

#[test]
fn same_origin_by_default() {
    if option_env!("SHORTLINK_API_BASE").is_none() {
        assert_eq!(API_BASE, "");
        let request = endpoints::auth::signin("a@b.co", "pw");
        assert_eq!(request_url(&request), "/api/auth/signin");
    }
}

#[tokio::test]
async fn send_fails_as_transport_off_browser() {
    let request = endpoints::auth::signin("a@b.co", "pw");
    let err = send(&request).await.expect_err("no browser");
    assert!(matches!(err, ApiError::Transport { status: None, .. }));
}
