use super::*;

fn url_form() -> UrlForm {
    UrlForm {
        organization_id: Some(4),
        original_url: " https://example.com/path?q=1 ".to_owned(),
        ..UrlForm::default()
    }
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(
        validate_login("  ", "pw"),
        Err(ApiError::validation("Please fill in all fields"))
    );
    assert_eq!(
        validate_login("a@b.c", "   "),
        Err(ApiError::validation("Please fill in all fields"))
    );
    assert_eq!(validate_login(" a@b.c ", "pw"), Ok(("a@b.c".to_owned(), "pw".to_owned())));
}

#[test]
fn signup_checks_in_order() {
    let mut form = SignupForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada".to_owned(),
        password: "abc".to_owned(),
        confirm_password: "xyz".to_owned(),
    };
    assert_eq!(form.validate(), Err(ApiError::validation("Please enter a valid email address")));
    form.email = "ada@example.com".to_owned();
    assert_eq!(form.validate(), Err(ApiError::validation("Password must be at least 6 characters")));
    form.password = "secret1".to_owned();
    assert_eq!(form.validate(), Err(ApiError::validation("Passwords do not match")));
    form.confirm_password = "secret1".to_owned();
    let fields = form.validate().expect("valid");
    assert_eq!(fields.email, "ada@example.com");
}

#[test]
fn signup_requires_names() {
    let form = SignupForm { email: "a@b.co".to_owned(), password: "secret1".to_owned(), ..SignupForm::default() };
    assert_eq!(form.validate(), Err(ApiError::validation("Please fill in all fields")));
}

#[test]
fn organization_name_required_and_optionals_dropped_when_blank() {
    assert_eq!(
        OrganizationForm::default().validate(),
        Err(ApiError::validation("Organization name is required"))
    );
    let req = OrganizationForm { name: " Acme ".to_owned(), short_name: " ".to_owned(), description: String::new() }
        .validate()
        .expect("valid");
    assert_eq!(req.name, "Acme");
    assert_eq!(req.short_name, None);
    assert_eq!(req.description, None);
}

#[test]
fn organization_short_name_must_be_slug() {
    let form = OrganizationForm { name: "Acme".to_owned(), short_name: "ac me".to_owned(), ..OrganizationForm::default() };
    assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
    let form = OrganizationForm { name: "Acme".to_owned(), short_name: "acme-1".to_owned(), ..OrganizationForm::default() };
    assert_eq!(form.validate().expect("valid").short_name.as_deref(), Some("acme-1"));
}

#[test]
fn url_form_requires_organization() {
    let form = UrlForm { organization_id: None, ..url_form() };
    assert_eq!(form.validate(), Err(ApiError::validation("Select an organization first")));
}

#[test]
fn url_form_rejects_missing_or_non_http_url() {
    let form = UrlForm { original_url: String::new(), ..url_form() };
    assert_eq!(form.validate(), Err(ApiError::validation("Original URL is required")));
    for bad in [
        "example.com",
        "ftp://example.com",
        "https://",
        "https://exa mple.com",
        "http://[::1",
        "https://exa<mple>.com",
        "http://a:b:c:d/",
        "http://%zz/",
    ] {
        let form = UrlForm { original_url: bad.to_owned(), ..url_form() };
        assert_eq!(form.validate(), Err(ApiError::validation("Invalid URL format")), "{bad}");
    }
}

#[test]
fn url_form_builds_trimmed_request() {
    let form = UrlForm {
        custom_short_code: " my-link ".to_owned(),
        title: " Docs ".to_owned(),
        expires_at: "2030-01-01T10:00".to_owned(),
        ..url_form()
    };
    let req = form.validate().expect("valid");
    assert_eq!(req.organization_id, 4);
    assert_eq!(req.original_url, "https://example.com/path?q=1");
    assert_eq!(req.custom_short_code.as_deref(), Some("my-link"));
    assert_eq!(req.title.as_deref(), Some("Docs"));
    assert_eq!(req.description, None);
    assert_eq!(req.expires_at.as_deref(), Some("2030-01-01T10:00"));
}

#[test]
fn url_form_enforces_lengths_and_code_charset() {
    let form = UrlForm { custom_short_code: "x".repeat(51), ..url_form() };
    assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
    let form = UrlForm { custom_short_code: "a/b".to_owned(), ..url_form() };
    assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
    let form = UrlForm { title: "t".repeat(256), ..url_form() };
    assert_eq!(form.validate(), Err(ApiError::validation("Title must be less than 255 characters")));
    let form = UrlForm { description: "d".repeat(501), ..url_form() };
    assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn url_edit_uses_same_rules() {
    assert_eq!(
        validate_url_edit(" T ", "http://example.com"),
        Ok(("T".to_owned(), "http://example.com".to_owned()))
    );
    assert_eq!(validate_url_edit("", "nope"), Err(ApiError::validation("Invalid URL format")));
}

#[test]
fn parse_http_url_accepts_ports_queries_and_ip_hosts() {
    for good in ["http://localhost:8080", "https://example.com/a?b=c#d", "http://[::1]:3000/", "http://127.0.0.1"] {
        assert!(parse_http_url(good).is_some(), "{good}");
    }
    assert!(parse_http_url("mailto:a@b.co").is_none());
    assert!(parse_http_url("localhost:8080").is_none());
}
