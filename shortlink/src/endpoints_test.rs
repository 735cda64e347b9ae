use super::*;
use crate::model::{CreateOrganizationRequest, CreateUrlRequest, User};

fn session() -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: User { id: 1, first_name: "Ada".to_owned(), last_name: "L".to_owned(), email: "ada@example.com".to_owned() },
        organizations: Vec::new(),
    }
}

#[test]
fn signin_is_unauthenticated_post_with_credentials() {
    let req = auth::signin("ada@example.com", "pw");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/auth/signin");
    assert_eq!(req.authorization, None);
    assert_eq!(req.body, Some(serde_json::json!({ "email": "ada@example.com", "password": "pw" })));
}

#[test]
fn signup_body_uses_camel_case_names() {
    let req = auth::signup("Ada", "Lovelace", "ada@example.com", "secret1");
    assert_eq!(req.path, "/api/auth/signup");
    assert_eq!(
        req.body,
        Some(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "secret1"
        }))
    );
}

#[test]
fn authenticated_builders_carry_session_bearer() {
    let s = session();
    let reqs = [
        organizations::list(&s, &PageQuery::default()),
        organizations::get(&s, 3),
        organizations::delete(&s, 3),
        organizations::create(&s, &CreateOrganizationRequest::default()),
        urls::list_all(&s, &PageQuery::default()),
        urls::list_mine(&s, &PageQuery::default()),
        urls::list_by_organization(&s, 3, &PageQuery::default()),
        urls::get(&s, 9),
        urls::delete(&s, 9),
        urls::create(&s, &CreateUrlRequest::default()),
    ];
    for req in reqs {
        assert_eq!(req.authorization.as_deref(), Some("Bearer tok-1"), "{}", req.path);
    }
}

#[test]
fn default_page_query_matches_backend_defaults() {
    assert_eq!(PageQuery::default().to_query_string(), "page=0&size=10&sortBy=createdAt&sortDir=desc");
}

#[test]
fn my_urls_path_carries_requested_page_index() {
    let req = urls::list_mine(&session(), &PageQuery::page(2));
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/api/urls/my-urls?page=2&size=10&sortBy=createdAt&sortDir=desc");
}

#[test]
fn organization_url_list_path_includes_id() {
    let req = urls::list_by_organization(&session(), 42, &PageQuery::default());
    assert!(req.path.starts_with("/api/urls/organization/42?"));
}

#[test]
fn resource_paths_and_verbs() {
    let s = session();
    let body = CreateOrganizationRequest { name: "Acme".to_owned(), ..CreateOrganizationRequest::default() };
    let update = organizations::update(&s, 5, &body);
    assert_eq!((update.method, update.path.as_str()), (Method::Put, "/api/organizations/5"));
    assert_eq!(update.body, Some(serde_json::json!({ "name": "Acme" })));

    let get = urls::get(&s, 8);
    assert_eq!((get.method, get.path.as_str()), (Method::Get, "/api/urls/8"));

    let del = urls::delete(&s, 8);
    assert_eq!((del.method, del.path.as_str()), (Method::Delete, "/api/urls/8"));
}

#[test]
fn url_joins_base_without_double_slash() {
    let req = urls::get(&session(), 1);
    assert_eq!(req.url("http://localhost:8080/"), "http://localhost:8080/api/urls/1");
    assert_eq!(req.url(""), "/api/urls/1");
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Delete.as_str(), "DELETE");
    assert_eq!(SortDir::Asc.as_str(), "asc");
}
