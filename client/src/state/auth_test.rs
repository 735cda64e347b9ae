use std::cell::RefCell;

use super::*;
use shortlink::User;

fn session() -> Session {
    Session {
        token: "header.payload.sig".to_owned(),
        user: User {
            id: 1,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
        },
        organizations: Vec::new(),
    }
}

#[test]
fn starts_loading_until_initialized() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    assert_eq!(auth.phase(), AuthPhase::Loading);
    assert_eq!(auth.session_untracked(), None);
}

#[test]
fn initialize_without_persisted_session_is_unauthenticated() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    auth.initialize();
    assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
    auth.initialize();
    assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
}

#[test]
fn sign_in_then_logout_navigates_to_login() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    auth.initialize();
    auth.complete_sign_in(session());
    assert!(auth.phase().is_authenticated());
    assert_eq!(auth.session_untracked().map(|s| s.user.id), Some(1));

    let visited = RefCell::new(Vec::new());
    auth.logout(|path: &str, _| visited.borrow_mut().push(path.to_owned()));
    assert_eq!(visited.into_inner(), vec!["/login".to_owned()]);
    assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
}

#[test]
fn unauthorized_error_ends_session_but_business_error_does_not() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    auth.initialize();
    auth.complete_sign_in(session());

    let refused = ApiError::Business { status: 400, message: "duplicate".to_owned() };
    assert!(!auth.observe(&refused));
    assert!(auth.phase().is_authenticated());

    let rejected = ApiError::Unauthorized { status: 401, message: "token expired".to_owned() };
    assert!(auth.observe(&rejected));
    assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
    assert!(!auth.observe(&rejected));
}

#[test]
fn revalidate_drops_undecodable_token() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    auth.initialize();
    auth.complete_sign_in(session());
    assert!(!auth.revalidate());
    assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
}

#[test]
fn organizations_cached_on_session() {
    let _owner = leptos::prelude::Owner::new();
    _owner.set();
    let auth = AuthContext::new();
    auth.initialize();
    auth.complete_sign_in(session());
    auth.set_organizations(vec![Organization { id: 9, name: "Acme".to_owned(), ..Organization::default() }]);
    let cached = auth.session_untracked().map(|s| s.organizations.len());
    assert_eq!(cached, Some(1));
}
