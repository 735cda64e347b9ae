use super::*;
use crate::model::{Session, User};

#[test]
fn pending_phases_show_loading() {
    assert_eq!(decide(&AuthPhase::Uninitialized), GuardDecision::Loading);
    assert_eq!(decide(&AuthPhase::Loading), GuardDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(decide(&AuthPhase::Unauthenticated), GuardDecision::Redirect("/login"));
}

#[test]
fn authenticated_renders() {
    let session = Session {
        token: "t".to_owned(),
        user: User { id: 1, first_name: String::new(), last_name: String::new(), email: "a@b.c".to_owned() },
        organizations: Vec::new(),
    };
    assert_eq!(decide(&AuthPhase::Authenticated(session)), GuardDecision::Render);
}
