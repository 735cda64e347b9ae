//! Protected-route decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::AuthPhase;

/// Public route unauthenticated users are sent to. Logout lands here too.
pub const LOGIN_ROUTE: &str = "/login";
/// Route a successful sign-in lands on.
pub const LANDING_ROUTE: &str = "/dashboard";

/// What a protected route should show for the current auth phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Loading,
    Redirect(&'static str),
}

/// Pure function of the auth phase; the guard keeps no state of its own.
#[must_use]
pub fn decide(phase: &AuthPhase) -> GuardDecision {
    match phase {
        AuthPhase::Authenticated(_) => GuardDecision::Render,
        AuthPhase::Uninitialized | AuthPhase::Loading => GuardDecision::Loading,
        AuthPhase::Unauthenticated => GuardDecision::Redirect(LOGIN_ROUTE),
    }
}
