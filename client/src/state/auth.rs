//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` and read by the route guard, the pages, and any
//! component that issues backend calls. It is the only code that mutates the
//! session; everything else reads [`AuthContext::phase`] or
//! [`AuthContext::session`].
//!
//! DESIGN
//! ======
//! The lifecycle rules live in `shortlink::AuthController`. This type only
//! puts the controller behind a signal, supplies the browser clock and
//! storage, and performs the navigation that follows login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use shortlink::guard::{LANDING_ROUTE, LOGIN_ROUTE};
use shortlink::signup::SignupOutcome;
use shortlink::validation::SignupFields;
use shortlink::{ApiError, AuthController, AuthPhase, Organization, Session};

use crate::net;
use crate::util::clock::now_ms;
use crate::util::storage::BrowserSessionStore;

/// Handle to the auth state machine, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct AuthContext {
    controller: RwSignal<AuthController<BrowserSessionStore>>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    /// Context in the `Loading` phase, awaiting [`Self::initialize`].
    pub fn new() -> Self {
        let mut controller = AuthController::new(BrowserSessionStore);
        controller.begin();
        Self { controller: RwSignal::new(controller) }
    }

    /// Current phase (tracked).
    pub fn phase(&self) -> AuthPhase {
        self.controller.with(|c| c.phase().clone())
    }

    /// Current session (tracked).
    pub fn session(&self) -> Option<Session> {
        self.controller.with(|c| c.session().cloned())
    }

    /// Current session without subscribing; for use inside event handlers
    /// and async tasks.
    pub fn session_untracked(&self) -> Option<Session> {
        self.controller.with_untracked(|c| c.session().cloned())
    }

    /// Resolve the persisted session. Only the first call has an effect.
    pub fn initialize(&self) {
        let now = now_ms();
        self.controller.maybe_update(|c| {
            let before = c.phase().clone();
            c.initialize(now);
            #[cfg(feature = "hydrate")]
            log::info!("auth initialized: authenticated={}", c.phase().is_authenticated());
            *c.phase() != before
        });
    }

    /// Re-check token expiry. Signs out when the token went stale.
    ///
    /// Returns whether a session is still present.
    pub fn revalidate(&self) -> bool {
        let now = now_ms();
        let mut present = false;
        self.controller.maybe_update(|c| {
            let was = c.phase().is_authenticated();
            present = c.revalidate(now);
            was != present
        });
        present
    }

    /// Sign in with credentials and land on the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the classified failure; the phase is left unchanged.
    pub async fn login<N>(&self, email: &str, password: &str, navigate: N) -> Result<Session, ApiError>
    where
        N: Fn(&str, NavigateOptions),
    {
        let session = net::auth::signin(email, password).await?;
        self.complete_sign_in(session.clone());
        navigate(LANDING_ROUTE, NavigateOptions::default());
        Ok(session)
    }

    /// Adopt a freshly issued session.
    pub fn complete_sign_in(&self, session: Session) {
        #[cfg(feature = "hydrate")]
        log::info!("signed in as {}", session.user.email);
        self.controller.update(|c| c.sign_in(session));
    }

    /// Clear the session and go to the login route.
    pub fn logout<N>(&self, navigate: N)
    where
        N: Fn(&str, NavigateOptions),
    {
        self.controller.update(AuthController::sign_out);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    }

    /// Register an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Only transport failures without a backend answer.
    pub async fn signup(&self, fields: &SignupFields) -> Result<SignupOutcome, ApiError> {
        net::auth::signup(fields).await
    }

    /// Feed a failed call back into the lifecycle. A rejected token signs
    /// the user out, which makes every protected route redirect.
    ///
    /// Returns `true` when the error ended the session.
    pub fn observe(&self, error: &ApiError) -> bool {
        let mut signed_out = false;
        self.controller.maybe_update(|c| {
            signed_out = c.observe(error);
            signed_out
        });
        #[cfg(feature = "hydrate")]
        if signed_out {
            log::warn!("session rejected by backend: {error}");
        }
        signed_out
    }

    /// Refresh the organizations cached on the session.
    pub fn set_organizations(&self, organizations: Vec<Organization>) {
        self.controller.update(|c| c.set_organizations(organizations));
    }
}
