//! Session persistence seam and the auth lifecycle state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the session in `localStorage`, the CLI in a JSON file,
//! tests in memory. All three sit behind [`SessionStore`], and the single
//! writer of the session is [`AuthController`]. Views only read its
//! [`AuthPhase`].
//!
//! STATES
//! ======
//! `Uninitialized -> Loading` when the app mounts, `Loading -> Authenticated`
//! when a persisted token is still live, `Loading -> Unauthenticated`
//! otherwise. `Authenticated -> Unauthenticated` on logout, on a stale token
//! at re-validation, or on a rejected request. `Unauthenticated ->
//! Authenticated` on sign-in. There is no terminal state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ApiError;
use crate::model::{Organization, Session};
use crate::token;

/// Storage key holding the serialized session blob.
pub const SESSION_STORAGE_KEY: &str = "shortlink.session";

/// Best-effort persistent key-value slot for the session blob.
///
/// Implementations swallow storage failures: a session that fails to persist
/// simply is not there on the next load.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, blob: &str);
    fn clear(&mut self);
}

/// In-process store, used by tests and by anything that must not touch disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    blob: Option<String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    #[must_use]
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.blob.clone()
    }

    fn save(&mut self, blob: &str) {
        self.blob = Some(blob.to_owned());
    }

    fn clear(&mut self) {
        self.blob = None;
    }
}

/// Where the auth lifecycle currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthPhase {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthPhase {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// True until the persisted session has been checked.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Sole owner and writer of the session.
#[derive(Clone, Debug)]
pub struct AuthController<S> {
    store: S,
    phase: AuthPhase,
}

impl<S: SessionStore> AuthController<S> {
    pub fn new(store: S) -> Self {
        Self { store, phase: AuthPhase::Uninitialized }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mark the persisted session as being checked.
    pub fn begin(&mut self) {
        if self.phase == AuthPhase::Uninitialized {
            self.phase = AuthPhase::Loading;
        }
    }

    /// Load and check the persisted session. Acts once per controller; later
    /// calls return the current phase untouched.
    pub fn initialize(&mut self, now_ms: i64) -> &AuthPhase {
        self.begin();
        if self.phase != AuthPhase::Loading {
            return &self.phase;
        }
        self.phase = match self.load_live_session(now_ms) {
            Some(session) => AuthPhase::Authenticated(session),
            None => {
                self.store.clear();
                AuthPhase::Unauthenticated
            }
        };
        &self.phase
    }

    fn load_live_session(&self, now_ms: i64) -> Option<Session> {
        let blob = self.store.load()?;
        let session: Session = serde_json::from_str(&blob).ok()?;
        token::is_live(&session.token, now_ms).then_some(session)
    }

    /// Persist a freshly issued session and report it.
    pub fn sign_in(&mut self, session: Session) {
        self.persist(&session);
        self.phase = AuthPhase::Authenticated(session);
    }

    /// Clear the persisted session, whatever the current phase.
    pub fn sign_out(&mut self) {
        self.store.clear();
        self.phase = AuthPhase::Unauthenticated;
    }

    /// Re-check token expiry; signs out when the token went stale.
    ///
    /// Returns whether a session is still present afterwards.
    pub fn revalidate(&mut self, now_ms: i64) -> bool {
        let stale = self.session().is_some_and(|s| !token::is_live(&s.token, now_ms));
        if stale {
            self.sign_out();
        }
        self.phase.is_authenticated()
    }

    /// React to a failed call. A rejected token ends the session.
    ///
    /// Returns `true` when this error signed the user out.
    pub fn observe(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() && self.phase.is_authenticated() {
            self.sign_out();
            return true;
        }
        false
    }

    /// Refresh the organization list cached on the session.
    pub fn set_organizations(&mut self, organizations: Vec<Organization>) {
        let AuthPhase::Authenticated(session) = &mut self.phase else {
            return;
        };
        session.organizations = organizations;
        let session = session.clone();
        self.persist(&session);
    }

    fn persist(&mut self, session: &Session) {
        if let Ok(blob) = serde_json::to_string(session) {
            self.store.save(&blob);
        }
    }
}
