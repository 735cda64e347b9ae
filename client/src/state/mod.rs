//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the session state machine in a signal; `dashboard` holds
//! the landing page's derived view model.

pub mod auth;
pub mod dashboard;
