//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and orchestration and delegates
//! rendering details to `components`. Protected pages are wrapped by
//! `components::protected::Protected` in the router, so they can assume a
//! session exists when they mount.

pub mod create_organization;
pub mod create_url;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_urls;
pub mod organization_details;
pub mod organizations;
pub mod signup;
