//! View model for the dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard loads the user's organizations, then the URL page of the
//! first one for the URL total. Rendering is a pure function of this state
//! through [`DashboardState::gate`], so the "no organizations yet" rule is
//! testable without a browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use shortlink::error::SESSION_EXPIRED_MESSAGE;
use shortlink::{Organization, Page, ShortUrl};

/// Shown when the organization list could not be loaded.
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data. Please try refreshing the page.";

/// What the dashboard should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardGate {
    Loading,
    /// Load failed; show the message with a retry action.
    Failed(String),
    /// The user belongs to no organization; the required organization form
    /// comes before anything else.
    RequireOrganization,
    Ready,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub organizations: Vec<Organization>,
    pub total_organizations: u64,
    pub total_urls: u64,
    loaded: bool,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Start a load, or fail right away when there is no session to load with.
    pub fn begin_load_for(&mut self, signed_in: bool) {
        if signed_in {
            self.begin_load();
        } else {
            self.fail(SESSION_EXPIRED_MESSAGE);
        }
    }

    pub fn apply_organizations(&mut self, page: Page<Organization>) {
        self.total_organizations = page.total_elements;
        self.organizations = page.content;
        self.loaded = true;
        if self.organizations.is_empty() {
            self.total_urls = 0;
            self.loading = false;
        }
    }

    /// URL page of the first organization arrived.
    pub fn apply_first_organization_urls(&mut self, page: &Page<ShortUrl>) {
        self.total_urls = page.total_elements;
        self.loading = false;
    }

    /// URL total could not be loaded; the dashboard still renders.
    pub fn skip_urls(&mut self) {
        self.total_urls = 0;
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.organizations.clear();
        self.total_organizations = 0;
        self.total_urls = 0;
        self.loading = false;
    }

    pub fn gate(&self) -> DashboardGate {
        if self.loading || (!self.loaded && self.error.is_none()) {
            return DashboardGate::Loading;
        }
        if let Some(message) = &self.error {
            return DashboardGate::Failed(message.clone());
        }
        if self.organizations.is_empty() {
            return DashboardGate::RequireOrganization;
        }
        DashboardGate::Ready
    }

    pub fn first_organization(&self) -> Option<&Organization> {
        self.organizations.first()
    }

    /// "+N more organizations" caption when more than one is loaded.
    pub fn more_organizations_label(&self) -> Option<String> {
        match self.organizations.len() {
            0 | 1 => None,
            n => Some(format!("+{} more organizations", n - 1)),
        }
    }
}
