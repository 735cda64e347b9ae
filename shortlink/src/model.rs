//! Backend resource shapes and request payloads.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Everything the backend may
//! omit is `Option` or `#[serde(default)]` so a sparse response still decodes;
//! views decide how to render the gaps.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as recorded in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// "First Last", falling back to the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// Client-held record of an authenticated user and their bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl Session {
    /// Value for the `Authorization` header on authenticated calls.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// `data` payload of a successful `POST /api/auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

impl From<SignInResponse> for Session {
    fn from(value: SignInResponse) -> Self {
        Self {
            token: value.token,
            user: User {
                id: value.id,
                first_name: value.first_name,
                last_name: value.last_name,
                email: value.email,
            },
            organizations: Vec::new(),
        }
    }
}

/// A tenant that owns short URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub url_count: u64,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// A short code mapped to an original URL, with metadata and click count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    #[serde(default)]
    pub short_url: String,
    #[serde(default, alias = "customShortCode")]
    pub short_code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
}

/// Body of `POST /api/organizations` and `PUT /api/organizations/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/urls`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    pub organization_id: i64,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_short_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expires_at: Option<String>,
}

/// Body of `PUT /api/urls/{id}`.
///
/// The backend validates updates with the create schema, so the owning
/// organization travels along with the edited fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateUrlRequest {
    /// Build an update that keeps `url`'s organization and description.
    #[must_use]
    pub fn edit(url: &ShortUrl, title: &str, original_url: &str) -> Self {
        let title = title.trim();
        Self {
            organization_id: url.organization_id,
            original_url: original_url.trim().to_owned(),
            title: (!title.is_empty()).then(|| title.to_owned()),
            description: url.description.clone(),
        }
    }
}

/// Render a backend `LocalDateTime` (`2024-05-01T10:00:00`) as its date part.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.split('T').next().unwrap_or(s).to_owned(),
        None => "Unknown".to_owned(),
    }
}
