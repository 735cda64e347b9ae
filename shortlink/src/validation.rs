//! Client-side form checks, run before any request is sent.
//!
//! DESIGN
//! ======
//! Each form has exactly one validation path here, shared by the modal and
//! the full-page variants of the form, and by the CLI. Failures come back as
//! [`ApiError::Validation`] so views render them like any other error.
//! Length limits mirror the backend's request constraints.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use url::Url;

use crate::error::ApiError;
use crate::model::{CreateOrganizationRequest, CreateUrlRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_ORGANIZATION_NAME_LEN: usize = 100;
pub const MAX_SHORT_NAME_LEN: usize = 50;
pub const MAX_SHORT_CODE_LEN: usize = 50;
pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Validate the login form, returning trimmed `(email, password)`.
///
/// # Errors
///
/// Fails when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), ApiError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Raw sign-up form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Trimmed, checked sign-up fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Fails on blank fields, a malformed email, a short password, or a
    /// confirmation mismatch, in that order.
    pub fn validate(&self) -> Result<SignupFields, ApiError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Please fill in all fields"));
        }
        if !looks_like_email(email) {
            return Err(ApiError::validation("Please enter a valid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(SignupFields {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Raw organization form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationForm {
    pub name: String,
    pub short_name: String,
    pub description: String,
}

impl OrganizationForm {
    /// # Errors
    ///
    /// Fails on a blank or overlong name, or a short name that cannot appear
    /// in a redirect path.
    pub fn validate(&self) -> Result<CreateOrganizationRequest, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Organization name is required"));
        }
        if name.chars().count() > MAX_ORGANIZATION_NAME_LEN {
            return Err(ApiError::validation(format!(
                "Organization name must be at most {MAX_ORGANIZATION_NAME_LEN} characters"
            )));
        }
        let short_name = self.short_name.trim();
        if short_name.chars().count() > MAX_SHORT_NAME_LEN {
            return Err(ApiError::validation(format!(
                "Short name must be at most {MAX_SHORT_NAME_LEN} characters"
            )));
        }
        if !short_name.chars().all(is_slug_char) {
            return Err(ApiError::validation(
                "Short name may only contain letters, digits, '-' and '_'",
            ));
        }
        Ok(CreateOrganizationRequest {
            name: name.to_owned(),
            short_name: non_empty(short_name),
            description: non_empty(self.description.trim()),
        })
    }
}

/// Raw short-URL form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlForm {
    pub organization_id: Option<i64>,
    pub original_url: String,
    pub custom_short_code: String,
    pub title: String,
    pub description: String,
    /// `datetime-local` value (`2024-05-01T10:00`), empty for no expiry.
    pub expires_at: String,
}

impl UrlForm {
    /// # Errors
    ///
    /// Fails when no organization is selected, the URL is missing or not
    /// http(s), the custom code has unsupported characters, or a text field
    /// exceeds its limit.
    pub fn validate(&self) -> Result<CreateUrlRequest, ApiError> {
        let Some(organization_id) = self.organization_id else {
            return Err(ApiError::validation("Select an organization first"));
        };
        let original_url = validate_original_url(&self.original_url)?;
        let code = self.custom_short_code.trim();
        if code.chars().count() > MAX_SHORT_CODE_LEN {
            return Err(ApiError::validation(format!(
                "Custom short code must be less than {MAX_SHORT_CODE_LEN} characters"
            )));
        }
        if !code.chars().all(is_slug_char) {
            return Err(ApiError::validation(
                "Custom short code may only contain letters, digits, '-' and '_'",
            ));
        }
        let title = validate_title(&self.title)?;
        let description = self.description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ApiError::validation(format!(
                "Description must be less than {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        Ok(CreateUrlRequest {
            organization_id,
            original_url,
            custom_short_code: non_empty(code),
            title,
            description: non_empty(description),
            expires_at: non_empty(self.expires_at.trim()),
        })
    }
}

/// Validate the inline edit of an existing short URL.
///
/// # Errors
///
/// Same URL and title rules as [`UrlForm::validate`].
pub fn validate_url_edit(title: &str, original_url: &str) -> Result<(String, String), ApiError> {
    let original_url = validate_original_url(original_url)?;
    let title = validate_title(title)?.unwrap_or_default();
    Ok((title, original_url))
}

fn validate_original_url(raw: &str) -> Result<String, ApiError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ApiError::validation("Original URL is required"));
    }
    if url.chars().any(char::is_whitespace) || parse_http_url(url).is_none() {
        return Err(ApiError::validation("Invalid URL format"));
    }
    Ok(url.to_owned())
}

/// Parse `raw` as an absolute `http`/`https` URL with a host.
#[must_use]
pub fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    (matches!(url.scheme(), "http" | "https") && has_host).then_some(url)
}

fn validate_title(raw: &str) -> Result<Option<String>, ApiError> {
    let title = raw.trim();
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::validation(format!("Title must be less than {MAX_TITLE_LEN} characters")));
    }
    Ok(non_empty(title))
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_owned())
}
