//! Registration payload checks and the middleware that runs them.
//!
//! The middleware parses the JSON body, normalizes and checks every field, hashes the
//! password off the async runtime, then forwards the request with an empty body and a
//! [`ValidatedRegistrationInput`] in its extensions.

use crate::Vendors;
use crate::dto::RegisterVendorRequest;
use crate::error::VendorError;
use crate::model::ValidatedRegistrationInput;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::LengthLimitError;
use std::borrow::Cow;
use std::error::Error as _;
use tracing::debug;
use vhub_domain::config::RegistrationConfig;
use vhub_kernel::server::{ApiError, ApiState};

const MAX_BODY_BYTES: usize = 64 * 1024;
const MIN_SLUG_LENGTH: usize = 3;

/// Limits applied to registration payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRules {
    pub min_password_length: usize,
    pub max_slug_length: usize,
    pub max_fullname_length: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self::from(&RegistrationConfig::default())
    }
}

impl From<&RegistrationConfig> for RegistrationRules {
    fn from(config: &RegistrationConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
            max_slug_length: config.max_slug_length,
            max_fullname_length: config.max_fullname_length,
        }
    }
}

impl RegistrationRules {
    /// Rejects limits that no payload could satisfy.
    ///
    /// # Errors
    /// Returns [`VendorError::Internal`] naming the offending setting.
    pub fn ensure_consistent(&self) -> Result<(), VendorError> {
        if self.max_slug_length < MIN_SLUG_LENGTH {
            return Err(VendorError::Internal {
                message: format!("max_slug_length must be at least {MIN_SLUG_LENGTH}").into(),
                context: Some("security.registration".into()),
            });
        }
        if self.max_fullname_length == 0 || self.min_password_length == 0 {
            return Err(VendorError::Internal {
                message: "registration limits must be greater than zero".into(),
                context: Some("security.registration".into()),
            });
        }
        Ok(())
    }

    /// Normalizes the payload and checks it against the limits.
    ///
    /// Slug and email are trimmed and lowercased, the full name is trimmed, the password
    /// is left untouched.
    ///
    /// # Errors
    /// Returns [`VendorError::Validation`] describing the first offending field.
    pub fn normalize(&self, request: RegisterVendorRequest) -> Result<RegisterVendorRequest, VendorError> {
        let vendor_slug = request.vendor_slug.trim().to_lowercase();
        let email = request.email.trim().to_lowercase();
        let fullname = request.fullname.trim().to_owned();

        self.check_slug(&vendor_slug)?;
        check_email(&email)?;

        let fullname_length = fullname.chars().count();
        if fullname_length == 0 || fullname_length > self.max_fullname_length {
            return Err(invalid(format!(
                "fullname must be between 1 and {} characters",
                self.max_fullname_length
            )));
        }
        if request.password.chars().count() < self.min_password_length {
            return Err(invalid(format!(
                "password must be at least {} characters",
                self.min_password_length
            )));
        }

        Ok(RegisterVendorRequest { vendor_slug, email, fullname, password: request.password })
    }

    /// Normalizes, checks and hashes a registration payload.
    ///
    /// # Errors
    /// [`VendorError::Validation`] for invalid fields, [`VendorError::Internal`] when
    /// hashing fails.
    pub async fn validate(
        &self,
        request: RegisterVendorRequest,
    ) -> Result<ValidatedRegistrationInput, VendorError> {
        let RegisterVendorRequest { vendor_slug, email, fullname, password } = self.normalize(request)?;
        let hash_password = hash_password(password).await?;

        Ok(ValidatedRegistrationInput { vendor_slug, email, fullname, hash_password })
    }

    fn check_slug(&self, slug: &str) -> Result<(), VendorError> {
        let length = slug.chars().count();
        if !(MIN_SLUG_LENGTH..=self.max_slug_length).contains(&length) {
            return Err(invalid(format!(
                "vendorSlug must be between {MIN_SLUG_LENGTH} and {} characters",
                self.max_slug_length
            )));
        }
        if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(invalid("vendorSlug may only contain a-z, 0-9 and '-'"));
        }
        if slug.starts_with('-') || slug.ends_with('-') {
            return Err(invalid("vendorSlug must not start or end with '-'"));
        }
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), VendorError> {
    let valid = !email.contains(char::is_whitespace)
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        });

    if valid { Ok(()) } else { Err(invalid("email is not a valid address")) }
}

fn invalid(message: impl Into<Cow<'static, str>>) -> VendorError {
    VendorError::Validation { message: message.into(), context: None }
}

/// Hashes `password` with Argon2id on the blocking pool and returns the PHC string.
///
/// # Errors
/// Returns [`VendorError::Internal`] if hashing fails or the blocking task panics.
pub async fn hash_password(password: String) -> Result<String, VendorError> {
    let hashed = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default().hash_password(password.as_bytes(), &salt).map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| VendorError::Internal {
        message: "Password hashing task failed".into(),
        context: Some(e.to_string().into()),
    })?;

    hashed.map_err(|e| VendorError::Internal {
        message: "Password hashing failed".into(),
        context: Some(e.to_string().into()),
    })
}

fn unreadable_body(error: axum::Error) -> VendorError {
    if error.source().is_some_and(|source| source.is::<LengthLimitError>()) {
        return VendorError::PayloadTooLarge {
            message: format!("Request body exceeds {MAX_BODY_BYTES} bytes").into(),
            context: None,
        };
    }
    VendorError::Validation {
        message: "Request body could not be read".into(),
        context: Some(error.to_string().into()),
    }
}

/// Middleware guarding the registration route.
///
/// # Errors
/// Responds with 413 when the body exceeds the size limit, and with 400 when it is
/// unreadable, malformed or invalid.
pub async fn validate_registration(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rules = state.try_get_slice::<Vendors>()?.rules.clone();

    let (mut parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(unreadable_body)?;
    let payload: RegisterVendorRequest = serde_json::from_slice(&bytes)
        .map_err(|e| invalid(format!("Malformed registration payload: {e}")))?;

    let input = rules.validate(payload).await?;
    debug!(vendor_slug = %input.vendor_slug, "Registration payload validated");

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.extensions.insert(input);

    Ok(next.run(Request::from_parts(parts, Body::empty())).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slug: &str, email: &str, fullname: &str, password: &str) -> RegisterVendorRequest {
        RegisterVendorRequest {
            vendor_slug: slug.to_owned(),
            email: email.to_owned(),
            fullname: fullname.to_owned(),
            password: password.to_owned(),
        }
    }

    fn rejects(rules: &RegistrationRules, request: RegisterVendorRequest) -> bool {
        matches!(rules.normalize(request), Err(VendorError::Validation { .. }))
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let normalized = RegistrationRules::default()
            .normalize(request("  Acme ", " A@Acme.COM ", "  Acme Co  ", " secret pw "))
            .unwrap();

        assert_eq!(normalized.vendor_slug, "acme");
        assert_eq!(normalized.email, "a@acme.com");
        assert_eq!(normalized.fullname, "Acme Co");
        assert_eq!(normalized.password, " secret pw ");
    }

    #[test]
    fn slug_rules() {
        let rules = RegistrationRules { max_slug_length: 8, ..RegistrationRules::default() };
        assert!(!rejects(&rules, request("acme-co", "a@acme.com", "Acme", "password")));
        assert!(rejects(&rules, request("ab", "a@acme.com", "Acme", "password")));
        assert!(rejects(&rules, request("acme-corp", "a@acme.com", "Acme", "password")));
        assert!(rejects(&rules, request("acme_co", "a@acme.com", "Acme", "password")));
        assert!(rejects(&rules, request("-acme", "a@acme.com", "Acme", "password")));
        assert!(rejects(&rules, request("acme-", "a@acme.com", "Acme", "password")));
    }

    #[test]
    fn email_rules() {
        let rules = RegistrationRules::default();
        for email in [
            "acme.com",
            "@acme.com",
            "a@acme",
            "a@b@acme.com",
            "   ",
            "a b@acme.com",
            "a@acme .com",
            "a@.",
            "a@acme.",
            "a@.com",
            "a@acme..com",
        ] {
            assert!(rejects(&rules, request("acme", email, "Acme", "password")), "{email}");
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        let rules = RegistrationRules::default();
        for email in ["a@acme.com", "sales.team@eu.acme.co", "x+tag@acme-corp.io"] {
            assert!(!rejects(&rules, request("acme", email, "Acme", "password")), "{email}");
        }
    }

    #[test]
    fn fullname_and_password_rules() {
        let rules = RegistrationRules { max_fullname_length: 4, ..RegistrationRules::default() };
        assert!(rejects(&rules, request("acme", "a@acme.com", "   ", "password")));
        assert!(rejects(&rules, request("acme", "a@acme.com", "Acme Co", "password")));
        assert!(rejects(&rules, request("acme", "a@acme.com", "Acme", "short")));
    }

    #[test]
    fn inconsistent_limits_are_reported() {
        let rules = RegistrationRules { max_slug_length: 2, ..RegistrationRules::default() };
        assert!(matches!(rules.ensure_consistent(), Err(VendorError::Internal { .. })));
        assert!(RegistrationRules::default().ensure_consistent().is_ok());
    }

    #[tokio::test]
    async fn validate_hashes_the_password() {
        let input = RegistrationRules::default()
            .validate(request("acme", "a@acme.com", "Acme Co", "correct horse"))
            .await
            .unwrap();

        assert!(input.hash_password.starts_with("$argon2id$"));
        assert!(!input.hash_password.contains("correct horse"));
    }
}
