//! Request-scoped values and the stored vendor row.

use serde::Deserialize;
use std::fmt;

/// Registration data that passed validation, with the password already hashed.
///
/// Placed in request extensions by the validation middleware and consumed by the
/// registration handler.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedRegistrationInput {
    pub vendor_slug: String,
    pub email: String,
    pub fullname: String,
    /// Argon2 PHC string.
    pub hash_password: String,
}

impl fmt::Debug for ValidatedRegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRegistrationInput")
            .field("vendor_slug", &self.vendor_slug)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("hash_password", &"<redacted>")
            .finish()
    }
}

/// Identity of the calling vendor, resolved by an upstream authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedVendor {
    pub vendor_id: i64,
}

/// Projection of a `vendors` row without the credential column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VendorRecord {
    pub vendor_id: i64,
    pub vendor_slug: String,
    pub email: String,
    pub fullname: String,
    pub is_premium: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_hash() {
        let input = ValidatedRegistrationInput {
            vendor_slug: "acme".to_owned(),
            email: "a@acme.com".to_owned(),
            fullname: "Acme Co".to_owned(),
            hash_password: "$argon2id$v=19$secret".to_owned(),
        };

        let printed = format!("{input:?}");
        assert!(printed.contains("acme"));
        assert!(!printed.contains("secret"));
    }
}
