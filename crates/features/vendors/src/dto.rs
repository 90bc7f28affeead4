//! Wire shapes of the vendor endpoints.

use crate::model::VendorRecord;
use serde::Deserialize;
use std::fmt;
use utoipa::ToSchema;
use vhub_derive::api_model;

/// Registration payload accepted by the validation middleware.
#[derive(Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterVendorRequest {
    /// Public handle, `[a-z0-9-]`
    #[schema(example = "acme")]
    pub vendor_slug: String,
    #[schema(example = "a@acme.com")]
    pub email: String,
    #[schema(example = "Acme Co")]
    pub fullname: String,
    /// Plaintext; hashed before it reaches the handler
    #[schema(format = Password)]
    pub password: String,
}

impl fmt::Debug for RegisterVendorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterVendorRequest")
            .field("vendor_slug", &self.vendor_slug)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .finish_non_exhaustive()
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Result of a successful registration
pub struct RegisteredVendor {
    /// Slug as stored
    pub vendor_slug: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Public vendor profile
pub struct VendorProfile {
    pub email: String,
    pub fullname: String,
    pub is_premium: bool,
    /// Decimal string form of the numeric id
    #[schema(example = "42")]
    pub vendor_id: String,
    pub vendor_slug: String,
}

impl From<VendorRecord> for VendorProfile {
    fn from(record: VendorRecord) -> Self {
        Self {
            email: record.email,
            fullname: record.fullname,
            is_premium: record.is_premium,
            vendor_id: record.vendor_id.to_string(),
            vendor_slug: record.vendor_slug,
        }
    }
}
