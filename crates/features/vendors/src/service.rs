//! The two vendor operations, independent of HTTP.

use crate::dto::{RegisteredVendor, VendorProfile};
use crate::error::{VendorError, VendorErrorExt};
use crate::model::{AuthenticatedVendor, ValidatedRegistrationInput, VendorRecord};
use crate::repository::VendorRepository;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use vhub_database::DatabaseError;
use vhub_kernel::server::ApiResponse;

pub const VENDOR_REGISTERED: &str = "Vendor registered";
pub const INSERT_FAILED: &str = "Error while inserting vendor.";

#[derive(Deserialize)]
struct InsertedVendor {
    vendor_slug: String,
}

/// Persists a validated registration.
///
/// # Errors
/// * [`VendorError::PreconditionMissing`] when `input` is `None`; the store is not touched.
/// * [`VendorError::Persistence`] when no row comes back or the slug or email is taken.
/// * [`VendorError::Database`] for any other store failure.
#[instrument(skip_all)]
pub async fn register_vendor(
    repository: &VendorRepository,
    input: Option<ValidatedRegistrationInput>,
) -> Result<ApiResponse<RegisteredVendor>, VendorError> {
    let Some(input) = input else {
        return Err(VendorError::PreconditionMissing {
            message: "Validated registration data not found for vendor registration.".into(),
            context: None,
        });
    };

    let result = match repository.insert(&input).await {
        Ok(result) => result,
        Err(DatabaseError::UniqueViolation { constraint, message, .. }) => {
            warn!(
                vendor_slug = %input.vendor_slug,
                constraint = constraint.as_deref().unwrap_or("unknown"),
                %message,
                "Vendor already exists"
            );
            return Err(insert_failed("Unique constraint violated"));
        }
        Err(source) => {
            return Err(VendorError::Database { source, context: Some("Inserting vendor".into()) });
        }
    };

    let Some(row) = result.first().filter(|_| result.row_count != 0) else {
        return Err(insert_failed("No row returned"));
    };
    let inserted: InsertedVendor = row.decode().context("Decoding inserted vendor")?;

    info!(vendor_slug = %inserted.vendor_slug, "Vendor registered");

    Ok(ApiResponse::ok(RegisteredVendor { vendor_slug: inserted.vendor_slug })
        .with_msg(VENDOR_REGISTERED))
}

/// Loads the profile of the calling vendor.
///
/// # Errors
/// * [`VendorError::Unauthenticated`] when no identity was resolved.
/// * [`VendorError::NotFound`] when the id matches no row.
/// * [`VendorError::Database`] for store failures.
#[instrument(skip_all)]
pub async fn get_vendor(
    repository: &VendorRepository,
    identity: Option<&AuthenticatedVendor>,
) -> Result<ApiResponse<VendorProfile>, VendorError> {
    let Some(identity) = identity else {
        return Err(VendorError::Unauthenticated {
            message: "Vendor identity is required".into(),
            context: None,
        });
    };

    let result = repository.find_by_id(identity.vendor_id).await.context("Fetching vendor")?;
    let success = result.row_count != 0 && !result.rows.is_empty();

    let Some(row) = result.first() else {
        return Err(VendorError::NotFound {
            message: "Vendor not found".into(),
            context: Some(format!("vendor_id = {}", identity.vendor_id).into()),
        });
    };
    let record: VendorRecord = row.decode().context("Decoding vendor")?;

    Ok(ApiResponse { success, msg: None, data: VendorProfile::from(record) })
}

fn insert_failed(reason: &'static str) -> VendorError {
    VendorError::Persistence { message: INSERT_FAILED.into(), context: Some(reason.into()) }
}
