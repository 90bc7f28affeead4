//! SQL issued by the vendor slice.

use crate::model::ValidatedRegistrationInput;
use tracing::instrument;
use vhub_database::{DatabaseError, Query, QueryResult, SharedExecutor};
use vhub_domain::constants::VENDORS_TABLE;

pub const INSERT_VENDOR: &str = "INSERT INTO vendors (vendor_slug, email, fullname, hash_password) \
     VALUES ($1, $2, $3, $4) RETURNING vendor_slug";

/// The credential column is deliberately absent.
pub const SELECT_VENDOR_BY_ID: &str = "SELECT vendor_id, vendor_slug, email, fullname, is_premium \
     FROM vendors WHERE vendor_id = $1";

#[derive(Debug, Clone)]
pub struct VendorRepository {
    executor: SharedExecutor,
}

impl VendorRepository {
    #[must_use]
    pub const fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    /// Inserts one vendor and returns the stored slug as the only column.
    ///
    /// # Errors
    /// Propagates store failures, including [`DatabaseError::UniqueViolation`].
    #[instrument(skip_all, fields(table = VENDORS_TABLE, vendor_slug = %input.vendor_slug))]
    pub async fn insert(&self, input: &ValidatedRegistrationInput) -> Result<QueryResult, DatabaseError> {
        let query = Query::new(INSERT_VENDOR)
            .bind(input.vendor_slug.as_str())
            .bind(input.email.as_str())
            .bind(input.fullname.as_str())
            .bind(input.hash_password.as_str());

        self.executor.query(query).await
    }

    /// # Errors
    /// Propagates store failures.
    #[instrument(skip(self), fields(table = VENDORS_TABLE))]
    pub async fn find_by_id(&self, vendor_id: i64) -> Result<QueryResult, DatabaseError> {
        self.executor.query(Query::new(SELECT_VENDOR_BY_ID).bind(vendor_id)).await
    }
}
