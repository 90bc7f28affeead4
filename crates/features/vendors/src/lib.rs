//! Vendor feature slice: registration and profile retrieval over a relational store.
//!
//! * [`validation`] checks and hashes registration payloads before the handler runs.
//! * [`service`] holds the two operations; [`routes`] exposes them over HTTP.

pub mod dto;
mod error;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod validation;

pub use crate::error::{VendorError, VendorErrorExt};
use crate::repository::VendorRepository;
use crate::validation::RegistrationRules;
use vhub_database::SharedExecutor;
use vhub_domain::config::ApiConfig;
use vhub_kernel::domain::registry::InitializedSlice;

/// Vendor feature state
#[vhub_derive::vhub_slice]
pub struct Vendors {
    pub repository: VendorRepository,
    pub rules: RegistrationRules,
}

/// Initialize the vendor feature.
///
/// # Errors
/// Returns [`VendorError::Internal`] when the registration limits are inconsistent.
pub fn init(config: &ApiConfig, executor: &SharedExecutor) -> Result<InitializedSlice, VendorError> {
    let rules = RegistrationRules::from(&config.security.registration);
    rules.ensure_consistent()?;

    let slice = Vendors::new(VendorsInner {
        repository: VendorRepository::new(executor.clone()),
        rules,
    });
    tracing::info!(slice = Vendors::NAME, "Vendors server slice initialized");

    Ok(InitializedSlice::new(slice))
}
