//! Shared names used in routes, `OpenAPI` tags and storage.

/// `OpenAPI` tag for platform endpoints (health, readiness).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for vendor endpoints.
pub const VENDORS_TAG: &str = "Vendors";

/// Relational table holding vendor rows.
pub const VENDORS_TABLE: &str = "vendors";

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "VHUB";
