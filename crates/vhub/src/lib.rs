//! Facade crate for Vendor Hub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use vhub_domain as domain;
use vhub_domain::config::ApiConfig;
use vhub_domain::registry::InitializedSlice;
use vhub_database::SharedExecutor;
pub use vhub_kernel as kernel;

pub mod server {
    pub mod router {
        use vhub_kernel::server::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        pub use vhub_kernel::server::router::system_router;

        /// Routes of every feature slice, merged.
        pub fn feature_router(state: &ApiState) -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(crate::features::vendors::routes::router(state))
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use vhub_vendors as vendors;

    pub const ENABLED: &[&str] = &[vendors::Vendors::NAME];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &SharedExecutor,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::vendors::init(config, database)?];

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vhub_database::testing::ScriptedExecutor;

    #[test]
    fn every_enabled_feature_is_initialized() {
        let executor: SharedExecutor = Arc::new(ScriptedExecutor::new());
        let slices = init(&ApiConfig::default(), &executor).unwrap();

        let names: Vec<_> = slices.iter().map(|slice| slice.name).collect();
        assert_eq!(names, features::ENABLED);
        assert!(features::is_enabled("vendors"));
        assert!(!features::is_enabled("licensing"));
    }
}
