//! Kernel utilities shared across slices.
//! Keep this crate lightweight: application state, the HTTP error contract, the response
//! envelope and config loading. Business rules belong in the feature crates.
//!
//! ## Config loading
//! ```rust,no_run
//! use vhub_kernel::config::load_config;
//! use vhub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```

// Lets `#[vhub_error]` and `#[vhub_slice]` expansions name `::vhub_kernel` from inside this crate.
extern crate self as vhub_kernel;

pub mod config;
pub mod prelude;
pub mod server;

pub use vhub_domain as domain;
