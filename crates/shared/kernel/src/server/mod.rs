//! HTTP plumbing shared by every slice.

pub mod error;
mod health;
pub mod response;
pub mod router;
pub mod state;

pub use error::{ApiError, HttpError, StatusCode};
pub use response::ApiResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
