pub use crate::server::error::{ApiError, HttpError, StatusCode};
pub use crate::server::response::ApiResponse;
pub use crate::server::state::{ApiState, ApiStateError};
pub use vhub_database::SharedExecutor;
