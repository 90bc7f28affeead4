//! Translation of typed slice errors into HTTP responses.
//!
//! Slice errors implement [`HttpError`], normally generated by `#[vhub_error]` from
//! `#[status(...)]` variant attributes. Handlers return `Result<_, ApiError>` and use `?`;
//! the blanket [`From`] impl does the conversion.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{error, warn};
use utoipa::ToSchema;

pub use axum::http::StatusCode;

/// An error that knows how it should be presented over HTTP.
pub trait HttpError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    /// Message safe to show to API clients. Never includes driver details.
    fn public_message(&self) -> Cow<'static, str>;
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    pub msg: String,
}

/// The error half of every handler result.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: Cow<'static, str>,
    /// Full error chain, logged but never sent.
    detail: Option<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self { status, message: message.into(), detail: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E: HttpError> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self {
            status: err.status_code(),
            message: err.public_message(),
            detail: Some(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail.as_deref().unwrap_or(&self.message);
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %detail, "Request failed");
        } else {
            warn!(status = self.status.as_u16(), error = %detail, "Request rejected");
        }

        let body = ErrorBody { success: false, msg: self.message.into_owned() };
        (self.status, Json(body)).into_response()
    }
}
