//! Application-level error type returned by handlers.
//!
//! All variants serialise to the hub's [`ErrorResponse`] envelope and map to
//! the HTTP status of their [`HubErrorCode`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hubspec_api::{ErrorResponse, HubErrorCode, ParamError};

use crate::storage::StorageError;

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    InvalidParam(String),
    ParseFailure(String),
    ValidationFailure(String),
    Duplicate(String),
    Unauthenticated(String),
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> HubErrorCode {
        match self {
            AppError::NotFound(_) => HubErrorCode::NotFound,
            AppError::InvalidParam(_) => HubErrorCode::InvalidParam,
            AppError::ParseFailure(_) => HubErrorCode::ParseFailure,
            AppError::ValidationFailure(_) => HubErrorCode::ValidationFailure,
            AppError::Duplicate(_) => HubErrorCode::Duplicate,
            AppError::Unauthenticated(_) => HubErrorCode::Unauthenticated,
            AppError::Internal(_) => HubErrorCode::Unknown,
        }
    }

    fn into_details(self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::InvalidParam(msg)
            | AppError::ParseFailure(msg)
            | AppError::ValidationFailure(msg)
            | AppError::Duplicate(msg)
            | AppError::Unauthenticated(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

/// Render an [`ErrorResponse`] with the status its code maps to.
pub fn error_response(code: HubErrorCode, details: impl Into<String>) -> Response {
    let status =
        StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(code, details))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        if let AppError::Internal(msg) = &self {
            tracing::error!("internal error: {msg}");
        }
        error_response(code, self.into_details())
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
            StorageError::Duplicate(msg) => AppError::Duplicate(msg),
            StorageError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ParamError> for AppError {
    fn from(e: ParamError) -> Self {
        AppError::InvalidParam(e.to_string())
    }
}
