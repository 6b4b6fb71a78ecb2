//! The uniform error envelope every operation may return.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The JSON body returned for all error responses.
///
/// ```json
/// {
///   "errCode": "not_found",
///   "presentable": true,
///   "name": "HubError",
///   "code": 5,
///   "details": "cast not found",
///   "metadata": { "errcode": ["not_found"] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code, see [`HubErrorCode`].
    pub err_code: String,
    /// Whether `details` is safe to show to an end user.
    pub presentable: bool,
    pub name: String,
    /// Numeric status (gRPC numbering).
    pub code: i32,
    /// Human-readable description of the problem.
    pub details: String,
    pub metadata: ErrorMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMetadata {
    pub errcode: Vec<String>,
}

impl ErrorResponse {
    /// The `name` every hub error carries.
    pub const NAME: &'static str = "HubError";

    /// Construct an [`ErrorResponse`] from a code and a message.
    pub fn new(code: HubErrorCode, details: impl Into<String>) -> Self {
        Self {
            err_code: code.as_str().to_string(),
            presentable: code.presentable(),
            name: Self::NAME.to_string(),
            code: code.grpc_code(),
            details: details.into(),
            metadata: ErrorMetadata {
                errcode: vec![code.as_str().to_string()],
            },
        }
    }

    /// The parsed error code, if it is one this crate knows.
    pub fn hub_code(&self) -> Option<HubErrorCode> {
        self.err_code.parse().ok()
    }
}

/// Known `errCode` values.
///
/// | `errCode` | HTTP status | `code` |
/// |-----------|-------------|--------|
/// | `unauthenticated` | 401 | 16 |
/// | `unauthorized` | 403 | 7 |
/// | `bad_request` | 400 | 3 |
/// | `bad_request.parse_failure` | 400 | 3 |
/// | `bad_request.invalid_param` | 400 | 3 |
/// | `bad_request.validation_failure` | 400 | 3 |
/// | `bad_request.duplicate` | 400 | 6 |
/// | `not_found` | 404 | 5 |
/// | `not_implemented` | 501 | 12 |
/// | `unavailable` | 503 | 14 |
/// | `unknown` | 500 | 2 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubErrorCode {
    Unauthenticated,
    Unauthorized,
    BadRequest,
    ParseFailure,
    InvalidParam,
    ValidationFailure,
    Duplicate,
    NotFound,
    NotImplemented,
    Unavailable,
    Unknown,
}

impl HubErrorCode {
    pub const ALL: &'static [HubErrorCode] = &[
        HubErrorCode::Unauthenticated,
        HubErrorCode::Unauthorized,
        HubErrorCode::BadRequest,
        HubErrorCode::ParseFailure,
        HubErrorCode::InvalidParam,
        HubErrorCode::ValidationFailure,
        HubErrorCode::Duplicate,
        HubErrorCode::NotFound,
        HubErrorCode::NotImplemented,
        HubErrorCode::Unavailable,
        HubErrorCode::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HubErrorCode::Unauthenticated => "unauthenticated",
            HubErrorCode::Unauthorized => "unauthorized",
            HubErrorCode::BadRequest => "bad_request",
            HubErrorCode::ParseFailure => "bad_request.parse_failure",
            HubErrorCode::InvalidParam => "bad_request.invalid_param",
            HubErrorCode::ValidationFailure => "bad_request.validation_failure",
            HubErrorCode::Duplicate => "bad_request.duplicate",
            HubErrorCode::NotFound => "not_found",
            HubErrorCode::NotImplemented => "not_implemented",
            HubErrorCode::Unavailable => "unavailable",
            HubErrorCode::Unknown => "unknown",
        }
    }

    pub const fn http_status(self) -> u16 {
        match self {
            HubErrorCode::Unauthenticated => 401,
            HubErrorCode::Unauthorized => 403,
            HubErrorCode::BadRequest
            | HubErrorCode::ParseFailure
            | HubErrorCode::InvalidParam
            | HubErrorCode::ValidationFailure
            | HubErrorCode::Duplicate => 400,
            HubErrorCode::NotFound => 404,
            HubErrorCode::NotImplemented => 501,
            HubErrorCode::Unavailable => 503,
            HubErrorCode::Unknown => 500,
        }
    }

    pub const fn grpc_code(self) -> i32 {
        match self {
            HubErrorCode::Unauthenticated => 16,
            HubErrorCode::Unauthorized => 7,
            HubErrorCode::BadRequest
            | HubErrorCode::ParseFailure
            | HubErrorCode::InvalidParam
            | HubErrorCode::ValidationFailure => 3,
            HubErrorCode::Duplicate => 6,
            HubErrorCode::NotFound => 5,
            HubErrorCode::NotImplemented => 12,
            HubErrorCode::Unavailable => 14,
            HubErrorCode::Unknown => 2,
        }
    }

    /// Client errors are presentable; server errors are not.
    pub const fn presentable(self) -> bool {
        self.http_status() < 500
    }
}

impl fmt::Display for HubErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HubErrorCode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown error code {s:?}"))
    }
}
