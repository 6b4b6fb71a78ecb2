//! API-key authentication for secured hub routes.
//!
//! Every operation flagged `secured` in the route catalog requires the
//! `x-airstack-hubs` header. When the server is configured with a key list the
//! value must be one of those keys; otherwise any non-empty value passes.
//!
//! Failures return HTTP 401 with errCode `unauthenticated`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method as HttpMethod},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hubspec_api::{HubErrorCode, Method, Operation, API_KEY_HEADER};

use crate::{error::error_response, handlers::AppState};

// ---------------------------------------------------------------------------
// Auth errors
// ---------------------------------------------------------------------------

/// An authentication failure that maps to HTTP 401.
#[derive(Debug)]
pub struct AuthError(pub String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        error_response(HubErrorCode::Unauthenticated, self.0)
    }
}

// ---------------------------------------------------------------------------
// Key check
// ---------------------------------------------------------------------------

/// Check the API key header against the accepted keys.
///
/// An empty `accepted` list admits any non-empty key.
pub fn check_api_key(headers: &HeaderMap, accepted: &[String]) -> Result<(), AuthError> {
    let key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AuthError(format!("missing {API_KEY_HEADER} header")))?;

    if accepted.is_empty() || accepted.iter().any(|k| k == key) {
        Ok(())
    } else {
        Err(AuthError("API key is not recognised".into()))
    }
}

fn catalog_method(method: &HttpMethod) -> Option<Method> {
    match *method {
        HttpMethod::GET => Some(Method::Get),
        HttpMethod::POST => Some(Method::Post),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Middleware function
// ---------------------------------------------------------------------------

/// Axum `from_fn_with_state` middleware guarding the catalog's secured routes.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let secured = catalog_method(req.method())
        .and_then(|m| Operation::find_by_path(m, req.uri().path()))
        .is_some_and(|op| op.secured);

    if secured {
        if let Err(e) = check_api_key(req.headers(), &state.config.api_keys) {
            tracing::debug!(path = %req.uri().path(), "rejected: {}", e.0);
            return e.into_response();
        }
    }
    next.run(req).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
