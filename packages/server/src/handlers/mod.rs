//! HTTP request handlers for the docs server and the mock hub.
//!
//! Each submodule covers one tag of the route catalog. Handlers are async
//! functions that receive Axum extractors and return
//! `Result<impl IntoResponse, AppError>`.

pub mod casts;
pub mod docs;
pub mod events;
pub mod info;
pub mod links;
pub mod onchain;
pub mod reactions;
pub mod submit;
pub mod users;

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use hubspec::Message;
use hubspec_api::{paginate, PageQuery, Paged};
use serde::de::DeserializeOwned;

use crate::{
    config::ServerConfig,
    error::AppError,
    storage::{message_key, Storage},
};

use docs::ApiDocs;

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: ServerConfig,
    /// The OpenAPI document, rendered once at startup.
    pub docs: Arc<ApiDocs>,
}

// ---------------------------------------------------------------------------
// HubQuery extractor
// ---------------------------------------------------------------------------

/// Query-string extractor whose rejection is the hub's
/// `bad_request.invalid_param` envelope instead of Axum's plain-text 400.
pub struct HubQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for HubQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            Query::<T>::from_request_parts(parts, state)
                .await
                .map(|Query(value)| HubQuery(value))
                .map_err(|rejection| AppError::InvalidParam(rejection.body_text()))
        }
    }
}

/// Cut one page out of messages already in `(timestamp, hash)` order.
pub(crate) fn page_of(messages: Vec<Message>, query: &PageQuery) -> Result<Paged<Message>, AppError> {
    let (messages, next_page_token) = paginate(messages, query, message_key)?;
    Ok(Paged {
        messages,
        next_page_token,
    })
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
