//! Pagination conventions shared by every list operation.
//!
//! Requests carry `pageSize`, `reverse` and `pageToken`. Responses carry the
//! page plus a **required** `nextPageToken`: an opaque, forward-only base64
//! cursor. The empty string means there are no further results.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hubspec::patterns;

/// Page size applied when the caller omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Errors produced while interpreting query parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing required parameter {0:?}")]
    Missing(&'static str),

    #[error("invalid value for {name:?}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("pageToken is not a valid page token")]
    PageToken,
}

/// The pagination parameters accepted by list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Maximum number of items to return. Default 100, clamped to 1..=1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Reverse the sort order, returning latest items first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,

    /// The `nextPageToken` of the previous page. Omitted or empty means the
    /// first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PageQuery {
    /// Effective page size, clamped to [1, 1000]. Returns 100 if not specified.
    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .map(|s| s.clamp(1, MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE) as usize
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse.unwrap_or(false)
    }

    /// The decoded cursor, or `None` for the first page.
    pub fn cursor(&self) -> Result<Option<String>, ParamError> {
        match self.page_token.as_deref() {
            None => Ok(None),
            Some(token) => decode_page_token(token),
        }
    }
}

/// Encode a sort key into an opaque page token.
pub fn encode_page_token(key: &str) -> String {
    BASE64.encode(key.as_bytes())
}

/// Decode a page token back into the sort key it was built from.
///
/// An empty token is the first page. A `+` that arrived unescaped in a query
/// string decodes as a space; it is restored before decoding.
pub fn decode_page_token(token: &str) -> Result<Option<String>, ParamError> {
    if token.is_empty() {
        return Ok(None);
    }
    let token = token.replace(' ', "+");
    if !patterns::is_base64(&token) {
        return Err(ParamError::PageToken);
    }
    let bytes = BASE64.decode(token).map_err(|_| ParamError::PageToken)?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|_| ParamError::PageToken)
}

/// A page of messages.
///
/// ```json
/// { "messages": [ { ... } ], "nextPageToken": "NDg5OTQ0NjY6MHhkMmIx..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub messages: Vec<T>,
    /// Cursor for the next page; `""` when this is the last page.
    pub next_page_token: String,
}

impl<T> Paged<T> {
    /// `true` when no further pages exist.
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_empty()
    }
}

/// Response body for `GET /v1/fids`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FidsResponse {
    pub fids: Vec<u64>,
    pub next_page_token: String,
}

/// Cut one page out of an already ordered list.
///
/// `items` must be sorted ascending by `key`. The cursor names the last key
/// the caller has already seen; the page starts strictly after it (strictly
/// before it when `reverse`). Returns the page and its `nextPageToken`.
pub fn paginate<T, K>(
    items: Vec<T>,
    query: &PageQuery,
    key: K,
) -> Result<(Vec<T>, String), ParamError>
where
    K: Fn(&T) -> String,
{
    let cursor = query.cursor()?;
    let size = query.effective_page_size();

    let mut items = items;
    if query.is_reverse() {
        items.reverse();
    }

    let start = match &cursor {
        None => 0,
        Some(c) => items
            .iter()
            .position(|item| {
                let k = key(item);
                if query.is_reverse() {
                    k < *c
                } else {
                    k > *c
                }
            })
            .unwrap_or(items.len()),
    };

    let rest = items.len() - start;
    let page: Vec<T> = items.into_iter().skip(start).take(size).collect();
    let next = if rest > page.len() {
        page.last().map(|last| encode_page_token(&key(last))).unwrap_or_default()
    } else {
        String::new()
    };
    Ok((page, next))
}
