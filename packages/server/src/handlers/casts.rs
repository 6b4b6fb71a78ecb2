//! Cast lookups: by id, by author, by mention and by parent.

use axum::{extract::State, Json};
use hubspec::{Message, MessageType};
use hubspec_api::{CastByIdQuery, CastsByParentQuery, FidPageQuery, Paged, Parent};

use super::{page_of, AppState, HubQuery};
use crate::{error::AppError, storage::MessageFilter};

/// `GET /v1/castById`
pub async fn cast_by_id(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<CastByIdQuery>,
) -> Result<Json<Message>, AppError> {
    let id = query.cast_id()?;
    state
        .storage
        .get_message(id.fid, &id.hash)
        .await?
        .filter(|m| m.message_type() == MessageType::CastAdd)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("cast {}:{} not found", id.fid, id.hash)))
}

/// `GET /v1/castsByFid`
pub async fn casts_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<FidPageQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter::by_fid(MessageType::CastAdd, query.fid);
    let casts = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(casts, &query.page())?))
}

/// `GET /v1/castsByMention`
pub async fn casts_by_mention(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<FidPageQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        mention: Some(query.fid),
        ..MessageFilter::of_type(MessageType::CastAdd)
    };
    let casts = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(casts, &query.page())?))
}

/// `GET /v1/castsByParent`
pub async fn casts_by_parent(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<CastsByParentQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let mut filter = MessageFilter::of_type(MessageType::CastAdd);
    match query.parent()? {
        Parent::Cast(id) => filter.parent_cast = Some(id),
        Parent::Url(url) => filter.parent_url = Some(url),
    }
    let casts = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(casts, &query.page())?))
}
