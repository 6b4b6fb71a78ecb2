//! Link lookups.

use axum::{extract::State, Json};
use hubspec::{Message, MessageType};
use hubspec_api::{LinkByIdQuery, LinksByFidQuery, LinksByTargetFidQuery, Paged};

use super::{page_of, AppState, HubQuery};
use crate::{error::AppError, storage::MessageFilter};

/// `GET /v1/linkById`
pub async fn link_by_id(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<LinkByIdQuery>,
) -> Result<Json<Message>, AppError> {
    let filter = MessageFilter {
        link_type: Some(query.link_type()?),
        target_fid: Some(query.target_fid),
        ..MessageFilter::by_fid(MessageType::LinkAdd, query.fid)
    };
    state
        .storage
        .list_messages(&filter)
        .await?
        .pop()
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "link {} -> {} not found",
                query.fid, query.target_fid
            ))
        })
}

/// `GET /v1/linksByFid`
pub async fn links_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<LinksByFidQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        link_type: query.link_type()?,
        ..MessageFilter::by_fid(MessageType::LinkAdd, query.fid)
    };
    let links = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(links, &query.page())?))
}

/// `GET /v1/linksByTargetFid`
pub async fn links_by_target_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<LinksByTargetFidQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        link_type: query.link_type()?,
        target_fid: Some(query.target_fid),
        ..MessageFilter::of_type(MessageType::LinkAdd)
    };
    let links = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(links, &query.page())?))
}
