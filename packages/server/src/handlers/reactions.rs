//! Reaction lookups.

use axum::{extract::State, Json};
use hubspec::{Message, MessageType};
use hubspec_api::{
    Paged, ReactionByIdQuery, ReactionsByCastQuery, ReactionsByFidQuery, ReactionsByTargetQuery,
};

use super::{page_of, AppState, HubQuery};
use crate::{error::AppError, storage::MessageFilter};

fn reactions() -> MessageFilter {
    MessageFilter::of_type(MessageType::ReactionAdd)
}

/// `GET /v1/reactionById`
pub async fn reaction_by_id(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<ReactionByIdQuery>,
) -> Result<Json<Message>, AppError> {
    let filter = MessageFilter {
        fid: Some(query.fid),
        reaction_type: Some(query.reaction_type()?),
        target_cast: Some(query.target()?),
        ..reactions()
    };
    // The latest reaction wins if the store holds more than one.
    state
        .storage
        .list_messages(&filter)
        .await?
        .pop()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("reaction not found".into()))
}

/// `GET /v1/reactionsByCast`
pub async fn reactions_by_cast(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<ReactionsByCastQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        reaction_type: Some(query.reaction_type()?),
        target_cast: Some(query.target()?),
        ..reactions()
    };
    let found = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(found, &query.page())?))
}

/// `GET /v1/reactionsByFid`
pub async fn reactions_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<ReactionsByFidQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        fid: Some(query.fid),
        reaction_type: Some(query.reaction_type()?),
        ..reactions()
    };
    let found = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(found, &query.page())?))
}

/// `GET /v1/reactionsByTarget`
pub async fn reactions_by_target(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<ReactionsByTargetQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    let filter = MessageFilter {
        reaction_type: Some(query.reaction_type()?),
        target_url: Some(query.url.clone()),
        ..reactions()
    };
    let found = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(found, &query.page())?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handlers::test_support::{app, get};
    use crate::storage::fixtures::{CHANNEL_URL, PRIMARY_FID, ROOT_CAST_HASH, SECONDARY_FID};

    #[tokio::test]
    async fn reaction_by_id_accepts_numeric_type() {
        let uri = format!(
            "/v1/reactionById?fid={PRIMARY_FID}&target_fid={PRIMARY_FID}\
             &target_hash={ROOT_CAST_HASH}&reaction_type=1"
        );
        let (status, body) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reactionBody"]["type"], "REACTION_TYPE_LIKE");

        let uri = format!(
            "/v1/reactionById?fid={PRIMARY_FID}&target_fid={PRIMARY_FID}\
             &target_hash={ROOT_CAST_HASH}&reaction_type=REACTION_TYPE_RECAST"
        );
        let (status, _) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_reaction_type_is_invalid_param() {
        let uri = format!("/v1/reactionsByFid?fid={PRIMARY_FID}&reaction_type=like");
        let (status, body) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.invalid_param");
    }

    #[tokio::test]
    async fn reactions_by_cast_and_target() {
        let uri = format!(
            "/v1/reactionsByCast?target_fid={PRIMARY_FID}&target_hash={ROOT_CAST_HASH}\
             &reaction_type=REACTION_TYPE_RECAST"
        );
        let (_, body) = get(app().await, &uri).await;
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["data"]["fid"], SECONDARY_FID);
        assert_eq!(body["nextPageToken"], "");

        let uri = format!("/v1/reactionsByTarget?url={CHANNEL_URL}&reaction_type=1");
        let (_, body) = get(app().await, &uri).await;
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }
}
