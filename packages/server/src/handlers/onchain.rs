//! On-chain event lookups.

use axum::{extract::State, Json};
use hubspec::{OnChainEvent, OnChainEventType};
use hubspec_api::{
    AddressQuery, OnChainEventsQuery, OnChainEventsResponse, OnChainSignersQuery, SignersResponse,
};

use super::{AppState, HubQuery};
use crate::error::AppError;

/// `GET /v1/onChainIdRegistryEventByAddress`
pub async fn id_registry_event_by_address(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<AddressQuery>,
) -> Result<Json<OnChainEvent>, AppError> {
    let address = query.address()?;
    state
        .storage
        .id_register_by_address(&address)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no id registration for {address}")))
}

/// `GET /v1/onChainEventsByFid`
pub async fn on_chain_events_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<OnChainEventsQuery>,
) -> Result<Json<OnChainEventsResponse>, AppError> {
    let event_type = query.event_type()?;
    let events = state
        .storage
        .list_on_chain_events(query.fid, Some(event_type))
        .await?;
    Ok(Json(OnChainEventsResponse { events }))
}

/// `GET /v1/onChainSignersByFid`
///
/// A single signer event when `signer` is given, the full list otherwise.
pub async fn on_chain_signers_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<OnChainSignersQuery>,
) -> Result<Json<SignersResponse>, AppError> {
    let events = state
        .storage
        .list_on_chain_events(query.fid, Some(OnChainEventType::Signer))
        .await?;

    match &query.signer {
        None => Ok(Json(SignersResponse::List(OnChainEventsResponse { events }))),
        Some(signer) => events
            .into_iter()
            .rev()
            .find(|e| e.as_signer().is_some_and(|s| s.key.eq_ignore_ascii_case(signer)))
            .map(|e| Json(SignersResponse::Single(Box::new(e))))
            .ok_or_else(|| {
                AppError::NotFound(format!("signer {signer} not found for fid {}", query.fid))
            }),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handlers::test_support::{app, get};
    use crate::storage::fixtures::{signer_hex, CUSTODY_ADDRESS, PRIMARY_FID};

    #[tokio::test]
    async fn id_registration_by_custody_address() {
        let uri = format!("/v1/onChainIdRegistryEventByAddress?address={CUSTODY_ADDRESS}");
        let (status, body) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "EVENT_TYPE_ID_REGISTER");
        assert_eq!(body["fid"], PRIMARY_FID);

        let uri = "/v1/onChainIdRegistryEventByAddress?address=0x1111111111111111111111111111111111111111";
        let (status, _) = get(app().await, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn events_filter_by_type() {
        let uri = format!("/v1/onChainEventsByFid?fid={PRIMARY_FID}&event_type=EVENT_TYPE_STORAGE_RENT");
        let (_, body) = get(app().await, &uri).await;
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e["type"] == "EVENT_TYPE_STORAGE_RENT"));

        let uri = format!("/v1/onChainEventsByFid?fid={PRIMARY_FID}&event_type=99");
        let (status, _) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signers_shape_follows_filter() {
        let uri = format!("/v1/onChainSignersByFid?fid={PRIMARY_FID}");
        let (_, body) = get(app().await, &uri).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 1);

        let uri = format!("/v1/onChainSignersByFid?fid={PRIMARY_FID}&signer={}", signer_hex());
        let (status, body) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["signerEventBody"]["key"], signer_hex());

        let uri = format!("/v1/onChainSignersByFid?fid={PRIMARY_FID}&signer=0xabcd");
        let (status, _) = get(app().await, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
