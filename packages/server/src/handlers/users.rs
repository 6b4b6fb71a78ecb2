//! User data, fids, storage limits, usernames and verifications.

use axum::{extract::State, Json};
use hubspec::{patterns, Message, MessageType, OnChainEventType, UserNameProof};
use hubspec_api::{
    paginate, FidQuery, FidsResponse, PageQuery, Paged, StorageLimitsResponse, UserDataQuery,
    UserDataResponse, UsernameProofQuery, UsernameProofsResponse, VerificationsQuery,
};

use super::{page_of, AppState, HubQuery};
use crate::{error::AppError, storage::MessageFilter};

/// `GET /v1/userDataByFid`
///
/// A single message when `user_data_type` is given, a page otherwise.
pub async fn user_data_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<UserDataQuery>,
) -> Result<Json<UserDataResponse>, AppError> {
    let filter = MessageFilter {
        user_data_type: query.user_data_type()?,
        ..MessageFilter::by_fid(MessageType::UserDataAdd, query.fid)
    };
    let mut found = state.storage.list_messages(&filter).await?;

    if let Some(user_data_type) = filter.user_data_type {
        return found
            .pop()
            .map(|m| Json(UserDataResponse::Single(Box::new(m))))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{user_data_type} not set for fid {}",
                    query.fid
                ))
            });
    }
    Ok(Json(UserDataResponse::Page(page_of(found, &query.page())?)))
}

/// `GET /v1/fids`
pub async fn list_fids(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<PageQuery>,
) -> Result<Json<FidsResponse>, AppError> {
    let fids = state.storage.list_fids().await?;
    let (fids, next_page_token) = paginate(fids, &query, fid_key)?;
    Ok(Json(FidsResponse {
        fids,
        next_page_token,
    }))
}

/// `GET /v1/storageLimitsByFid`
pub async fn storage_limits_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<FidQuery>,
) -> Result<Json<StorageLimitsResponse>, AppError> {
    let rents = state
        .storage
        .list_on_chain_events(query.fid, Some(OnChainEventType::StorageRent))
        .await?;
    let units: u64 = rents
        .iter()
        .filter_map(|e| e.as_storage_rent())
        .map(|rent| u64::try_from(rent.units).unwrap_or(0))
        .sum();
    Ok(Json(StorageLimitsResponse::for_units(units)))
}

/// `GET /v1/userNameProofsByFid`
pub async fn username_proofs_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<FidQuery>,
) -> Result<Json<UsernameProofsResponse>, AppError> {
    let proofs = state.storage.list_username_proofs(query.fid).await?;
    Ok(Json(UsernameProofsResponse { proofs }))
}

/// `GET /v1/userNameProofByName`
pub async fn username_proof_by_name(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<UsernameProofQuery>,
) -> Result<Json<UserNameProof>, AppError> {
    state
        .storage
        .get_username_proof(&query.name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("username {:?} not found", query.name)))
}

/// `GET /v1/verificationsByFid`
pub async fn verifications_by_fid(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<VerificationsQuery>,
) -> Result<Json<Paged<Message>>, AppError> {
    if let Some(address) = &query.address {
        if !patterns::is_eth_address(address) {
            return Err(AppError::InvalidParam(format!(
                "address must match {}",
                patterns::ETH_ADDRESS_PATTERN
            )));
        }
    }
    let filter = MessageFilter {
        address: query.address.clone(),
        ..MessageFilter::by_fid(MessageType::VerificationAddEthAddress, query.fid)
    };
    let found = state.storage.list_messages(&filter).await?;
    Ok(Json(page_of(found, &query.page())?))
}

/// Sort key of an fid in the `fids` listing; zero-padded so string order is
/// numeric order.
fn fid_key(fid: &u64) -> String {
    format!("{fid:020}")
}
