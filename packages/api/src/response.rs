//! Response bodies that are not a bare core type.
//!
//! Two operations return one of two shapes depending on a filter parameter:
//! `userDataByFid` (`user_data_type`) and `onChainSignersByFid` (`signer`).
//! Callers know which branch to expect from the request they sent, so
//! [`UserDataResponse::from_value`] and [`SignersResponse::from_value`] take
//! that flag rather than guessing from the body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hubspec::{HubEvent, Message, OnChainEvent, StoreType, UserNameProof};

use crate::pagination::Paged;

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

/// Response body for `GET /v1/info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HubInfoResponse {
    pub version: String,
    pub is_syncing: bool,
    pub nickname: String,
    pub root_hash: String,
    /// Present only when `dbstats=true` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_stats: Option<DbStats>,
    pub peer_id: String,
    pub hub_operator_fid: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
    pub num_messages: u64,
    pub num_fid_events: u64,
    pub num_fname_events: u64,
}

// ---------------------------------------------------------------------------
// Storage, usernames, on-chain events, validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageLimit {
    pub store_type: StoreType,
    pub limit: u64,
}

/// Response body for `GET /v1/storageLimitsByFid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageLimitsResponse {
    pub limits: Vec<StorageLimit>,
}

impl StorageLimitsResponse {
    /// Limits for an fid that has rented `units` storage units.
    pub fn for_units(units: u64) -> Self {
        Self {
            limits: StoreType::ALL
                .iter()
                .map(|&store_type| StorageLimit {
                    store_type,
                    limit: store_type.limit_per_unit() * units,
                })
                .collect(),
        }
    }
}

/// Response body for `GET /v1/userNameProofsByFid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsernameProofsResponse {
    pub proofs: Vec<UserNameProof>,
}

/// Response body for `GET /v1/onChainEventsByFid` and the list branch of
/// `GET /v1/onChainSignersByFid`. Not paginated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnChainEventsResponse {
    pub events: Vec<OnChainEvent>,
}

/// Response body for `POST /v1/validateMessage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateMessageResponse {
    pub valid: bool,
    pub message: Message,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Response body for `GET /v1/events`.
///
/// Pass `nextPageEventId` back as `from_event_id` to continue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub next_page_event_id: u64,
    pub events: Vec<HubEvent>,
}

// ---------------------------------------------------------------------------
// Dual-shape responses
// ---------------------------------------------------------------------------

/// Response of `GET /v1/userDataByFid`.
#[derive(Debug, Clone, PartialEq)]
pub enum UserDataResponse {
    /// `user_data_type` was supplied.
    Single(Box<Message>),
    /// `user_data_type` was omitted.
    Page(Paged<Message>),
}

impl UserDataResponse {
    /// Decode the branch selected by whether `user_data_type` was sent.
    pub fn from_value(value: Value, filtered: bool) -> Result<Self, serde_json::Error> {
        if filtered {
            serde_json::from_value(value).map(|m| Self::Single(Box::new(m)))
        } else {
            serde_json::from_value(value).map(Self::Page)
        }
    }

    pub fn messages(&self) -> Vec<&Message> {
        match self {
            Self::Single(m) => vec![m.as_ref()],
            Self::Page(p) => p.messages.iter().collect(),
        }
    }
}

impl Serialize for UserDataResponse {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(m) => m.serialize(s),
            Self::Page(p) => p.serialize(s),
        }
    }
}

/// Response of `GET /v1/onChainSignersByFid`.
#[derive(Debug, Clone, PartialEq)]
pub enum SignersResponse {
    /// `signer` was supplied.
    Single(Box<OnChainEvent>),
    /// `signer` was omitted.
    List(OnChainEventsResponse),
}

impl SignersResponse {
    /// Decode the branch selected by whether `signer` was sent.
    pub fn from_value(value: Value, filtered: bool) -> Result<Self, serde_json::Error> {
        if filtered {
            serde_json::from_value(value).map(|e| Self::Single(Box::new(e)))
        } else {
            serde_json::from_value(value).map(Self::List)
        }
    }

    pub fn events(&self) -> Vec<&OnChainEvent> {
        match self {
            Self::Single(e) => vec![e.as_ref()],
            Self::List(l) => l.events.iter().collect(),
        }
    }
}

impl Serialize for SignersResponse {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(e) => e.serialize(s),
            Self::List(l) => l.serialize(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
