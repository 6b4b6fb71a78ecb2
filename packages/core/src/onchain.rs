//! Blockchain-sourced events: signer changes, id registry changes, storage rent.
//!
//! Every event carries the same block/transaction coordinates plus one body
//! selected by its `type` tag.

use serde::{Deserialize, Serialize};

use crate::enums::{IdRegisterEventType, OnChainEventType, SignerEventType};

/// Adds, removes or resets a signer key for an fid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignerEventBody {
    /// `0x`-prefixed 32-byte public key.
    pub key: String,
    pub key_type: i64,
    pub event_type: SignerEventType,
    /// Base64 metadata supplied by the requesting app.
    pub metadata: String,
    pub metadata_type: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignerMigratedEventBody {
    pub migrated_at: i64,
}

/// Registration, transfer or recovery change of an fid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdRegisterEventBody {
    pub to: String,
    pub event_type: IdRegisterEventType,
    pub from: String,
    pub recovery_address: String,
}

/// Purchase of storage units for an fid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageRentEventBody {
    /// Base64 address of the payer.
    pub payer: String,
    pub units: i64,
    pub expiry: i64,
}

/// The body of an on-chain event, selected by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OnChainEventBody {
    #[serde(rename = "EVENT_TYPE_SIGNER")]
    Signer {
        #[serde(rename = "signerEventBody")]
        body: SignerEventBody,
    },
    #[serde(rename = "EVENT_TYPE_SIGNER_MIGRATED")]
    SignerMigrated {
        #[serde(rename = "signerMigratedEventBody")]
        body: SignerMigratedEventBody,
    },
    #[serde(rename = "EVENT_TYPE_ID_REGISTER")]
    IdRegister {
        #[serde(rename = "idRegisterEventBody")]
        body: IdRegisterEventBody,
    },
    #[serde(rename = "EVENT_TYPE_STORAGE_RENT")]
    StorageRent {
        #[serde(rename = "storageRentEventBody")]
        body: StorageRentEventBody,
    },
}

impl OnChainEventBody {
    pub fn event_type(&self) -> OnChainEventType {
        match self {
            OnChainEventBody::Signer { .. } => OnChainEventType::Signer,
            OnChainEventBody::SignerMigrated { .. } => OnChainEventType::SignerMigrated,
            OnChainEventBody::IdRegister { .. } => OnChainEventType::IdRegister,
            OnChainEventBody::StorageRent { .. } => OnChainEventType::StorageRent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnChainEvent {
    pub chain_id: u64,
    pub block_number: u64,
    pub block_hash: String,
    pub block_timestamp: u64,
    pub transaction_hash: String,
    pub log_index: u64,
    pub tx_index: u64,
    pub fid: u64,
    #[serde(flatten)]
    pub body: OnChainEventBody,
}

impl OnChainEvent {
    pub fn event_type(&self) -> OnChainEventType {
        self.body.event_type()
    }

    pub fn as_signer(&self) -> Option<&SignerEventBody> {
        match &self.body {
            OnChainEventBody::Signer { body } => Some(body),
            _ => None,
        }
    }

    pub fn as_id_register(&self) -> Option<&IdRegisterEventBody> {
        match &self.body {
            OnChainEventBody::IdRegister { body } => Some(body),
            _ => None,
        }
    }

    pub fn as_storage_rent(&self) -> Option<&StorageRentEventBody> {
        match &self.body {
            OnChainEventBody::StorageRent { body } => Some(body),
            _ => None,
        }
    }

    /// Ordering key used by listings: block, then log position.
    pub fn sort_key(&self) -> (u64, u64) {
        (self.block_number, self.log_index)
    }
}
