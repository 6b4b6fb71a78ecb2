//! Storage abstraction layer for the mock hub.
//!
//! The [`Storage`] trait defines the contract between the HTTP handler layer
//! and persistence. Pagination and response shaping live in the handlers;
//! storage returns complete, ordered result sets.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`MemoryStorage`] | Tests, conformance suite, the "try it out" mock |
//!
//! [`MemoryStorage`]: memory::MemoryStorage

pub mod fixtures;
pub mod memory;

use async_trait::async_trait;
use hubspec::{
    CastId, HubEvent, HubEventBody, LinkType, Message, MessageBody, MessageType, OnChainEvent,
    OnChainEventType, ReactionType, UserDataType, UserNameProof,
};
use hubspec_api::DbStats;

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors that storage operations can return.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested item does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// An item with the same key already exists (e.g. a known message hash).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// An unexpected error in the underlying storage backend.
    #[error("internal storage error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// MessageFilter
// ---------------------------------------------------------------------------

/// Query parameters for [`Storage::list_messages`].
///
/// Every field that is `Some` must match; `None` fields are ignored. Fields
/// that only exist on one body kind never match messages of another kind.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    /// Include only messages of this type.
    pub message_type: Option<MessageType>,

    /// Include only messages authored by this fid.
    pub fid: Option<u64>,

    /// Casts whose `mentions` contain this fid.
    pub mention: Option<u64>,

    /// Casts replying to this cast.
    pub parent_cast: Option<CastId>,

    /// Casts replying to this URL.
    pub parent_url: Option<String>,

    pub reaction_type: Option<ReactionType>,

    /// Reactions targeting this cast.
    pub target_cast: Option<CastId>,

    /// Reactions targeting this URL.
    pub target_url: Option<String>,

    pub link_type: Option<LinkType>,

    /// Links pointing at this fid.
    pub target_fid: Option<u64>,

    pub user_data_type: Option<UserDataType>,

    /// Verifications of this address (case-insensitive).
    pub address: Option<String>,
}

impl MessageFilter {
    /// Filter on message type and author.
    pub fn by_fid(message_type: MessageType, fid: u64) -> Self {
        Self {
            message_type: Some(message_type),
            fid: Some(fid),
            ..Self::default()
        }
    }

    pub fn of_type(message_type: MessageType) -> Self {
        Self {
            message_type: Some(message_type),
            ..Self::default()
        }
    }

    pub fn matches(&self, message: &Message) -> bool {
        if self.message_type.is_some_and(|t| t != message.message_type()) {
            return false;
        }
        if self.fid.is_some_and(|fid| fid != message.fid()) {
            return false;
        }
        let body = &message.data.body;

        if self.mention.is_some() || self.parent_cast.is_some() || self.parent_url.is_some() {
            let Some(cast) = body.as_cast_add() else {
                return false;
            };
            if self.mention.is_some_and(|fid| !cast.mentions.contains(&fid)) {
                return false;
            }
            if self.parent_cast.is_some() && cast.parent_cast_id != self.parent_cast {
                return false;
            }
            if self.parent_url.is_some() && cast.parent_url != self.parent_url {
                return false;
            }
        }

        if self.reaction_type.is_some() || self.target_cast.is_some() || self.target_url.is_some()
        {
            let Some(reaction) = body.as_reaction() else {
                return false;
            };
            if self.reaction_type.is_some_and(|t| t != reaction.reaction_type) {
                return false;
            }
            if self.target_cast.is_some() && reaction.target_cast_id != self.target_cast {
                return false;
            }
            if self.target_url.is_some() && reaction.target_url != self.target_url {
                return false;
            }
        }

        if self.link_type.is_some() || self.target_fid.is_some() {
            let Some(link) = body.as_link() else {
                return false;
            };
            if self.link_type.is_some_and(|t| t != link.link_type) {
                return false;
            }
            if self.target_fid.is_some_and(|fid| fid != link.target_fid) {
                return false;
            }
        }

        if let Some(user_data_type) = self.user_data_type {
            match body.as_user_data() {
                Some(data) if data.user_data_type == user_data_type => {}
                _ => return false,
            }
        }

        if let Some(address) = &self.address {
            let verified = match body {
                MessageBody::VerificationAddEthAddress { body } => &body.address,
                MessageBody::VerificationRemove { body } => &body.address,
                _ => return false,
            };
            if !verified.eq_ignore_ascii_case(address) {
                return false;
            }
        }

        true
    }
}

/// Sort key of a message in listings: zero-padded timestamp, then hash, so
/// that string order equals `(timestamp, hash)` order.
pub fn message_key(message: &Message) -> String {
    format!("{:020}:{}", message.data.timestamp, message.hash)
}

// ---------------------------------------------------------------------------
// Storage trait
// ---------------------------------------------------------------------------

/// The persistence contract for the mock hub.
///
/// All methods are `async` and return `Result<_, StorageError>`. Implementations
/// must be `Send + Sync + 'static` so they can be held in an `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    // --- Messages ------------------------------------------------------------

    /// Persist a message. Returns [`StorageError::Duplicate`] if a message
    /// with the same hash is already stored.
    async fn put_message(&self, message: &Message) -> Result<(), StorageError>;

    /// Retrieve a message by author and hash. Returns `None` if not found.
    async fn get_message(&self, fid: u64, hash: &str) -> Result<Option<Message>, StorageError>;

    /// All messages matching `filter`, ordered by `(timestamp, hash)` ascending.
    async fn list_messages(&self, filter: &MessageFilter) -> Result<Vec<Message>, StorageError>;

    // --- On-chain events -----------------------------------------------------

    async fn put_on_chain_event(&self, event: &OnChainEvent) -> Result<(), StorageError>;

    /// On-chain events for `fid`, optionally of one type, ordered by block
    /// number then log index.
    async fn list_on_chain_events(
        &self,
        fid: u64,
        event_type: Option<OnChainEventType>,
    ) -> Result<Vec<OnChainEvent>, StorageError>;

    /// The latest id-register event whose `to` address equals `address`
    /// (case-insensitive).
    async fn id_register_by_address(
        &self,
        address: &str,
    ) -> Result<Option<OnChainEvent>, StorageError>;

    /// Every fid with an id-register event, ascending.
    async fn list_fids(&self) -> Result<Vec<u64>, StorageError>;

    // --- Username proofs -----------------------------------------------------

    /// Register or replace the proof for `proof.name`.
    async fn put_username_proof(&self, proof: &UserNameProof) -> Result<(), StorageError>;

    async fn get_username_proof(&self, name: &str) -> Result<Option<UserNameProof>, StorageError>;

    /// Proofs held by `fid`, ordered by name.
    async fn list_username_proofs(&self, fid: u64) -> Result<Vec<UserNameProof>, StorageError>;

    // --- Hub events ----------------------------------------------------------

    /// Append an event to the log, assigning it the next id.
    async fn append_event(&self, body: HubEventBody) -> Result<HubEvent, StorageError>;

    async fn get_event(&self, id: u64) -> Result<Option<HubEvent>, StorageError>;

    /// Up to `limit` events with `id >= from`, ascending.
    async fn list_events(&self, from: u64, limit: usize) -> Result<Vec<HubEvent>, StorageError>;

    // --- Stats ---------------------------------------------------------------

    async fn stats(&self) -> Result<DbStats, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubspec::{CastAddBody, FarcasterNetwork, MessageData, ReactionBody};

    fn message(fid: u64, timestamp: u64, body: MessageBody) -> Message {
        Message::new(
            MessageData {
                fid,
                timestamp,
                network: FarcasterNetwork::Mainnet,
                body,
            },
            "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9",
        )
    }

    fn cast(mentions: Vec<u64>, parent_url: Option<&str>) -> MessageBody {
        MessageBody::CastAdd {
            body: CastAddBody {
                embeds_deprecated: vec![],
                mentions_positions: vec![0; mentions.len()],
                mentions,
                parent_cast_id: None,
                parent_url: parent_url.map(String::from),
                text: "gm".into(),
                embeds: vec![],
            },
        }
    }

    #[test]
    fn body_fields_never_match_other_kinds() {
        let like = message(
            1,
            10,
            MessageBody::ReactionAdd {
                body: ReactionBody {
                    reaction_type: ReactionType::Like,
                    target_cast_id: None,
                    target_url: Some("https://farcaster.xyz".into()),
                },
            },
        );
        let filter = MessageFilter {
            mention: Some(1),
            ..MessageFilter::default()
        };
        assert!(!filter.matches(&like));

        let filter = MessageFilter {
            target_url: Some("https://farcaster.xyz".into()),
            ..MessageFilter::default()
        };
        assert!(filter.matches(&like));
    }

    #[test]
    fn mention_and_parent_filters() {
        let reply = message(2, 10, cast(vec![6833], Some("https://farcaster.xyz")));
        let mut filter = MessageFilter::of_type(MessageType::CastAdd);
        filter.mention = Some(6833);
        assert!(filter.matches(&reply));
        filter.parent_url = Some("https://other.example".into());
        assert!(!filter.matches(&reply));
        assert!(!MessageFilter::by_fid(MessageType::CastAdd, 3).matches(&reply));
    }

    #[test]
    fn message_key_orders_by_timestamp_first() {
        let early = message(1, 9, cast(vec![], None));
        let late = message(1, 10, cast(vec![], None));
        assert!(message_key(&early) < message_key(&late));
    }
}
