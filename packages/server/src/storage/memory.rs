//! In-memory storage implementation.
//!
//! All data is held in RAM behind a [`RwLock`] and is lost when the process
//! exits. Use this for tests, the conformance suite, and the mock hub.
//!
//! Messages live in a [`BTreeMap`] keyed by [`message_key`], so iterating the
//! map yields the `(timestamp, hash)` order every listing needs. Events are
//! keyed by id, which grows with time.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use hubspec::{
    time, HubEvent, HubEventBody, Message, OnChainEvent, OnChainEventType, UserNameProof,
};
use hubspec_api::DbStats;

use super::{message_key, MessageFilter, Storage, StorageError};

/// Low bits of an event id reserved for a per-millisecond sequence number.
pub const SEQUENCE_BITS: u32 = 12;

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Inner {
    /// `message_key` → message.
    messages: BTreeMap<String, Message>,
    /// hash → `message_key`.
    by_hash: HashMap<String, String>,
    on_chain: Vec<OnChainEvent>,
    proofs: BTreeMap<String, UserNameProof>,
    events: BTreeMap<u64, HubEvent>,
    last_event_id: u64,
}

impl Inner {
    /// `(ms since the Farcaster epoch) << 12 | seq`, strictly increasing even
    /// when many events land in the same millisecond.
    fn next_event_id(&mut self) -> u64 {
        let stamped = time::millis_since_epoch(Utc::now()) << SEQUENCE_BITS;
        let id = stamped.max(self.last_event_id + 1);
        self.last_event_id = id;
        id
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Thread-safe, in-memory implementation of [`Storage`].
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Storage impl
// ---------------------------------------------------------------------------

#[async_trait]
impl Storage for MemoryStorage {
    // --- Messages ------------------------------------------------------------

    async fn put_message(&self, message: &Message) -> Result<(), StorageError> {
        let mut inner = self.write();
        let hash = message.hash.to_ascii_lowercase();
        if inner.by_hash.contains_key(&hash) {
            return Err(StorageError::Duplicate(format!(
                "message {} already exists",
                message.hash
            )));
        }
        let key = message_key(message);
        inner.by_hash.insert(hash, key.clone());
        inner.messages.insert(key, message.clone());
        Ok(())
    }

    async fn get_message(&self, fid: u64, hash: &str) -> Result<Option<Message>, StorageError> {
        let inner = self.read();
        Ok(inner
            .by_hash
            .get(&hash.to_ascii_lowercase())
            .and_then(|key| inner.messages.get(key))
            .filter(|m| m.fid() == fid)
            .cloned())
    }

    async fn list_messages(&self, filter: &MessageFilter) -> Result<Vec<Message>, StorageError> {
        let inner = self.read();
        Ok(inner
            .messages
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    // --- On-chain events -----------------------------------------------------

    async fn put_on_chain_event(&self, event: &OnChainEvent) -> Result<(), StorageError> {
        let mut inner = self.write();
        inner.on_chain.push(event.clone());
        inner.on_chain.sort_by_key(OnChainEvent::sort_key);
        Ok(())
    }

    async fn list_on_chain_events(
        &self,
        fid: u64,
        event_type: Option<OnChainEventType>,
    ) -> Result<Vec<OnChainEvent>, StorageError> {
        let inner = self.read();
        Ok(inner
            .on_chain
            .iter()
            .filter(|e| e.fid == fid)
            .filter(|e| event_type.map_or(true, |t| t == e.event_type()))
            .cloned()
            .collect())
    }

    async fn id_register_by_address(
        &self,
        address: &str,
    ) -> Result<Option<OnChainEvent>, StorageError> {
        let inner = self.read();
        Ok(inner
            .on_chain
            .iter()
            .rev()
            .find(|e| {
                e.as_id_register()
                    .is_some_and(|body| body.to.eq_ignore_ascii_case(address))
            })
            .cloned())
    }

    async fn list_fids(&self) -> Result<Vec<u64>, StorageError> {
        let inner = self.read();
        let mut fids: Vec<u64> = inner
            .on_chain
            .iter()
            .filter(|e| e.as_id_register().is_some())
            .map(|e| e.fid)
            .collect();
        fids.sort_unstable();
        fids.dedup();
        Ok(fids)
    }

    // --- Username proofs -----------------------------------------------------

    async fn put_username_proof(&self, proof: &UserNameProof) -> Result<(), StorageError> {
        let mut inner = self.write();
        inner.proofs.insert(proof.name.clone(), proof.clone());
        Ok(())
    }

    async fn get_username_proof(&self, name: &str) -> Result<Option<UserNameProof>, StorageError> {
        Ok(self.read().proofs.get(name).cloned())
    }

    async fn list_username_proofs(&self, fid: u64) -> Result<Vec<UserNameProof>, StorageError> {
        let inner = self.read();
        Ok(inner
            .proofs
            .values()
            .filter(|p| p.fid == fid)
            .cloned()
            .collect())
    }

    // --- Hub events ----------------------------------------------------------

    async fn append_event(&self, body: HubEventBody) -> Result<HubEvent, StorageError> {
        let mut inner = self.write();
        let id = inner.next_event_id();
        let event = HubEvent { id, body };
        inner.events.insert(id, event.clone());
        Ok(event)
    }

    async fn get_event(&self, id: u64) -> Result<Option<HubEvent>, StorageError> {
        Ok(self.read().events.get(&id).cloned())
    }

    async fn list_events(&self, from: u64, limit: usize) -> Result<Vec<HubEvent>, StorageError> {
        let inner = self.read();
        Ok(inner
            .events
            .range(from..)
            .take(limit)
            .map(|(_, e)| e.clone())
            .collect())
    }

    // --- Stats ---------------------------------------------------------------

    async fn stats(&self) -> Result<DbStats, StorageError> {
        let inner = self.read();
        Ok(DbStats {
            num_messages: inner.messages.len() as u64,
            num_fid_events: inner.on_chain.len() as u64,
            num_fname_events: inner.proofs.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubspec::{FarcasterNetwork, LinkBody, LinkType, MessageBody, MessageData, MessageType};

    fn follow(fid: u64, target_fid: u64, timestamp: u64, hash: &str) -> Message {
        Message::new(
            MessageData {
                fid,
                timestamp,
                network: FarcasterNetwork::Mainnet,
                body: MessageBody::LinkAdd {
                    body: LinkBody {
                        link_type: LinkType::Follow,
                        display_timestamp: None,
                        target_fid,
                    },
                },
            },
            hash,
        )
    }

    #[tokio::test]
    async fn duplicate_hash_is_rejected() {
        let store = MemoryStorage::new();
        let m = follow(1, 2, 100, "0x00000000000000000000000000000000000000aa");
        store.put_message(&m).await.unwrap();
        let err = store.put_message(&m).await.unwrap_err();
        assert!(matches!(err, StorageError::Duplicate(_)));
    }

    #[tokio::test]
    async fn listing_is_ordered_by_timestamp_then_hash() {
        let store = MemoryStorage::new();
        let late = follow(1, 2, 200, "0x00000000000000000000000000000000000000aa");
        let early_b = follow(1, 3, 100, "0x00000000000000000000000000000000000000bb");
        let early_a = follow(1, 4, 100, "0x00000000000000000000000000000000000000ab");
        for m in [&late, &early_b, &early_a] {
            store.put_message(m).await.unwrap();
        }
        let listed = store
            .list_messages(&MessageFilter::by_fid(MessageType::LinkAdd, 1))
            .await
            .unwrap();
        let hashes: Vec<&str> = listed.iter().map(|m| m.hash.as_str()).collect();
        assert_eq!(
            hashes,
            vec![early_a.hash.as_str(), early_b.hash.as_str(), late.hash.as_str()]
        );
    }

    #[tokio::test]
    async fn lookup_checks_author() {
        let store = MemoryStorage::new();
        let m = follow(1, 2, 100, "0x00000000000000000000000000000000000000aa");
        store.put_message(&m).await.unwrap();
        assert!(store.get_message(1, &m.hash).await.unwrap().is_some());
        assert!(store.get_message(2, &m.hash).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn event_ids_strictly_increase() {
        let store = MemoryStorage::new();
        let mut last = 0;
        for _ in 0..50 {
            let e = store
                .append_event(HubEventBody::merged(follow(
                    1,
                    2,
                    1,
                    "0x00000000000000000000000000000000000000aa",
                )))
                .await
                .unwrap();
            assert!(e.id > last);
            last = e.id;
        }
        let page = store.list_events(0, 10).await.unwrap();
        assert_eq!(page.len(), 10);
        let from_last = store.list_events(last, 10).await.unwrap();
        assert_eq!(from_last.len(), 1);
        assert_eq!(from_last[0].id, last);
    }
}
