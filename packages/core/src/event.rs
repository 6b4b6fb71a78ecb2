//! Hub events: the append-only log of state changes a hub has applied.

use serde::{Deserialize, Serialize};

use crate::enums::HubEventType;
use crate::message::Message;
use crate::onchain::OnChainEvent;
use crate::username::UserNameProof;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeMessageBody {
    pub message: Message,
    /// Messages the merge displaced, possibly empty.
    pub deleted_messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PruneMessageBody {
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevokeMessageBody {
    pub message: Message,
}

/// Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeUserNameProofBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_proof: Option<UserNameProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_username_proof: Option<UserNameProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_proof_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_username_proof_message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeOnChainEventBody {
    pub on_chain_event: OnChainEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HubEventBody {
    #[serde(rename = "HUB_EVENT_TYPE_MERGE_MESSAGE")]
    MergeMessage {
        #[serde(rename = "mergeMessageBody")]
        body: MergeMessageBody,
    },
    #[serde(rename = "HUB_EVENT_TYPE_PRUNE_MESSAGE")]
    PruneMessage {
        #[serde(rename = "pruneMessageBody")]
        body: PruneMessageBody,
    },
    #[serde(rename = "HUB_EVENT_TYPE_REVOKE_MESSAGE")]
    RevokeMessage {
        #[serde(rename = "revokeMessageBody")]
        body: RevokeMessageBody,
    },
    #[serde(rename = "HUB_EVENT_TYPE_MERGE_USERNAME_PROOF")]
    MergeUsernameProof {
        #[serde(rename = "mergeUsernameProofBody")]
        body: MergeUserNameProofBody,
    },
    #[serde(rename = "HUB_EVENT_TYPE_MERGE_ON_CHAIN_EVENT")]
    MergeOnChainEvent {
        #[serde(rename = "mergeOnChainEventBody")]
        body: MergeOnChainEventBody,
    },
}

impl HubEventBody {
    pub fn event_type(&self) -> HubEventType {
        match self {
            HubEventBody::MergeMessage { .. } => HubEventType::MergeMessage,
            HubEventBody::PruneMessage { .. } => HubEventType::PruneMessage,
            HubEventBody::RevokeMessage { .. } => HubEventType::RevokeMessage,
            HubEventBody::MergeUsernameProof { .. } => HubEventType::MergeUsernameProof,
            HubEventBody::MergeOnChainEvent { .. } => HubEventType::MergeOnChainEvent,
        }
    }

    /// Convenience constructor for the common "a message was merged" case.
    pub fn merged(message: Message) -> Self {
        HubEventBody::MergeMessage {
            body: MergeMessageBody {
                message,
                deleted_messages: Vec::new(),
            },
        }
    }
}

/// One entry in a hub's event log. Ids are unique and increase with time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubEvent {
    pub id: u64,
    #[serde(flatten)]
    pub body: HubEventBody,
}

impl HubEvent {
    pub fn event_type(&self) -> HubEventType {
        self.body.event_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_username_proof_accepts_empty_body() {
        let json = serde_json::json!({
            "type": "HUB_EVENT_TYPE_MERGE_USERNAME_PROOF",
            "id": 350909155450880u64,
            "mergeUsernameProofBody": {}
        });
        let event: HubEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.event_type(), HubEventType::MergeUsernameProof);
        assert_eq!(event.id, 350909155450880);
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let json = serde_json::json!({
            "type": "HUB_EVENT_TYPE_NOPE",
            "id": 1,
        });
        assert!(serde_json::from_value::<HubEvent>(json).is_err());
    }
}
