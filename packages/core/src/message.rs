//! Messages: signed delta operations on the Farcaster social graph.
//!
//! A [`Message`] is an envelope carrying a hash, a signature over that hash,
//! and a [`MessageData`] payload. The payload's `type` string selects exactly
//! one body object; [`MessageBody`] models that as an internally tagged enum
//! flattened into the payload, so dispatch is always on the tag and never on
//! which fields happen to be present.
//!
//! ```json
//! {
//!   "data": {
//!     "type": "MESSAGE_TYPE_CAST_ADD",
//!     "fid": 6833,
//!     "timestamp": 48994466,
//!     "network": "FARCASTER_NETWORK_MAINNET",
//!     "castAddBody": { "text": "gm", "embedsDeprecated": [], "mentions": [],
//!                      "mentionsPositions": [], "embeds": [] }
//!   },
//!   "hash": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974",
//!   "hashScheme": "HASH_SCHEME_BLAKE3",
//!   "signature": "...",
//!   "signatureScheme": "SIGNATURE_SCHEME_ED25519",
//!   "signer": "0x..."
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::enums::{
    FarcasterNetwork, HashScheme, LinkType, MessageType, ReactionType, SignatureScheme,
    UserDataType,
};
use crate::username::UserNameProof;

// ---------------------------------------------------------------------------
// Identifiers and embeds
// ---------------------------------------------------------------------------

/// Identifier used to look up a cast: the author's fid plus the cast hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CastId {
    /// Fid of the user who created the cast.
    pub fid: u64,
    /// `0x`-prefixed 20-byte hex digest.
    pub hash: String,
}

impl CastId {
    pub fn new(fid: u64, hash: impl Into<String>) -> Self {
        Self {
            fid,
            hash: hash.into(),
        }
    }
}

/// A URL or cast embedded in a cast. Untagged: `{ "castId": … }` or `{ "url": … }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Embed {
    Cast {
        #[serde(rename = "castId")]
        cast_id: CastId,
    },
    Url {
        url: String,
    },
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// Adds a new cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CastAddBody {
    /// URLs to be embedded in the cast (legacy field).
    pub embeds_deprecated: Vec<String>,
    /// Fids mentioned in the cast.
    pub mentions: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_cast_id: Option<CastId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_url: Option<String>,
    pub text: String,
    /// Byte positions of the mentions in `text`.
    pub mentions_positions: Vec<u64>,
    pub embeds: Vec<Embed>,
}

/// Removes an existing cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CastRemoveBody {
    /// Base64 hash of the cast to remove.
    pub target_hash: String,
}

/// Adds or removes a reaction to a cast or URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionBody {
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cast_id: Option<CastId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

/// Adds or removes a link between two fids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkBody {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    /// Preserves the original timestamp when `data.timestamp` is rewritten
    /// for compaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_timestamp: Option<i64>,
    pub target_fid: u64,
}

/// Adds a verification of ownership of an Ethereum address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationAddEthAddressBody {
    pub address: String,
    /// Base64 signature produced by the verified address.
    pub eth_signature: String,
    /// Latest block hash when the signature was produced.
    pub block_hash: String,
}

/// Removes a verification of any type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRemoveBody {
    pub address: String,
}

/// Adds metadata about a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDataBody {
    #[serde(rename = "type")]
    pub user_data_type: UserDataType,
    pub value: String,
}

/// A Farcaster Frame button press.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionBody {
    pub url: String,
    /// Index of the button pressed, 1 to 4.
    pub button_index: u32,
    pub cast_id: CastId,
}

// ---------------------------------------------------------------------------
// MessageData
// ---------------------------------------------------------------------------

/// The typed payload of a message, selected by the `type` tag.
///
/// Reaction add/remove and link add/remove are distinct tags with a shared
/// body shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum MessageBody {
    #[serde(rename = "MESSAGE_TYPE_CAST_ADD")]
    CastAdd {
        #[serde(rename = "castAddBody")]
        body: CastAddBody,
    },
    #[serde(rename = "MESSAGE_TYPE_CAST_REMOVE")]
    CastRemove {
        #[serde(rename = "castRemoveBody")]
        body: CastRemoveBody,
    },
    #[serde(rename = "MESSAGE_TYPE_REACTION_ADD")]
    ReactionAdd {
        #[serde(rename = "reactionBody")]
        body: ReactionBody,
    },
    #[serde(rename = "MESSAGE_TYPE_REACTION_REMOVE")]
    ReactionRemove {
        #[serde(rename = "reactionBody")]
        body: ReactionBody,
    },
    #[serde(rename = "MESSAGE_TYPE_LINK_ADD")]
    LinkAdd {
        #[serde(rename = "linkBody")]
        body: LinkBody,
    },
    #[serde(rename = "MESSAGE_TYPE_LINK_REMOVE")]
    LinkRemove {
        #[serde(rename = "linkBody")]
        body: LinkBody,
    },
    #[serde(rename = "MESSAGE_TYPE_VERIFICATION_ADD_ETH_ADDRESS")]
    VerificationAddEthAddress {
        #[serde(rename = "verificationAddEthAddressBody")]
        body: VerificationAddEthAddressBody,
    },
    #[serde(rename = "MESSAGE_TYPE_VERIFICATION_REMOVE")]
    VerificationRemove {
        #[serde(rename = "verificationRemoveBody")]
        body: VerificationRemoveBody,
    },
    #[serde(rename = "MESSAGE_TYPE_USER_DATA_ADD")]
    UserDataAdd {
        #[serde(rename = "userDataBody")]
        body: UserDataBody,
    },
    #[serde(rename = "MESSAGE_TYPE_USERNAME_PROOF")]
    UsernameProof {
        #[serde(rename = "usernameProofBody")]
        body: UserNameProof,
    },
    #[serde(rename = "MESSAGE_TYPE_FRAME_ACTION")]
    FrameAction {
        #[serde(rename = "frameActionBody")]
        body: FrameActionBody,
    },
}

impl MessageBody {
    /// The tag this body serialises under.
    pub fn message_type(&self) -> MessageType {
        match self {
            MessageBody::CastAdd { .. } => MessageType::CastAdd,
            MessageBody::CastRemove { .. } => MessageType::CastRemove,
            MessageBody::ReactionAdd { .. } => MessageType::ReactionAdd,
            MessageBody::ReactionRemove { .. } => MessageType::ReactionRemove,
            MessageBody::LinkAdd { .. } => MessageType::LinkAdd,
            MessageBody::LinkRemove { .. } => MessageType::LinkRemove,
            MessageBody::VerificationAddEthAddress { .. } => {
                MessageType::VerificationAddEthAddress
            }
            MessageBody::VerificationRemove { .. } => MessageType::VerificationRemove,
            MessageBody::UserDataAdd { .. } => MessageType::UserDataAdd,
            MessageBody::UsernameProof { .. } => MessageType::UsernameProof,
            MessageBody::FrameAction { .. } => MessageType::FrameAction,
        }
    }

    pub fn as_cast_add(&self) -> Option<&CastAddBody> {
        match self {
            MessageBody::CastAdd { body } => Some(body),
            _ => None,
        }
    }

    /// The reaction body of either a reaction add or a reaction remove.
    pub fn as_reaction(&self) -> Option<&ReactionBody> {
        match self {
            MessageBody::ReactionAdd { body } | MessageBody::ReactionRemove { body } => Some(body),
            _ => None,
        }
    }

    /// The link body of either a link add or a link remove.
    pub fn as_link(&self) -> Option<&LinkBody> {
        match self {
            MessageBody::LinkAdd { body } | MessageBody::LinkRemove { body } => Some(body),
            _ => None,
        }
    }

    pub fn as_user_data(&self) -> Option<&UserDataBody> {
        match self {
            MessageBody::UserDataAdd { body } => Some(body),
            _ => None,
        }
    }

    pub fn as_verification_add(&self) -> Option<&VerificationAddEthAddressBody> {
        match self {
            MessageBody::VerificationAddEthAddress { body } => Some(body),
            _ => None,
        }
    }
}

/// Common payload fields plus the tagged body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageData {
    /// Farcaster ID of the user producing the message.
    pub fid: u64,
    /// Farcaster epoch timestamp in seconds (see [`crate::time`]).
    pub timestamp: u64,
    pub network: FarcasterNetwork,
    #[serde(flatten)]
    pub body: MessageBody,
}

impl MessageData {
    pub fn message_type(&self) -> MessageType {
        self.body.message_type()
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A signed envelope around [`MessageData`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub data: MessageData,
    /// Hash digest of `data`, `0x`-prefixed 20-byte hex.
    pub hash: String,
    pub hash_scheme: HashScheme,
    /// Base64 signature of the hash digest.
    pub signature: String,
    pub signature_scheme: SignatureScheme,
    /// Public key or address of the key pair that produced the signature.
    pub signer: String,
}

impl Message {
    /// Build an unsigned message around `data`.
    ///
    /// `signature` and `signer` are left empty; call
    /// [`sign_message`](crate::sign_message) before putting it on the wire.
    pub fn new(data: MessageData, hash: impl Into<String>) -> Self {
        Self {
            data,
            hash: hash.into(),
            hash_scheme: HashScheme::Blake3,
            signature: String::new(),
            signature_scheme: SignatureScheme::Ed25519,
            signer: String::new(),
        }
    }

    pub fn fid(&self) -> u64 {
        self.data.fid
    }

    pub fn message_type(&self) -> MessageType {
        self.data.message_type()
    }

    /// The [`CastId`] addressing this message when it is a cast.
    pub fn cast_id(&self) -> Option<CastId> {
        self.data
            .body
            .as_cast_add()
            .map(|_| CastId::new(self.data.fid, self.hash.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::UserNameType;

    fn cast_add_json() -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "MESSAGE_TYPE_CAST_ADD",
                "fid": 6833,
                "timestamp": 48994466,
                "network": "FARCASTER_NETWORK_MAINNET",
                "castAddBody": {
                    "embedsDeprecated": [],
                    "mentions": [2],
                    "parentCastId": {
                        "fid": 226,
                        "hash": "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9"
                    },
                    "text": "gm  and dwr",
                    "mentionsPositions": [3],
                    "embeds": [
                        { "url": "https://farcaster.xyz" },
                        { "castId": { "fid": 2, "hash": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974" } }
                    ]
                }
            },
            "hash": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974",
            "hashScheme": "HASH_SCHEME_BLAKE3",
            "signature": "AAAA",
            "signatureScheme": "SIGNATURE_SCHEME_ED25519",
            "signer": "0x0852c07b5695ff94138b025e3f9b4788e06133f04e254f0ea0eb85a06e999cdd"
        })
    }

    #[test]
    fn cast_id_roundtrip_is_lossless() {
        let id = CastId::new(6833, "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            r#"{"fid":6833,"hash":"0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9"}"#
        );
        let back: CastId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn cast_add_dispatches_on_type() {
        let msg: Message = serde_json::from_value(cast_add_json()).unwrap();
        assert_eq!(msg.message_type(), MessageType::CastAdd);
        let body = msg.data.body.as_cast_add().unwrap();
        assert_eq!(body.text, "gm  and dwr");
        assert_eq!(body.embeds.len(), 2);
        assert!(matches!(body.embeds[0], Embed::Url { .. }));
        assert!(matches!(body.embeds[1], Embed::Cast { .. }));
        assert_eq!(msg.cast_id().unwrap().fid, 6833);
    }

    #[test]
    fn message_serialises_flat_payload() {
        let msg: Message = serde_json::from_value(cast_add_json()).unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["data"]["type"], "MESSAGE_TYPE_CAST_ADD");
        assert_eq!(value["data"]["fid"], 6833);
        assert!(value["data"]["castAddBody"].is_object());
        assert_eq!(value, cast_add_json());
    }

    #[test]
    fn tag_mismatching_body_is_rejected() {
        let mut json = cast_add_json();
        json["data"]["type"] = "MESSAGE_TYPE_CAST_REMOVE".into();
        assert!(serde_json::from_value::<Message>(json).is_err());
    }

    #[test]
    fn reaction_remove_shares_reaction_body() {
        let json = serde_json::json!({
            "type": "MESSAGE_TYPE_REACTION_REMOVE",
            "fid": 2,
            "timestamp": 1,
            "network": "FARCASTER_NETWORK_MAINNET",
            "reactionBody": {
                "type": "REACTION_TYPE_RECAST",
                "targetUrl": "chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2"
            }
        });
        let data: MessageData = serde_json::from_value(json).unwrap();
        assert_eq!(data.message_type(), MessageType::ReactionRemove);
        let reaction = data.body.as_reaction().unwrap();
        assert_eq!(reaction.reaction_type, ReactionType::Recast);
        assert!(reaction.target_cast_id.is_none());
    }

    #[test]
    fn username_proof_body() {
        let json = serde_json::json!({
            "type": "MESSAGE_TYPE_USERNAME_PROOF",
            "fid": 3,
            "timestamp": 1,
            "network": "FARCASTER_NETWORK_MAINNET",
            "usernameProofBody": {
                "timestamp": 1690000000,
                "name": "dwr.eth",
                "owner": "0x00000000fcd5a8e45785c8a4b9a718c9348e4f18",
                "signature": "AAAA",
                "fid": 3,
                "type": "USERNAME_TYPE_ENS_L1"
            }
        });
        let data: MessageData = serde_json::from_value(json).unwrap();
        match data.body {
            MessageBody::UsernameProof { body } => {
                assert_eq!(body.name_type, UserNameType::EnsL1);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn missing_required_body_field_is_rejected() {
        let mut json = cast_add_json();
        json["data"]["castAddBody"]
            .as_object_mut()
            .unwrap()
            .remove("mentions");
        assert!(serde_json::from_value::<Message>(json).is_err());
    }

    #[test]
    fn int64_fields_decode_past_u32() {
        let mut json = cast_add_json();
        json["data"]["timestamp"] = serde_json::json!(5_000_000_000u64);
        json["data"]["castAddBody"]["mentionsPositions"] = serde_json::json!([4_294_967_296u64]);
        let msg: Message = serde_json::from_value(json).unwrap();
        assert_eq!(msg.data.timestamp, 5_000_000_000);
        assert_eq!(
            msg.data.body.as_cast_add().unwrap().mentions_positions,
            vec![4_294_967_296]
        );
    }
}
