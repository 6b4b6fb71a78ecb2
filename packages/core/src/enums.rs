//! Enumerations that appear on the wire.
//!
//! Every enum serialises as its exact upper-snake-case string literal (e.g.
//! `"MESSAGE_TYPE_CAST_ADD"`). These literals are part of the contract and
//! must never be renamed or renumbered.
//!
//! Query parameters such as `reaction_type` accept "either a numerical enum
//! value or string representation"; [`parse_lenient`](MessageType::parse_lenient)
//! implements that rule for every enum that has a numeric form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string is not one of an enum's wire literals.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} {value:?}; expected one of: {expected}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:tt {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:tt / $num:tt, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire-format string literal.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// The numeric protobuf value of this variant.
            pub const fn number(self) -> i32 {
                match self {
                    $($name::$variant => $num,)+
                }
            }

            /// Look a variant up by its numeric protobuf value.
            pub fn from_number(n: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.number() == n)
            }

            /// Parse either the wire literal or the numeric enum value.
            pub fn parse_lenient(s: &str) -> Result<Self, UnknownVariant> {
                if let Ok(n) = s.trim().parse::<i32>() {
                    return Self::from_number(n).ok_or_else(|| Self::unknown(s));
                }
                s.parse()
            }

            fn unknown(s: &str) -> UnknownVariant {
                UnknownVariant {
                    kind: $kind,
                    value: s.to_string(),
                    expected: Self::ALL
                        .iter()
                        .map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Self::unknown(s))
            }
        }
    };
}

wire_enum! {
    /// Farcaster network the message is intended for.
    #[derive(Default)]
    FarcasterNetwork as "network" {
        /// Public primary network.
        #[default]
        Mainnet = "FARCASTER_NETWORK_MAINNET" / 1,
        /// Public test network.
        Testnet = "FARCASTER_NETWORK_TESTNET" / 2,
        /// Private test network.
        Devnet = "FARCASTER_NETWORK_DEVNET" / 3,
    }
}

wire_enum! {
    /// Type of the message body. Selects which `*Body` field `data` carries.
    MessageType as "message type" {
        CastAdd = "MESSAGE_TYPE_CAST_ADD" / 1,
        CastRemove = "MESSAGE_TYPE_CAST_REMOVE" / 2,
        ReactionAdd = "MESSAGE_TYPE_REACTION_ADD" / 3,
        ReactionRemove = "MESSAGE_TYPE_REACTION_REMOVE" / 4,
        LinkAdd = "MESSAGE_TYPE_LINK_ADD" / 5,
        LinkRemove = "MESSAGE_TYPE_LINK_REMOVE" / 6,
        VerificationAddEthAddress = "MESSAGE_TYPE_VERIFICATION_ADD_ETH_ADDRESS" / 7,
        VerificationRemove = "MESSAGE_TYPE_VERIFICATION_REMOVE" / 8,
        UserDataAdd = "MESSAGE_TYPE_USER_DATA_ADD" / 11,
        UsernameProof = "MESSAGE_TYPE_USERNAME_PROOF" / 12,
        FrameAction = "MESSAGE_TYPE_FRAME_ACTION" / 13,
    }
}

impl MessageType {
    /// The JSON key of the body object this type selects inside `data`.
    ///
    /// Add/remove pairs for reactions and links share one body shape, so
    /// eleven types map onto nine keys (see [`BODY_KEYS`]).
    pub const fn body_key(self) -> &'static str {
        match self {
            MessageType::CastAdd => "castAddBody",
            MessageType::CastRemove => "castRemoveBody",
            MessageType::ReactionAdd | MessageType::ReactionRemove => "reactionBody",
            MessageType::LinkAdd | MessageType::LinkRemove => "linkBody",
            MessageType::VerificationAddEthAddress => "verificationAddEthAddressBody",
            MessageType::VerificationRemove => "verificationRemoveBody",
            MessageType::UserDataAdd => "userDataBody",
            MessageType::UsernameProof => "usernameProofBody",
            MessageType::FrameAction => "frameActionBody",
        }
    }
}

/// The nine body keys a `MessageData` object may carry; exactly one is present.
pub const BODY_KEYS: [&str; 9] = [
    "castAddBody",
    "castRemoveBody",
    "reactionBody",
    "linkBody",
    "verificationAddEthAddressBody",
    "verificationRemoveBody",
    "userDataBody",
    "usernameProofBody",
    "frameActionBody",
];

wire_enum! {
    /// Type of reaction.
    ReactionType as "reaction type" {
        /// Like the target cast.
        Like = "REACTION_TYPE_LIKE" / 1,
        /// Share the target cast to the user's audience.
        Recast = "REACTION_TYPE_RECAST" / 2,
    }
}

wire_enum! {
    /// Type of user metadata.
    UserDataType as "user data type" {
        /// Profile picture.
        Pfp = "USER_DATA_TYPE_PFP" / 1,
        /// Display name.
        Display = "USER_DATA_TYPE_DISPLAY" / 2,
        /// Bio.
        Bio = "USER_DATA_TYPE_BIO" / 3,
        /// URL of the user.
        Url = "USER_DATA_TYPE_URL" / 5,
        /// Preferred name.
        Username = "USER_DATA_TYPE_USERNAME" / 6,
    }
}

wire_enum! {
    /// Type of a blockchain-sourced event.
    OnChainEventType as "on-chain event type" {
        Signer = "EVENT_TYPE_SIGNER" / 1,
        SignerMigrated = "EVENT_TYPE_SIGNER_MIGRATED" / 2,
        IdRegister = "EVENT_TYPE_ID_REGISTER" / 3,
        StorageRent = "EVENT_TYPE_STORAGE_RENT" / 4,
    }
}

wire_enum! {
    /// Message store a storage limit applies to.
    StoreType as "store type" {
        Casts = "STORE_TYPE_CASTS" / 1,
        Links = "STORE_TYPE_LINKS" / 2,
        Reactions = "STORE_TYPE_REACTIONS" / 3,
        UserData = "STORE_TYPE_USER_DATA" / 4,
        Verifications = "STORE_TYPE_VERIFICATIONS" / 5,
        UsernameProofs = "STORE_TYPE_USERNAME_PROOFS" / 6,
    }
}

impl StoreType {
    /// Messages allowed in this store per rented storage unit.
    pub const fn limit_per_unit(self) -> u64 {
        match self {
            StoreType::Casts => 5000,
            StoreType::Links => 2500,
            StoreType::Reactions => 2500,
            StoreType::UserData => 50,
            StoreType::Verifications => 25,
            StoreType::UsernameProofs => 5,
        }
    }
}

wire_enum! {
    /// Signature scheme used to sign the message hash.
    #[derive(Default)]
    SignatureScheme as "signature scheme" {
        /// Ed25519 signature (default).
        #[default]
        Ed25519 = "SIGNATURE_SCHEME_ED25519" / 1,
        /// ECDSA signature using the EIP-712 scheme.
        Eip712 = "SIGNATURE_SCHEME_EIP712" / 2,
    }
}

wire_enum! {
    /// Hashing scheme used to produce a digest of `MessageData`.
    #[derive(Default)]
    HashScheme as "hash scheme" {
        #[default]
        Blake3 = "HASH_SCHEME_BLAKE3" / 1,
    }
}

wire_enum! {
    /// Kind of name a [`UserNameProof`](crate::UserNameProof) binds.
    UserNameType as "username type" {
        /// Farcaster name issued by the fname registry.
        Fname = "USERNAME_TYPE_FNAME" / 1,
        /// ENS name on L1.
        EnsL1 = "USERNAME_TYPE_ENS_L1" / 2,
    }
}

wire_enum! {
    SignerEventType as "signer event type" {
        Add = "SIGNER_EVENT_TYPE_ADD" / 1,
        Remove = "SIGNER_EVENT_TYPE_REMOVE" / 2,
        AdminReset = "SIGNER_EVENT_TYPE_ADMIN_RESET" / 3,
    }
}

wire_enum! {
    IdRegisterEventType as "id register event type" {
        Register = "ID_REGISTER_EVENT_TYPE_REGISTER" / 1,
        Transfer = "ID_REGISTER_EVENT_TYPE_TRANSFER" / 2,
        ChangeRecovery = "ID_REGISTER_EVENT_TYPE_CHANGE_RECOVERY" / 3,
    }
}

wire_enum! {
    /// Discriminator of a [`HubEvent`](crate::HubEvent).
    HubEventType as "hub event type" {
        MergeMessage = "HUB_EVENT_TYPE_MERGE_MESSAGE" / 1,
        PruneMessage = "HUB_EVENT_TYPE_PRUNE_MESSAGE" / 2,
        RevokeMessage = "HUB_EVENT_TYPE_REVOKE_MESSAGE" / 3,
        MergeUsernameProof = "HUB_EVENT_TYPE_MERGE_USERNAME_PROOF" / 6,
        MergeOnChainEvent = "HUB_EVENT_TYPE_MERGE_ON_CHAIN_EVENT" / 9,
    }
}

/// Type of link. Only `follow` is defined.
///
/// Links are keyed by a free-form string in the protocol, so unlike the other
/// enums this one has no numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LinkType {
    /// Follow another user.
    #[default]
    #[serde(rename = "follow")]
    Follow,
}

impl LinkType {
    pub const ALL: &'static [LinkType] = &[LinkType::Follow];

    pub const fn as_str(self) -> &'static str {
        match self {
            LinkType::Follow => "follow",
        }
    }

    /// Links have no numeric form; this is plain [`FromStr`].
    pub fn parse_lenient(s: &str) -> Result<Self, UnknownVariant> {
        s.parse()
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = UnknownVariant;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follow" => Ok(LinkType::Follow),
            _ => Err(UnknownVariant {
                kind: "link type",
                value: s.to_string(),
                expected: "follow".into(),
            }),
        }
    }
}
