//! Data model of the Farcaster Hub REST API.
//!
//! This crate provides the wire types, string patterns, validation and
//! human-readable rendering shared by the `hubspec` HTTP contract, the schema
//! server and the CLI. Every type serialises to and from JSON exactly as the
//! hub's REST API emits it.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`enums`] | Wire enumerations: [`MessageType`], [`FarcasterNetwork`], [`ReactionType`], … |
//! | [`message`] | [`Message`], [`MessageData`] and the tagged [`MessageBody`] |
//! | [`onchain`] | [`OnChainEvent`] and its four bodies |
//! | [`event`] | [`HubEvent`] and its five bodies |
//! | [`username`] | [`UserNameProof`] |
//! | [`patterns`] | Published regex patterns and matchers |
//! | [`validation`] | Wire checks ([`validate_message_fields`]) and submit rules ([`validate_message`]) |
//! | [`signing`] | Ed25519 signing of message hashes |
//! | [`time`] | Farcaster epoch conversions |
//! | [`render`] | Plain-text rendering |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hubspec::{validate_message, Message, MessageType};
//!
//! let msg: Message = serde_json::from_str(json)?;
//! assert_eq!(msg.message_type(), MessageType::CastAdd);
//! validate_message(&msg)?;
//! ```

pub mod enums;
pub mod event;
pub mod message;
pub mod onchain;
pub mod patterns;
pub mod render;
pub mod signing;
pub mod time;
pub mod username;
pub mod validation;

pub use enums::{
    FarcasterNetwork, HashScheme, HubEventType, IdRegisterEventType, LinkType, MessageType,
    OnChainEventType, ReactionType, SignatureScheme, SignerEventType, StoreType, UnknownVariant,
    UserDataType, UserNameType, BODY_KEYS,
};
pub use event::{
    HubEvent, HubEventBody, MergeMessageBody, MergeOnChainEventBody, MergeUserNameProofBody,
    PruneMessageBody, RevokeMessageBody,
};
pub use message::{
    CastAddBody, CastId, CastRemoveBody, Embed, FrameActionBody, LinkBody, Message, MessageBody,
    MessageData, ReactionBody, UserDataBody, VerificationAddEthAddressBody,
    VerificationRemoveBody,
};
pub use onchain::{
    IdRegisterEventBody, OnChainEvent, OnChainEventBody, SignerEventBody,
    SignerMigratedEventBody, StorageRentEventBody,
};
pub use signing::{sign_message, verify_signature, SignatureError, SigningError};
pub use username::UserNameProof;
pub use validation::{
    validate_message, validate_message_fields, validate_on_chain_event, validate_username_proof,
    ValidationError,
};
