//! Deterministic sample data for the mock hub.
//!
//! Two fids (6833 and 2) with casts, reactions, links, user data, a
//! verification, on-chain registration, storage rent, a signer and an fname.
//! Values line up with the examples in the route catalog, so every example
//! request in the docs page returns data.
//!
//! Message hashes are stand-ins: the hub computes BLAKE3 over the protobuf
//! encoding of `data`, which the mock never sees. Fixture hashes are taken
//! from an Ed25519 signature over a label instead, so they are stable across
//! runs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use hubspec::{
    sign_message, CastAddBody, CastId, Embed, FarcasterNetwork, HubEventBody,
    IdRegisterEventBody, IdRegisterEventType, LinkBody, LinkType, Message, MessageBody,
    MergeOnChainEventBody, MergeUserNameProofBody, MessageData, OnChainEvent, OnChainEventBody,
    ReactionBody, ReactionType, SignerEventBody, SignerEventType, SigningError,
    StorageRentEventBody, UserDataBody, UserDataType, UserNameProof, UserNameType,
    VerificationAddEthAddressBody,
};

use super::{Storage, StorageError};

/// Seed of the key every fixture message is signed with.
pub const SIGNER_SEED: [u8; 32] = [0x5e; 32];

pub const PRIMARY_FID: u64 = 6833;
pub const SECONDARY_FID: u64 = 2;

/// Hash of 6833's root cast.
pub const ROOT_CAST_HASH: &str = "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9";
/// Hash of fid 2's reply, which mentions 6833.
pub const REPLY_CAST_HASH: &str = "0xd2b1ddc6c88e865a33cb1a565e0058d757042974";

/// Custody address of fid 6833.
pub const CUSTODY_ADDRESS: &str = "0x00000000fcd5a8e45785c8a4b9a718c9348e4f18";
/// Address verified by fid 6833.
pub const VERIFIED_ADDRESS: &str = "0x91031dcfdea024b4d51e775486111d2b2a715871";

pub const CHANNEL_URL: &str = "chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2";

/// Fname registered to fid 6833.
pub const FNAME: &str = "hubspec";

/// Storage units rented by fid 6833 across its two rent events.
pub const PRIMARY_STORAGE_UNITS: u64 = 3;

const BASE_TIMESTAMP: u64 = 48_994_466;
const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&SIGNER_SEED)
}

/// `0x`-prefixed hex of the fixture signer's public key.
pub fn signer_hex() -> String {
    format!("0x{}", hex::encode(signing_key().verifying_key().as_bytes()))
}

fn stand_in_hash(key: &SigningKey, label: &str) -> String {
    let signature = key.sign(label.as_bytes()).to_bytes();
    format!("0x{}", hex::encode(&signature[..20]))
}

fn signed(
    key: &SigningKey,
    hash: String,
    fid: u64,
    minutes: u64,
    body: MessageBody,
) -> Result<Message, SigningError> {
    let mut message = Message::new(
        MessageData {
            fid,
            timestamp: BASE_TIMESTAMP + minutes * 60,
            network: FarcasterNetwork::Mainnet,
            body,
        },
        hash,
    );
    sign_message(&mut message, key)?;
    Ok(message)
}

fn cast(text: &str, mentions: Vec<u64>, positions: Vec<u64>) -> CastAddBody {
    CastAddBody {
        embeds_deprecated: vec![],
        mentions,
        parent_cast_id: None,
        parent_url: None,
        text: text.into(),
        mentions_positions: positions,
        embeds: vec![],
    }
}

fn reaction(reaction_type: ReactionType, target_cast_id: CastId) -> MessageBody {
    MessageBody::ReactionAdd {
        body: ReactionBody {
            reaction_type,
            target_cast_id: Some(target_cast_id),
            target_url: None,
        },
    }
}

fn url_reaction(reaction_type: ReactionType, target_url: &str) -> MessageBody {
    MessageBody::ReactionAdd {
        body: ReactionBody {
            reaction_type,
            target_cast_id: None,
            target_url: Some(target_url.into()),
        },
    }
}

fn follow(target_fid: u64) -> MessageBody {
    MessageBody::LinkAdd {
        body: LinkBody {
            link_type: LinkType::Follow,
            display_timestamp: None,
            target_fid,
        },
    }
}

fn user_data(user_data_type: UserDataType, value: &str) -> MessageBody {
    MessageBody::UserDataAdd {
        body: UserDataBody {
            user_data_type,
            value: value.into(),
        },
    }
}

/// Every fixture message, signed, in no particular order.
pub fn messages() -> Result<Vec<Message>, SigningError> {
    let key = signing_key();
    let root = CastId::new(PRIMARY_FID, ROOT_CAST_HASH);

    let mut reply = cast("gm  and welcome", vec![PRIMARY_FID], vec![3]);
    reply.parent_cast_id = Some(CastId::new(226, ROOT_CAST_HASH));

    let mut channel_post = cast("new mint is live", vec![], vec![]);
    channel_post.parent_url = Some(CHANNEL_URL.into());
    channel_post.embeds = vec![
        Embed::Url {
            url: "https://farcaster.xyz".into(),
        },
        Embed::Cast {
            cast_id: root.clone(),
        },
    ];

    let h = |label: &str| stand_in_hash(&key, label);
    Ok(vec![
        signed(
            &key,
            ROOT_CAST_HASH.into(),
            PRIMARY_FID,
            0,
            MessageBody::CastAdd {
                body: cast("gm from hubspec", vec![], vec![]),
            },
        )?,
        signed(
            &key,
            REPLY_CAST_HASH.into(),
            SECONDARY_FID,
            1,
            MessageBody::CastAdd { body: reply },
        )?,
        signed(
            &key,
            h("cast:channel"),
            PRIMARY_FID,
            2,
            MessageBody::CastAdd { body: channel_post },
        )?,
        signed(
            &key,
            h("reaction:like-self"),
            PRIMARY_FID,
            3,
            reaction(ReactionType::Like, root.clone()),
        )?,
        signed(
            &key,
            h("reaction:recast"),
            SECONDARY_FID,
            4,
            reaction(ReactionType::Recast, root),
        )?,
        signed(
            &key,
            h("reaction:like-url"),
            PRIMARY_FID,
            5,
            url_reaction(ReactionType::Like, CHANNEL_URL),
        )?,
        signed(&key, h("link:6833-2"), PRIMARY_FID, 6, follow(SECONDARY_FID))?,
        signed(&key, h("link:2-6833"), SECONDARY_FID, 7, follow(PRIMARY_FID))?,
        signed(
            &key,
            h("user-data:bio"),
            PRIMARY_FID,
            8,
            user_data(UserDataType::Bio, "fixture account of the hubspec mock hub"),
        )?,
        signed(
            &key,
            h("user-data:display"),
            PRIMARY_FID,
            9,
            user_data(UserDataType::Display, "Hubspec"),
        )?,
        signed(
            &key,
            h("user-data:username"),
            PRIMARY_FID,
            10,
            user_data(UserDataType::Username, FNAME),
        )?,
        signed(
            &key,
            h("verification"),
            PRIMARY_FID,
            11,
            MessageBody::VerificationAddEthAddress {
                body: VerificationAddEthAddressBody {
                    address: VERIFIED_ADDRESS.into(),
                    eth_signature: BASE64.encode(key.sign(VERIFIED_ADDRESS.as_bytes()).to_bytes()),
                    block_hash: format!("0x{}", "1f".repeat(32)),
                },
            },
        )?,
    ])
}

fn on_chain(fid: u64, block_number: u64, log_index: u64, body: OnChainEventBody) -> OnChainEvent {
    OnChainEvent {
        chain_id: 10,
        block_number,
        block_hash: format!("0x{:064x}", block_number),
        block_timestamp: 1_695_000_000 + block_number,
        transaction_hash: format!("0x{:064x}", block_number * 1000 + log_index),
        log_index,
        tx_index: 0,
        fid,
        body,
    }
}

fn register(to: &str) -> OnChainEventBody {
    OnChainEventBody::IdRegister {
        body: IdRegisterEventBody {
            to: to.into(),
            event_type: IdRegisterEventType::Register,
            from: ZERO_ADDRESS.into(),
            recovery_address: ZERO_ADDRESS.into(),
        },
    }
}

fn rent(units: i64) -> OnChainEventBody {
    OnChainEventBody::StorageRent {
        body: StorageRentEventBody {
            payer: "AAAAAPzVqORXhcikuacYyTSOTxg=".into(),
            units,
            expiry: 1_726_000_000,
        },
    }
}

/// Registration, rent and signer events for both fixture fids.
pub fn on_chain_events() -> Vec<OnChainEvent> {
    vec![
        on_chain(SECONDARY_FID, 108_000_001, 0, register(ZERO_ADDRESS)),
        on_chain(PRIMARY_FID, 108_000_010, 0, register(CUSTODY_ADDRESS)),
        on_chain(PRIMARY_FID, 108_000_010, 1, rent(1)),
        on_chain(PRIMARY_FID, 108_000_020, 0, rent(2)),
        on_chain(
            PRIMARY_FID,
            108_000_030,
            0,
            OnChainEventBody::Signer {
                body: SignerEventBody {
                    key: signer_hex(),
                    key_type: 1,
                    event_type: SignerEventType::Add,
                    metadata: BASE64.encode(b"hubspec fixture signer"),
                    metadata_type: 1,
                },
            },
        ),
    ]
}

pub fn username_proofs() -> Vec<UserNameProof> {
    let key = signing_key();
    vec![UserNameProof {
        timestamp: 1_695_000_100,
        name: FNAME.into(),
        owner: CUSTODY_ADDRESS.into(),
        signature: BASE64.encode(key.sign(FNAME.as_bytes()).to_bytes()),
        fid: PRIMARY_FID,
        name_type: UserNameType::Fname,
    }]
}

/// Load every fixture into `storage`, appending the matching merge event for
/// each item: on-chain events first, then proofs, then messages by timestamp.
pub async fn seed(storage: &dyn Storage) -> Result<(), StorageError> {
    for event in on_chain_events() {
        storage.put_on_chain_event(&event).await?;
        storage
            .append_event(HubEventBody::MergeOnChainEvent {
                body: MergeOnChainEventBody {
                    on_chain_event: event,
                },
            })
            .await?;
    }

    for proof in username_proofs() {
        storage.put_username_proof(&proof).await?;
        storage
            .append_event(HubEventBody::MergeUsernameProof {
                body: MergeUserNameProofBody {
                    username_proof: Some(proof),
                    deleted_username_proof: None,
                    username_proof_message: None,
                    deleted_username_proof_message: None,
                },
            })
            .await?;
    }

    let mut messages = messages().map_err(|e| StorageError::Internal(e.to_string()))?;
    messages.sort_by_key(|m| m.data.timestamp);
    for message in messages {
        storage.put_message(&message).await?;
        storage.append_event(HubEventBody::merged(message)).await?;
    }

    tracing::debug!("mock hub seeded with fixtures");
    Ok(())
}
