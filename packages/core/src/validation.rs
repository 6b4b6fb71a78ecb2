use thiserror::Error;

use crate::enums::SignatureScheme;
use crate::message::{CastId, Embed, Message, MessageBody};
use crate::onchain::{OnChainEvent, OnChainEventBody};
use crate::patterns;
use crate::username::UserNameProof;

/// Errors returned when a value breaks the wire contract.
///
/// Field names use the JSON spelling with a dotted path from the root of
/// the checked object (e.g. `data.castAddBody.parentUrl`).
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must match {pattern}, got: {value:?}")]
    Pattern {
        field: String,
        pattern: &'static str,
        value: String,
    },

    #[error("{field} must be a URI with a scheme, got: {value:?}")]
    InvalidUri { field: String, value: String },

    #[error("fid must be greater than zero")]
    ZeroFid,

    #[error("signer is not a valid Ed25519 public key: {0}")]
    InvalidSignerKey(String),

    #[error("signature must not be empty")]
    EmptySignature,

    #[error("mentions and mentionsPositions must have the same length ({mentions} vs {positions})")]
    MentionsMismatch { mentions: usize, positions: usize },

    #[error("cast may have parentCastId or parentUrl, not both")]
    AmbiguousParent,

    #[error("reaction must target exactly one of targetCastId or targetUrl")]
    ReactionTarget,

    #[error("buttonIndex must be between 1 and 4 inclusive, got {0}")]
    ButtonIndex(u32),

    #[error("name must not be empty")]
    EmptyName,
}

/// Check a [`Message`] against the published wire schema only: field
/// patterns, `format: uri` fields and the `buttonIndex` range.
///
/// This is what a reader of hub responses can rely on. It accepts anything
/// the schema allows, including an empty signature, a signer of any hex
/// length and a reaction without a target.
pub fn validate_message_fields(message: &Message) -> Result<(), ValidationError> {
    pattern("hash", &message.hash, patterns::HASH_PATTERN, patterns::is_hash)?;
    pattern(
        "signature",
        &message.signature,
        patterns::BASE64_PATTERN,
        patterns::is_base64,
    )?;
    pattern(
        "signer",
        &message.signer,
        patterns::SIGNER_PATTERN,
        patterns::is_signer,
    )?;
    body_fields(&message.data.body)
}

/// Validate a [`Message`] the way the mock hub does on submit.
///
/// Runs [`validate_message_fields`] and then the protocol rules a hub
/// enforces before merging: a non-empty signature, a signer key matching
/// the signature scheme, a non-zero fid, aligned mentions, at most one cast
/// parent and exactly one reaction target. It does not recompute the hash
/// or decide signer authorization.
pub fn validate_message(message: &Message) -> Result<(), ValidationError> {
    validate_message_fields(message)?;

    if message.signature.is_empty() {
        return Err(ValidationError::EmptySignature);
    }
    match message.signature_scheme {
        SignatureScheme::Ed25519 => validate_ed25519_key("signer", &message.signer)?,
        SignatureScheme::Eip712 => pattern(
            "signer",
            &message.signer,
            patterns::ETH_ADDRESS_PATTERN,
            patterns::is_eth_address,
        )?,
    }

    if message.data.fid == 0 {
        return Err(ValidationError::ZeroFid);
    }

    body_rules(&message.data.body)
}

fn body_fields(body: &MessageBody) -> Result<(), ValidationError> {
    match body {
        MessageBody::CastAdd { body } => {
            if let Some(parent) = &body.parent_cast_id {
                cast_id("data.castAddBody.parentCastId", parent)?;
            }
            if let Some(url) = &body.parent_url {
                uri("data.castAddBody.parentUrl", url)?;
            }
            for (i, embed) in body.embeds.iter().enumerate() {
                match embed {
                    Embed::Url { url } => uri(&format!("data.castAddBody.embeds[{i}].url"), url)?,
                    Embed::Cast { cast_id: id } => {
                        cast_id(&format!("data.castAddBody.embeds[{i}].castId"), id)?
                    }
                }
            }
            Ok(())
        }
        MessageBody::CastRemove { body } => pattern(
            "data.castRemoveBody.targetHash",
            &body.target_hash,
            patterns::BASE64_PATTERN,
            patterns::is_base64,
        ),
        MessageBody::ReactionAdd { body } | MessageBody::ReactionRemove { body } => {
            if let Some(id) = &body.target_cast_id {
                cast_id("data.reactionBody.targetCastId", id)?;
            }
            if let Some(url) = &body.target_url {
                uri("data.reactionBody.targetUrl", url)?;
            }
            Ok(())
        }
        MessageBody::LinkAdd { .. } | MessageBody::LinkRemove { .. } => Ok(()),
        MessageBody::VerificationAddEthAddress { body } => {
            pattern(
                "data.verificationAddEthAddressBody.address",
                &body.address,
                patterns::ETH_ADDRESS_PATTERN,
                patterns::is_eth_address,
            )?;
            pattern(
                "data.verificationAddEthAddressBody.ethSignature",
                &body.eth_signature,
                patterns::BASE64_PATTERN,
                patterns::is_base64,
            )?;
            pattern(
                "data.verificationAddEthAddressBody.blockHash",
                &body.block_hash,
                patterns::BYTES32_PATTERN,
                patterns::is_bytes32,
            )
        }
        MessageBody::VerificationRemove { body } => pattern(
            "data.verificationRemoveBody.address",
            &body.address,
            patterns::VERIFICATION_REMOVE_ADDRESS_PATTERN,
            patterns::is_verification_remove_address,
        ),
        MessageBody::UserDataAdd { .. } => Ok(()),
        MessageBody::UsernameProof { body } => {
            validate_username_proof_at("data.usernameProofBody", body)
        }
        MessageBody::FrameAction { body } => {
            uri("data.frameActionBody.url", &body.url)?;
            if !(1..=4).contains(&body.button_index) {
                return Err(ValidationError::ButtonIndex(body.button_index));
            }
            cast_id("data.frameActionBody.castId", &body.cast_id)
        }
    }
}

fn body_rules(body: &MessageBody) -> Result<(), ValidationError> {
    match body {
        MessageBody::CastAdd { body } => {
            if body.mentions.len() != body.mentions_positions.len() {
                return Err(ValidationError::MentionsMismatch {
                    mentions: body.mentions.len(),
                    positions: body.mentions_positions.len(),
                });
            }
            if body.parent_cast_id.is_some() && body.parent_url.is_some() {
                return Err(ValidationError::AmbiguousParent);
            }
            let embedded = body.embeds.iter().filter_map(|embed| match embed {
                Embed::Cast { cast_id } => Some(cast_id),
                Embed::Url { .. } => None,
            });
            body.parent_cast_id.iter().chain(embedded).try_for_each(nonzero_fid)
        }
        MessageBody::ReactionAdd { body } | MessageBody::ReactionRemove { body } => {
            match (&body.target_cast_id, &body.target_url) {
                (Some(id), None) => nonzero_fid(id),
                (None, Some(_)) => Ok(()),
                _ => Err(ValidationError::ReactionTarget),
            }
        }
        MessageBody::LinkAdd { body } | MessageBody::LinkRemove { body } => {
            if body.target_fid == 0 {
                return Err(ValidationError::ZeroFid);
            }
            Ok(())
        }
        MessageBody::UsernameProof { body } if body.name.is_empty() => {
            Err(ValidationError::EmptyName)
        }
        MessageBody::FrameAction { body } => nonzero_fid(&body.cast_id),
        _ => Ok(()),
    }
}

/// Validate the pattern-constrained fields of a standalone [`UserNameProof`].
pub fn validate_username_proof(proof: &UserNameProof) -> Result<(), ValidationError> {
    validate_username_proof_at("", proof)
}

fn validate_username_proof_at(prefix: &str, proof: &UserNameProof) -> Result<(), ValidationError> {
    pattern(
        &join(prefix, "owner"),
        &proof.owner,
        patterns::HASH_PATTERN,
        patterns::is_hash,
    )?;
    pattern(
        &join(prefix, "signature"),
        &proof.signature,
        patterns::BASE64_PATTERN,
        patterns::is_base64,
    )
}

/// Validate the pattern-constrained fields of an [`OnChainEvent`].
pub fn validate_on_chain_event(event: &OnChainEvent) -> Result<(), ValidationError> {
    match &event.body {
        OnChainEventBody::Signer { body } => {
            pattern(
                "signerEventBody.key",
                &body.key,
                patterns::BYTES32_PATTERN,
                patterns::is_bytes32,
            )?;
            pattern(
                "signerEventBody.metadata",
                &body.metadata,
                patterns::BASE64_PATTERN,
                patterns::is_base64,
            )
        }
        OnChainEventBody::SignerMigrated { .. } => Ok(()),
        OnChainEventBody::IdRegister { body } => {
            for (field, value) in [
                ("idRegisterEventBody.to", &body.to),
                ("idRegisterEventBody.from", &body.from),
                ("idRegisterEventBody.recoveryAddress", &body.recovery_address),
            ] {
                pattern(field, value, patterns::HEX_PATTERN, patterns::is_hex)?;
            }
            Ok(())
        }
        OnChainEventBody::StorageRent { body } => pattern(
            "storageRentEventBody.payer",
            &body.payer,
            patterns::BASE64_PATTERN,
            patterns::is_base64,
        ),
    }
}

// --- helpers -----------------------------------------------------------------

fn pattern(
    field: &str,
    value: &str,
    pattern: &'static str,
    check: fn(&str) -> bool,
) -> Result<(), ValidationError> {
    if check(value) {
        Ok(())
    } else {
        Err(ValidationError::Pattern {
            field: field.to_string(),
            pattern,
            value: value.to_string(),
        })
    }
}

fn uri(field: &str, value: &str) -> Result<(), ValidationError> {
    if patterns::is_uri(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUri {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn cast_id(field: &str, id: &CastId) -> Result<(), ValidationError> {
    pattern(
        &format!("{field}.hash"),
        &id.hash,
        patterns::HASH_PATTERN,
        patterns::is_hash,
    )
}

fn nonzero_fid(id: &CastId) -> Result<(), ValidationError> {
    if id.fid == 0 {
        return Err(ValidationError::ZeroFid);
    }
    Ok(())
}

/// An Ed25519 signer must be 32 bytes and a valid curve point.
fn validate_ed25519_key(field: &str, value: &str) -> Result<(), ValidationError> {
    pattern(field, value, patterns::BYTES32_PATTERN, patterns::is_bytes32)?;
    let bytes = crate::signing::decode_key(value)
        .map_err(|e| ValidationError::InvalidSignerKey(e.to_string()))?;
    ed25519_dalek::VerifyingKey::from_bytes(&bytes)
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidSignerKey(e.to_string()))
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{FarcasterNetwork, LinkType, ReactionType, UserNameType};
    use crate::message::{CastAddBody, FrameActionBody, LinkBody, MessageData, ReactionBody};
    use crate::signing::sign_message;
    use ed25519_dalek::SigningKey;

    const HASH: &str = "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9";

    fn key() -> SigningKey {
        SigningKey::from_bytes(&[7u8; 32])
    }

    fn signed(body: MessageBody) -> Message {
        let data = MessageData {
            fid: 6833,
            timestamp: 48994466,
            network: FarcasterNetwork::Mainnet,
            body,
        };
        let mut msg = Message::new(data, "0xd2b1ddc6c88e865a33cb1a565e0058d757042974");
        sign_message(&mut msg, &key()).unwrap();
        msg
    }

    fn cast(text: &str) -> MessageBody {
        MessageBody::CastAdd {
            body: CastAddBody {
                text: text.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn valid_cast() {
        assert_eq!(validate_message(&signed(cast("gm"))), Ok(()));
    }

    #[test]
    fn bad_hash_rejected() {
        let mut msg = signed(cast("gm"));
        msg.hash = "0x1234".into();
        assert!(matches!(
            validate_message(&msg),
            Err(ValidationError::Pattern { ref field, .. }) if field == "hash"
        ));
    }

    #[test]
    fn empty_signature_rejected() {
        let mut msg = signed(cast("gm"));
        msg.signature.clear();
        assert_eq!(validate_message(&msg), Err(ValidationError::EmptySignature));
    }

    #[test]
    fn short_ed25519_signer_rejected() {
        let mut msg = signed(cast("gm"));
        msg.signer = "0xabcdef".into();
        assert!(matches!(
            validate_message(&msg),
            Err(ValidationError::Pattern { ref field, .. }) if field == "signer"
        ));
    }

    #[test]
    fn eip712_signer_must_be_address() {
        let mut msg = signed(cast("gm"));
        msg.signature_scheme = SignatureScheme::Eip712;
        assert!(validate_message(&msg).is_err());
        msg.signer = "0x00000000fcd5a8e45785c8a4b9a718c9348e4f18".into();
        assert_eq!(validate_message(&msg), Ok(()));
    }

    #[test]
    fn zero_fid_rejected() {
        let mut msg = signed(cast("gm"));
        msg.data.fid = 0;
        assert_eq!(validate_message(&msg), Err(ValidationError::ZeroFid));
    }

    #[test]
    fn mentions_must_align_with_positions() {
        let msg = signed(MessageBody::CastAdd {
            body: CastAddBody {
                text: "hi ".into(),
                mentions: vec![2],
                ..Default::default()
            },
        });
        assert_eq!(
            validate_message(&msg),
            Err(ValidationError::MentionsMismatch {
                mentions: 1,
                positions: 0
            })
        );
    }

    #[test]
    fn cast_with_two_parents_rejected() {
        let msg = signed(MessageBody::CastAdd {
            body: CastAddBody {
                text: "reply".into(),
                parent_cast_id: Some(CastId::new(2, HASH)),
                parent_url: Some("https://farcaster.xyz".into()),
                ..Default::default()
            },
        });
        assert_eq!(validate_message(&msg), Err(ValidationError::AmbiguousParent));
    }

    #[test]
    fn embed_url_needs_scheme() {
        let msg = signed(MessageBody::CastAdd {
            body: CastAddBody {
                text: "look".into(),
                embeds: vec![Embed::Url {
                    url: "farcaster.xyz".into(),
                }],
                ..Default::default()
            },
        });
        assert!(matches!(
            validate_message(&msg),
            Err(ValidationError::InvalidUri { .. })
        ));
    }

    #[test]
    fn reaction_needs_exactly_one_target() {
        let none = signed(MessageBody::ReactionAdd {
            body: ReactionBody {
                reaction_type: ReactionType::Like,
                target_cast_id: None,
                target_url: None,
            },
        });
        assert_eq!(validate_message(&none), Err(ValidationError::ReactionTarget));

        let one = signed(MessageBody::ReactionAdd {
            body: ReactionBody {
                reaction_type: ReactionType::Like,
                target_cast_id: Some(CastId::new(2, HASH)),
                target_url: None,
            },
        });
        assert_eq!(validate_message(&one), Ok(()));
    }

    #[test]
    fn wire_fields_allow_what_submit_rules_reject() {
        let mut unsigned = signed(cast("gm"));
        unsigned.signature.clear();
        unsigned.signer = "0xabcd".into();
        unsigned.data.fid = 0;
        assert_eq!(validate_message_fields(&unsigned), Ok(()));
        assert_eq!(validate_message(&unsigned), Err(ValidationError::EmptySignature));

        let untargeted = signed(MessageBody::ReactionAdd {
            body: ReactionBody {
                reaction_type: ReactionType::Like,
                target_cast_id: None,
                target_url: None,
            },
        });
        assert_eq!(validate_message_fields(&untargeted), Ok(()));
        assert_eq!(
            validate_message(&untargeted),
            Err(ValidationError::ReactionTarget)
        );
    }

    #[test]
    fn wire_fields_still_check_patterns() {
        let mut msg = signed(cast("gm"));
        msg.signer = "0x".into();
        assert!(matches!(
            validate_message_fields(&msg),
            Err(ValidationError::Pattern { ref field, .. }) if field == "signer"
        ));
        msg = signed(MessageBody::FrameAction {
            body: FrameActionBody {
                url: "https://frames.example/a".into(),
                button_index: 9,
                cast_id: CastId::new(2, HASH),
            },
        });
        assert_eq!(validate_message_fields(&msg), Err(ValidationError::ButtonIndex(9)));
    }

    #[test]
    fn link_to_fid_zero_rejected() {
        let msg = signed(MessageBody::LinkAdd {
            body: LinkBody {
                link_type: LinkType::Follow,
                display_timestamp: None,
                target_fid: 0,
            },
        });
        assert_eq!(validate_message(&msg), Err(ValidationError::ZeroFid));
    }

    #[test]
    fn frame_button_index_bounds() {
        for (index, ok) in [(0, false), (1, true), (4, true), (5, false)] {
            let msg = signed(MessageBody::FrameAction {
                body: FrameActionBody {
                    url: "https://frames.example/a".into(),
                    button_index: index,
                    cast_id: CastId::new(2, HASH),
                },
            });
            assert_eq!(validate_message(&msg).is_ok(), ok, "buttonIndex {index}");
        }
    }

    #[test]
    fn username_proof_owner_pattern() {
        let mut proof = UserNameProof {
            timestamp: 1690000000,
            name: "gavi".into(),
            owner: "0x00000000fcd5a8e45785c8a4b9a718c9348e4f18".into(),
            signature: "AAAA".into(),
            fid: 6833,
            name_type: UserNameType::Fname,
        };
        assert_eq!(validate_username_proof(&proof), Ok(()));
        proof.owner = "0x00".into();
        assert!(matches!(
            validate_username_proof(&proof),
            Err(ValidationError::Pattern { ref field, .. }) if field == "owner"
        ));
    }
}
