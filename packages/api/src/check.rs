//! Response and request conformance checks.
//!
//! The checker decodes a JSON body into the typed shape the catalog names for
//! an operation and then runs the core wire-pattern checks on it. Submit-time
//! hub rules such as non-empty signatures or 32-byte Ed25519 signers are not
//! part of the response contract and are not applied here.
//!
//! The checker never infers which branch of a union applies from the body
//! itself: message bodies are selected by `data.type`, and the two dual-shape
//! operations by the query parameters of the request that produced the
//! response.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use hubspec::{
    patterns, validate_message_fields, validate_on_chain_event, validate_username_proof, HubEvent,
    HubEventBody, Message, MessageType, OnChainEvent, OnChainEventType, ValidationError,
    BODY_KEYS,
};

use crate::error::ErrorResponse;
use crate::operation::{MessageSchema, Operation, ParamSchema, ResponseShape};
use crate::pagination::{decode_page_token, FidsResponse, Paged};
use crate::response::{
    EventsResponse, HubInfoResponse, OnChainEventsResponse, SignersResponse,
    StorageLimitsResponse, UsernameProofsResponse,
};

/// Query parameters of the request a response answers.
pub type QueryMap = BTreeMap<String, String>;

/// A way in which a request or response breaks the contract.
#[derive(Debug, Error)]
pub enum Violation {
    #[error("body is not a valid {schema}: {reason}")]
    Shape { schema: &'static str, reason: String },

    #[error("nextPageToken is not base64: {0:?}")]
    PageToken(String),

    #[error("message data must carry exactly one body, found {0:?}")]
    BodyCount(Vec<String>),

    #[error("{message_type} selects {expected}, but data carries {found}")]
    BodyMismatch {
        message_type: MessageType,
        expected: &'static str,
        found: String,
    },

    #[error("{schema} does not accept a {message_type} message")]
    MessageType {
        schema: &'static str,
        message_type: MessageType,
    },

    #[error("expected a {expected} event, got {found}")]
    EventType {
        expected: OnChainEventType,
        found: OnChainEventType,
    },

    #[error("event ids must strictly increase: {previous} then {next}")]
    EventOrder { previous: u64, next: u64 },

    #[error("nextPageEventId {next} must be greater than the last event id {last}")]
    NextEventId { next: u64, last: u64 },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("error response is missing {0:?}")]
    ErrorField(&'static str),

    #[error("missing required parameter {0:?}")]
    MissingParam(&'static str),

    #[error("{operation} does not accept parameter {name:?}")]
    UnknownParam {
        operation: &'static str,
        name: String,
    },

    #[error("invalid value {value:?} for parameter {name:?}")]
    InvalidParam { name: String, value: String },
}

fn decode<T: DeserializeOwned>(schema: &'static str, body: &Value) -> Result<T, Violation> {
    T::deserialize(body).map_err(|e| Violation::Shape {
        schema,
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// A `nextPageToken` is either empty (no more results) or base64.
pub fn check_page_token(token: &str) -> Result<(), Violation> {
    if token.is_empty() || patterns::is_base64(token) {
        Ok(())
    } else {
        Err(Violation::PageToken(token.to_string()))
    }
}

/// Check a `Message` object: `data` carries exactly one of the nine body
/// keys, that key is the one `data.type` selects, and every field matches
/// its pattern.
pub fn check_message_value(value: &Value) -> Result<Message, Violation> {
    let data = value
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| Violation::Shape {
            schema: "Message",
            reason: "missing data object".into(),
        })?;

    let found: Vec<String> = BODY_KEYS
        .iter()
        .filter(|key| data.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if found.len() != 1 {
        return Err(Violation::BodyCount(found));
    }

    let type_literal = data
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Violation::Shape {
            schema: "Message",
            reason: "data.type is missing".into(),
        })?;
    let message_type = type_literal
        .parse::<MessageType>()
        .map_err(|e| Violation::Shape {
            schema: "Message",
            reason: e.to_string(),
        })?;
    if found[0] != message_type.body_key() {
        return Err(Violation::BodyMismatch {
            message_type,
            expected: message_type.body_key(),
            found: found[0].clone(),
        });
    }

    let message: Message = decode("Message", value)?;
    validate_message_fields(&message)?;
    Ok(message)
}

fn check_typed_message(value: &Value, schema: MessageSchema) -> Result<Message, Violation> {
    let message = check_message_value(value)?;
    if !schema.accepts(message.message_type()) {
        return Err(Violation::MessageType {
            schema: schema.schema_name(),
            message_type: message.message_type(),
        });
    }
    Ok(message)
}

/// A page of messages: `messages` and a required `nextPageToken`.
fn check_paged(value: &Value, schema: MessageSchema) -> Result<(), Violation> {
    let page: Paged<Value> = decode("paged response", value)?;
    check_page_token(&page.next_page_token)?;
    for message in &page.messages {
        check_typed_message(message, schema)?;
    }
    Ok(())
}

fn check_on_chain_event(
    event: &OnChainEvent,
    expected: Option<OnChainEventType>,
) -> Result<(), Violation> {
    if let Some(expected) = expected {
        if event.event_type() != expected {
            return Err(Violation::EventType {
                expected,
                found: event.event_type(),
            });
        }
    }
    validate_on_chain_event(event)?;
    Ok(())
}

/// Decode a `HubEvent` and check everything it carries.
pub fn check_hub_event(value: &Value) -> Result<HubEvent, Violation> {
    let event: HubEvent = decode("HubEvent", value)?;
    match &event.body {
        HubEventBody::MergeMessage { body } => {
            validate_message_fields(&body.message)?;
            for deleted in &body.deleted_messages {
                validate_message_fields(deleted)?;
            }
        }
        HubEventBody::PruneMessage { body } => validate_message_fields(&body.message)?,
        HubEventBody::RevokeMessage { body } => validate_message_fields(&body.message)?,
        HubEventBody::MergeUsernameProof { body } => {
            for proof in [&body.username_proof, &body.deleted_username_proof]
                .into_iter()
                .flatten()
            {
                validate_username_proof(proof)?;
            }
            for message in [&body.username_proof_message, &body.deleted_username_proof_message]
                .into_iter()
                .flatten()
            {
                validate_message_fields(message)?;
            }
        }
        HubEventBody::MergeOnChainEvent { body } => validate_on_chain_event(&body.on_chain_event)?,
    }
    Ok(event)
}

/// A page of hub events: ids strictly increase, and a non-empty page's
/// `nextPageEventId` lies past its last id.
pub fn check_events_page(value: &Value) -> Result<EventsResponse, Violation> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawEvents {
        next_page_event_id: u64,
        events: Vec<Value>,
    }

    let raw: RawEvents = decode("events page", value)?;
    let mut events = Vec::with_capacity(raw.events.len());
    for event in &raw.events {
        let event = check_hub_event(event)?;
        if let Some(previous) = events.last().map(|e: &HubEvent| e.id) {
            if event.id <= previous {
                return Err(Violation::EventOrder {
                    previous,
                    next: event.id,
                });
            }
        }
        events.push(event);
    }
    if let Some(last) = events.last() {
        if raw.next_page_event_id <= last.id {
            return Err(Violation::NextEventId {
                next: raw.next_page_event_id,
                last: last.id,
            });
        }
    }
    Ok(EventsResponse {
        next_page_event_id: raw.next_page_event_id,
        events,
    })
}

/// An error payload carries all six required fields.
pub fn check_error(value: &Value) -> Result<ErrorResponse, Violation> {
    for field in ["errCode", "presentable", "name", "code", "details", "metadata"] {
        if value.get(field).is_none() {
            return Err(Violation::ErrorField(field));
        }
    }
    if value
        .get("metadata")
        .and_then(|m| m.get("errcode"))
        .is_none()
    {
        return Err(Violation::ErrorField("metadata.errcode"));
    }
    decode("ErrorResponse", value)
}

// ---------------------------------------------------------------------------
// Per-operation checks
// ---------------------------------------------------------------------------

/// Check the query of a request against an operation's parameters.
pub fn check_query(op: &Operation, query: &QueryMap) -> Result<(), Violation> {
    for param in op.required_params() {
        if !query.contains_key(param.name) {
            return Err(Violation::MissingParam(param.name));
        }
    }

    for (name, value) in query {
        let ok = match name.as_str() {
            "pageSize" if op.paged => ParamSchema::Integer.accepts(value),
            "reverse" if op.paged => ParamSchema::Boolean.accepts(value),
            "pageToken" if op.paged => decode_page_token(value).is_ok(),
            other => match op.param(other) {
                Some(param) => param.schema.accepts(value),
                None => {
                    return Err(Violation::UnknownParam {
                        operation: op.operation_id,
                        name: name.clone(),
                    })
                }
            },
        };
        if !ok {
            return Err(Violation::InvalidParam {
                name: name.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Check a 200 response body against the shape `op` documents.
///
/// `query` is the query of the request; it selects the branch of the
/// dual-shape operations.
pub fn check_response(op: &Operation, query: &QueryMap, body: &Value) -> Result<(), Violation> {
    match op.response {
        ResponseShape::HubInfo => decode::<HubInfoResponse>("HubInfoResponse", body).map(drop),
        ResponseShape::Message(schema) => check_typed_message(body, schema).map(drop),
        ResponseShape::Paged(schema) => check_paged(body, schema),
        ResponseShape::UserData => {
            if query.contains_key("user_data_type") {
                check_typed_message(body, MessageSchema::UserDataAdd).map(drop)
            } else {
                check_paged(body, MessageSchema::UserDataAdd)
            }
        }
        ResponseShape::Fids => {
            let fids: FidsResponse = decode("FidsResponse", body)?;
            check_page_token(&fids.next_page_token)
        }
        ResponseShape::StorageLimits => {
            decode::<StorageLimitsResponse>("StorageLimitsResponse", body).map(drop)
        }
        ResponseShape::UsernameProofs => {
            let proofs: UsernameProofsResponse = decode("UsernameProofsResponse", body)?;
            for proof in &proofs.proofs {
                validate_username_proof(proof)?;
            }
            Ok(())
        }
        ResponseShape::UserNameProof => {
            validate_username_proof(&decode("UserNameProof", body)?)?;
            Ok(())
        }
        ResponseShape::OnChainIdRegister => {
            let event: OnChainEvent = decode("OnChainEventIdRegister", body)?;
            check_on_chain_event(&event, Some(OnChainEventType::IdRegister))
        }
        ResponseShape::OnChainEvents => {
            let list: OnChainEventsResponse = decode("OnChainEventsResponse", body)?;
            for event in &list.events {
                check_on_chain_event(event, None)?;
            }
            Ok(())
        }
        ResponseShape::Signers => {
            let filtered = query.contains_key("signer");
            let signers = SignersResponse::from_value(body.clone(), filtered).map_err(|e| {
                Violation::Shape {
                    schema: "OnChainEventSigner",
                    reason: e.to_string(),
                }
            })?;
            for event in signers.events() {
                check_on_chain_event(event, Some(OnChainEventType::Signer))?;
            }
            Ok(())
        }
        ResponseShape::ValidateMessage => {
            let valid = body.get("valid").and_then(Value::as_bool);
            let message = body.get("message");
            match (valid, message) {
                (Some(_), Some(message)) => check_message_value(message).map(drop),
                _ => Err(Violation::Shape {
                    schema: "ValidateMessageResponse",
                    reason: "requires valid and message".into(),
                }),
            }
        }
        ResponseShape::Events => check_events_page(body).map(drop),
        ResponseShape::HubEvent => check_hub_event(body).map(drop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubErrorCode;
    use ed25519_dalek::SigningKey;
    use serde_json::json;

    fn signer() -> String {
        let key = SigningKey::from_bytes(&[7u8; 32]);
        format!("0x{}", hex::encode(key.verifying_key().as_bytes()))
    }

    fn envelope(data: Value) -> Value {
        json!({
            "data": data,
            "hash": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974",
            "hashScheme": "HASH_SCHEME_BLAKE3",
            "signature": "AAAA",
            "signatureScheme": "SIGNATURE_SCHEME_ED25519",
            "signer": signer()
        })
    }

    fn cast_add() -> Value {
        envelope(json!({
            "type": "MESSAGE_TYPE_CAST_ADD",
            "fid": 6833,
            "timestamp": 48994466,
            "network": "FARCASTER_NETWORK_MAINNET",
            "castAddBody": {
                "embedsDeprecated": [],
                "mentions": [],
                "text": "gm",
                "mentionsPositions": [],
                "embeds": []
            }
        }))
    }

    fn user_data() -> Value {
        envelope(json!({
            "type": "MESSAGE_TYPE_USER_DATA_ADD",
            "fid": 1,
            "timestamp": 48994466,
            "network": "FARCASTER_NETWORK_MAINNET",
            "userDataBody": { "type": "USER_DATA_TYPE_BIO", "value": "hello" }
        }))
    }

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn op(id: &str) -> &'static Operation {
        Operation::find(id).unwrap()
    }

    #[test]
    fn page_without_next_page_token_is_rejected() {
        let body = json!({ "messages": [cast_add()] });
        let err = check_response(op("ListCastsByFid"), &query(&[("fid", "6833")]), &body);
        assert!(matches!(err, Err(Violation::Shape { .. })));

        let body = json!({ "messages": [cast_add()], "nextPageToken": "" });
        check_response(op("ListCastsByFid"), &query(&[("fid", "6833")]), &body).unwrap();
    }

    #[test]
    fn page_token_must_be_base64() {
        check_page_token("").unwrap();
        check_page_token("NDg5OTQ0NjY=").unwrap();
        assert!(matches!(check_page_token("NDg5!"), Err(Violation::PageToken(_))));
    }

    #[test]
    fn user_data_branch_follows_query() {
        let op = op("GetUserDataByFid");
        let page = json!({ "messages": [user_data()], "nextPageToken": "" });

        check_response(op, &query(&[("fid", "1")]), &page).unwrap();
        check_response(
            op,
            &query(&[("fid", "1"), ("user_data_type", "USER_DATA_TYPE_BIO")]),
            &user_data(),
        )
        .unwrap();

        assert!(check_response(op, &query(&[("fid", "1")]), &user_data()).is_err());
    }

    #[test]
    fn message_data_with_two_bodies_is_rejected() {
        let mut value = cast_add();
        value["data"]["userDataBody"] = json!({ "type": "USER_DATA_TYPE_BIO", "value": "x" });
        match check_message_value(&value) {
            Err(Violation::BodyCount(found)) => assert_eq!(found.len(), 2),
            other => panic!("expected BodyCount, got {other:?}"),
        }
    }

    #[test]
    fn body_must_match_type_tag() {
        let mut value = cast_add();
        value["data"]["type"] = json!("MESSAGE_TYPE_CAST_REMOVE");
        assert!(matches!(
            check_message_value(&value),
            Err(Violation::BodyMismatch { .. })
        ));
    }

    #[test]
    fn typed_response_rejects_other_message_types() {
        let err = check_response(
            op("GetCastById"),
            &query(&[("fid", "1"), ("hash", "0xd2b1ddc6c88e865a33cb1a565e0058d757042974")]),
            &user_data(),
        );
        assert!(matches!(err, Err(Violation::MessageType { .. })));
    }

    #[test]
    fn bad_hash_is_a_validation_violation() {
        let mut value = cast_add();
        value["hash"] = json!("0x1234");
        assert!(matches!(
            check_message_value(&value),
            Err(Violation::Invalid(ValidationError::Pattern { .. }))
        ));
    }

    #[test]
    fn schema_valid_messages_pass_without_hub_rules() {
        let mut short_signer = cast_add();
        short_signer["signer"] = json!("0xabcd");
        check_message_value(&short_signer).unwrap();

        let mut unsigned = cast_add();
        unsigned["signature"] = json!("");
        check_message_value(&unsigned).unwrap();

        let mut unaligned = cast_add();
        unaligned["data"]["castAddBody"]["mentions"] = json!([2]);
        check_message_value(&unaligned).unwrap();

        let untargeted = envelope(json!({
            "type": "MESSAGE_TYPE_REACTION_ADD",
            "fid": 6833,
            "timestamp": 48994466,
            "network": "FARCASTER_NETWORK_MAINNET",
            "reactionBody": { "type": "REACTION_TYPE_LIKE" }
        }));
        check_message_value(&untargeted).unwrap();
    }

    #[test]
    fn error_payload_needs_six_fields() {
        let ok = serde_json::to_value(ErrorResponse::new(HubErrorCode::NotFound, "not found"))
            .unwrap();
        check_error(&ok).unwrap();

        let mut missing = ok.clone();
        missing.as_object_mut().unwrap().remove("presentable");
        assert!(matches!(
            check_error(&missing),
            Err(Violation::ErrorField("presentable"))
        ));
    }

    #[test]
    fn events_must_increase() {
        let event = |id: u64| {
            json!({
                "type": "HUB_EVENT_TYPE_MERGE_MESSAGE",
                "id": id,
                "mergeMessageBody": { "message": cast_add(), "deletedMessages": [] }
            })
        };
        let ok = json!({ "nextPageEventId": 11, "events": [event(4), event(10)] });
        assert_eq!(check_events_page(&ok).unwrap().events.len(), 2);

        let unordered = json!({ "nextPageEventId": 11, "events": [event(10), event(4)] });
        assert!(matches!(
            check_events_page(&unordered),
            Err(Violation::EventOrder { previous: 10, next: 4 })
        ));

        let stale = json!({ "nextPageEventId": 10, "events": [event(10)] });
        assert!(matches!(
            check_events_page(&stale),
            Err(Violation::NextEventId { .. })
        ));

        let empty = json!({ "nextPageEventId": 0, "events": [] });
        check_events_page(&empty).unwrap();
    }

    #[test]
    fn query_checks_required_and_enum_params() {
        let op = op("ListReactionsByFid");
        check_query(op, &query(&[("fid", "2"), ("reaction_type", "1")])).unwrap();
        check_query(
            op,
            &query(&[("fid", "2"), ("reaction_type", "REACTION_TYPE_LIKE"), ("pageSize", "5")]),
        )
        .unwrap();
        assert!(matches!(
            check_query(op, &query(&[("fid", "2")])),
            Err(Violation::MissingParam("reaction_type"))
        ));
        assert!(matches!(
            check_query(op, &query(&[("fid", "2"), ("reaction_type", "like")])),
            Err(Violation::InvalidParam { .. })
        ));
        assert!(matches!(
            check_query(op, &query(&[("fid", "2"), ("reaction_type", "1"), ("cursor", "x")])),
            Err(Violation::UnknownParam { .. })
        ));
    }

    #[test]
    fn page_params_only_on_paged_operations() {
        assert!(matches!(
            check_query(op("GetEventById"), &query(&[("event_id", "1"), ("pageSize", "1")])),
            Err(Violation::UnknownParam { .. })
        ));
    }
}
