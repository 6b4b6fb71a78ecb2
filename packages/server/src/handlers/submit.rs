//! Write path: `submitMessage` and `validateMessage`.
//!
//! Both routes take an `application/octet-stream` body. A real hub decodes
//! protobuf here; the mock reads the JSON encoding of a [`Message`] instead,
//! then applies the same contract checks the hub would.

use axum::{body::Bytes, extract::State, Json};
use hubspec::{validate_message, verify_signature, HubEventBody, Message, SignatureError};
use hubspec_api::ValidateMessageResponse;

use super::AppState;
use crate::error::AppError;

/// Decode and check a submitted envelope.
fn accept(body: &[u8]) -> Result<Message, AppError> {
    if body.is_empty() {
        return Err(AppError::ParseFailure("request body is empty".into()));
    }
    let message: Message = serde_json::from_slice(body)
        .map_err(|e| AppError::ParseFailure(format!("message does not decode: {e}")))?;

    validate_message(&message).map_err(|e| AppError::ValidationFailure(e.to_string()))?;
    match verify_signature(&message) {
        // EIP-712 signatures need chain state to check.
        Ok(()) | Err(SignatureError::UnsupportedScheme) => Ok(message),
        Err(e) => Err(AppError::ValidationFailure(e.to_string())),
    }
}

/// `POST /v1/submitMessage`
pub async fn submit_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Message>, AppError> {
    let message = accept(&body)?;
    state.storage.put_message(&message).await?;
    let event = state
        .storage
        .append_event(HubEventBody::merged(message.clone()))
        .await?;
    tracing::info!(
        fid = message.fid(),
        hash = %message.hash,
        event_id = event.id,
        "message merged"
    );
    Ok(Json(message))
}

/// `POST /v1/validateMessage`
pub async fn validate_message_only(body: Bytes) -> Result<Json<ValidateMessageResponse>, AppError> {
    let message = accept(&body)?;
    Ok(Json(ValidateMessageResponse {
        valid: true,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use ed25519_dalek::SigningKey;
    use hubspec::{
        sign_message, CastAddBody, FarcasterNetwork, Message, MessageBody, MessageData,
    };

    use crate::handlers::test_support::{app, get, post};
    use crate::storage::fixtures::{signer_hex, signing_key, PRIMARY_FID, ROOT_CAST_HASH};

    const NEW_HASH: &str = "0x1111111111111111111111111111111111111111";

    fn new_cast(key: &SigningKey) -> Message {
        let mut message = Message::new(
            MessageData {
                fid: PRIMARY_FID,
                timestamp: 49_000_000,
                network: FarcasterNetwork::Mainnet,
                body: MessageBody::CastAdd {
                    body: CastAddBody {
                        embeds_deprecated: vec![],
                        mentions: vec![],
                        parent_cast_id: None,
                        parent_url: None,
                        text: "fresh off the press".into(),
                        mentions_positions: vec![],
                        embeds: vec![],
                    },
                },
            },
            NEW_HASH,
        );
        sign_message(&mut message, key).unwrap();
        message
    }

    fn bytes(message: &Message) -> Vec<u8> {
        serde_json::to_vec(message).unwrap()
    }

    #[tokio::test]
    async fn submit_stores_and_logs_the_message() {
        let app = app().await;
        let (_, before) = get(app.clone(), "/v1/events").await;
        let events_before = before["events"].as_array().unwrap().len();

        let (status, body) = post(app.clone(), "/v1/submitMessage", bytes(&new_cast(&signing_key()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hash"], NEW_HASH);

        let uri = format!("/v1/castById?fid={PRIMARY_FID}&hash={NEW_HASH}");
        let (status, _) = get(app.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK);

        let (_, after) = get(app, "/v1/events").await;
        let events = after["events"].as_array().unwrap();
        assert_eq!(events.len(), events_before + 1);
        let last = &events[events.len() - 1];
        assert_eq!(last["type"], "HUB_EVENT_TYPE_MERGE_MESSAGE");
        assert_eq!(last["mergeMessageBody"]["message"]["hash"], NEW_HASH);
        assert_eq!(last["mergeMessageBody"]["deletedMessages"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn resubmitting_a_known_hash_is_duplicate() {
        let mut message = new_cast(&signing_key());
        message.signature.clear();
        message.hash = ROOT_CAST_HASH.into();
        sign_message(&mut message, &signing_key()).unwrap();

        let (status, body) = post(app().await, "/v1/submitMessage", bytes(&message)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.duplicate");
    }

    #[tokio::test]
    async fn empty_or_garbled_body_is_parse_failure() {
        let (status, body) = post(app().await, "/v1/submitMessage", vec![]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.parse_failure");

        let (status, body) = post(app().await, "/v1/validateMessage", b"\x0a\x02\x08\x01".to_vec()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.parse_failure");
    }

    #[tokio::test]
    async fn forged_signature_is_validation_failure() {
        let other = SigningKey::from_bytes(&[7u8; 32]);
        let mut message = new_cast(&other);
        message.signer = signer_hex();

        let (status, body) = post(app().await, "/v1/submitMessage", bytes(&message)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.validation_failure");
    }

    #[tokio::test]
    async fn validate_does_not_persist() {
        let app = app().await;
        let (status, body) = post(app.clone(), "/v1/validateMessage", bytes(&new_cast(&signing_key()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["message"]["hash"], NEW_HASH);

        let uri = format!("/v1/castById?fid={PRIMARY_FID}&hash={NEW_HASH}");
        let (status, _) = get(app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
