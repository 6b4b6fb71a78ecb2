//! End-to-end conformance tests for the Hub HTTP API contract.
//!
//! Each test spawns an ephemeral in-process mock hub (real TCP, real HTTP) via
//! [`hubspec_conformance::spawn_hub`] and exercises the documented surface with
//! a `reqwest` client. Every 200 body is run through
//! [`hubspec_api::check_response`] and every error body through
//! [`check_error`], so the mock and the contract checker keep each other
//! honest.
//!
//! # Coverage
//!
//! | Test | Area |
//! |------|------|
//! | `every_get_operation_conforms` | all GET routes of the catalog |
//! | `dual_shape_routes_follow_the_query` | userDataByFid, onChainSignersByFid |
//! | `cast_pages_walk_forward_to_empty_token` | pagination |
//! | `reverse_pages_walk_latest_first` | pagination |
//! | `errors_use_the_envelope` | 400 / 401 / 404 envelopes |
//! | `submitted_message_reaches_the_event_log` | submitMessage, events, eventById |
//! | `validate_message_does_not_merge` | validateMessage |
//! | `rejected_submissions` | parse / validation / duplicate failures |
//! | `openapi_document_matches_catalog` | /api-docs/openapi.json |
//! | `root_redirects_to_docs_page` | / and /api-docs |

use std::collections::BTreeSet;

use ed25519_dalek::SigningKey;
use hubspec::{sign_message, CastAddBody, FarcasterNetwork, Message, MessageBody, MessageData};
use hubspec_api::check::{check_error, check_events_page, check_page_token};
use hubspec_api::{check_query, check_response, Method, Operation, QueryMap, API_KEY_HEADER, CATALOG};
use hubspec_conformance::{spawn_hub, API_KEY};
use hubspec_server::fixtures::{
    signer_hex, CHANNEL_URL, CUSTODY_ADDRESS, FNAME, PRIMARY_FID, ROOT_CAST_HASH, SECONDARY_FID,
};
use rand::rngs::OsRng;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}

fn query(pairs: &[(&str, &str)]) -> QueryMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// GET `path` with the conformance API key; returns status and JSON body.
async fn get(client: &reqwest::Client, base: &str, path: &str, query: &QueryMap) -> (u16, Value) {
    let resp = client
        .get(format!("{base}{path}"))
        .header(API_KEY_HEADER, API_KEY)
        .query(query)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

async fn post_bytes(client: &reqwest::Client, base: &str, path: &str, body: Vec<u8>) -> (u16, Value) {
    let resp = client
        .post(format!("{base}{path}"))
        .header(API_KEY_HEADER, API_KEY)
        .header("content-type", "application/octet-stream")
        .body(body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

/// Call `operation_id` with `q`, assert 200, and check the body against the
/// catalog.
async fn call_ok(client: &reqwest::Client, base: &str, operation_id: &str, q: &QueryMap) -> Value {
    let op = Operation::find(operation_id).unwrap();
    check_query(op, q).unwrap_or_else(|e| panic!("{operation_id}: bad test query: {e}"));
    let (status, body) = get(client, base, op.path, q).await;
    assert_eq!(status, 200, "{operation_id} answered {status}: {body}");
    check_response(op, q, &body).unwrap_or_else(|e| panic!("{operation_id}: {e}\n{body}"));
    body
}

fn new_cast(key: &SigningKey, hash: &str, text: &str) -> Message {
    let mut message = Message::new(
        MessageData {
            fid: PRIMARY_FID,
            timestamp: 49_100_000,
            network: FarcasterNetwork::Mainnet,
            body: MessageBody::CastAdd {
                body: CastAddBody {
                    embeds_deprecated: vec![],
                    mentions: vec![],
                    parent_cast_id: None,
                    parent_url: Some(CHANNEL_URL.into()),
                    text: text.into(),
                    mentions_positions: vec![],
                    embeds: vec![],
                },
            },
        },
        hash,
    );
    sign_message(&mut message, key).unwrap();
    message
}

// ---------------------------------------------------------------------------
// Read path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_get_operation_conforms() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let (_, events) = get(&client, &base, "/v1/events", &QueryMap::new()).await;
    let event_id = events["events"][0]["id"].as_u64().unwrap().to_string();
    let primary = PRIMARY_FID.to_string();
    let secondary = SECONDARY_FID.to_string();

    let cases: Vec<(&str, QueryMap)> = vec![
        ("GetInfo", query(&[("dbstats", "true")])),
        ("GetCastById", query(&[("fid", primary.as_str()), ("hash", ROOT_CAST_HASH)])),
        ("ListCastsByFid", query(&[("fid", primary.as_str())])),
        ("ListCastsByMention", query(&[("fid", primary.as_str())])),
        ("ListCastsByParent", query(&[("url", CHANNEL_URL)])),
        (
            "GetReactionById",
            query(&[
                ("fid", primary.as_str()),
                ("target_fid", primary.as_str()),
                ("target_hash", ROOT_CAST_HASH),
                ("reaction_type", "REACTION_TYPE_LIKE"),
            ]),
        ),
        (
            "ListReactionsByCast",
            query(&[
                ("target_fid", primary.as_str()),
                ("target_hash", ROOT_CAST_HASH),
                ("reaction_type", "REACTION_TYPE_RECAST"),
            ]),
        ),
        (
            "ListReactionsByFid",
            query(&[("fid", primary.as_str()), ("reaction_type", "REACTION_TYPE_LIKE")]),
        ),
        (
            "ListReactionsByTarget",
            query(&[("url", CHANNEL_URL), ("reaction_type", "1")]),
        ),
        (
            "GetLinkById",
            query(&[("fid", primary.as_str()), ("target_fid", secondary.as_str()), ("link_type", "follow")]),
        ),
        ("ListLinksByFid", query(&[("fid", primary.as_str())])),
        ("ListLinksByTargetFid", query(&[("target_fid", primary.as_str())])),
        ("GetUserDataByFid", query(&[("fid", primary.as_str())])),
        ("ListFids", QueryMap::new()),
        ("GetStorageLimitsByFid", query(&[("fid", primary.as_str())])),
        ("ListUsernameProofsByFid", query(&[("fid", primary.as_str())])),
        ("GetUsernameProof", query(&[("name", FNAME)])),
        ("ListVerificationsByFid", query(&[("fid", primary.as_str())])),
        (
            "GetOnChainIdRegistrationByAddress",
            query(&[("address", CUSTODY_ADDRESS)]),
        ),
        (
            "ListOnChainEventsByFid",
            query(&[("fid", primary.as_str()), ("event_type", "EVENT_TYPE_SIGNER")]),
        ),
        ("ListOnChainSignersByFid", query(&[("fid", primary.as_str())])),
        ("ListEvents", query(&[("from_event_id", "0")])),
        ("GetEventById", query(&[("event_id", event_id.as_str())])),
    ];

    let covered: BTreeSet<&str> = cases.iter().map(|(id, _)| *id).collect();
    for op in CATALOG.iter().filter(|op| op.method == Method::Get) {
        assert!(covered.contains(op.operation_id), "{} is not exercised", op.operation_id);
    }

    for (operation_id, q) in &cases {
        call_ok(&client, &base, operation_id, q).await;
    }
}

#[tokio::test]
async fn dual_shape_routes_follow_the_query() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();
    let fid = PRIMARY_FID.to_string();

    let page = call_ok(&client, &base, "GetUserDataByFid", &query(&[("fid", fid.as_str())])).await;
    assert!(page["messages"].is_array());

    let single = call_ok(
        &client,
        &base,
        "GetUserDataByFid",
        &query(&[("fid", fid.as_str()), ("user_data_type", "USER_DATA_TYPE_BIO")]),
    )
    .await;
    assert_eq!(single["data"]["type"], "MESSAGE_TYPE_USER_DATA_ADD");

    let signer = signer_hex();
    let one = call_ok(
        &client,
        &base,
        "ListOnChainSignersByFid",
        &query(&[("fid", fid.as_str()), ("signer", signer.as_str())]),
    )
    .await;
    assert_eq!(one["type"], "EVENT_TYPE_SIGNER");
}

#[tokio::test]
async fn cast_pages_walk_forward_to_empty_token() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();
    let fid = PRIMARY_FID.to_string();

    let mut seen = BTreeSet::new();
    let mut token = String::new();
    for _ in 0..10 {
        let mut q = query(&[("fid", fid.as_str()), ("pageSize", "1")]);
        if !token.is_empty() {
            q.insert("pageToken".into(), token.clone());
        }
        let page = call_ok(&client, &base, "ListCastsByFid", &q).await;
        for m in page["messages"].as_array().unwrap() {
            assert!(seen.insert(m["hash"].as_str().unwrap().to_string()), "page repeated a cast");
        }
        token = page["nextPageToken"].as_str().unwrap().to_string();
        check_page_token(&token).unwrap();
        if token.is_empty() {
            break;
        }
    }
    assert!(token.is_empty(), "pagination did not terminate");
    assert_eq!(seen.len(), 2);
}

#[tokio::test]
async fn reverse_pages_walk_latest_first() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();
    let fid = PRIMARY_FID.to_string();

    let page = call_ok(
        &client,
        &base,
        "ListReactionsByFid",
        &query(&[("fid", fid.as_str()), ("reaction_type", "1"), ("reverse", "true")]),
    )
    .await;
    let stamps: Vec<u64> = page["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["data"]["timestamp"].as_u64().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn errors_use_the_envelope() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let missing = query(&[("fid", "6833"), ("hash", "0x0000000000000000000000000000000000000001")]);
    let (status, body) = get(&client, &base, "/v1/castById", &missing).await;
    assert_eq!(status, 404);
    assert_eq!(check_error(&body).unwrap().err_code, "not_found");

    let (status, body) = get(&client, &base, "/v1/castsByFid", &query(&[("fid", "x")])).await;
    assert_eq!(status, 400);
    assert_eq!(check_error(&body).unwrap().err_code, "bad_request.invalid_param");

    let resp = client
        .get(format!("{base}/v1/fids"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(check_error(&body).unwrap().err_code, "unauthenticated");

    let resp = client
        .get(format!("{base}/v1/fids"))
        .header(API_KEY_HEADER, "someone-else")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

// ---------------------------------------------------------------------------
// Write path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submitted_message_reaches_the_event_log() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let (_, before) = get(&client, &base, "/v1/events", &QueryMap::new()).await;
    let resume = before["nextPageEventId"].as_u64().unwrap();

    let key = SigningKey::generate(&mut OsRng);
    let hash = "0x2222222222222222222222222222222222222222";
    let message = new_cast(&key, hash, "conformance cast");
    let (status, body) =
        post_bytes(&client, &base, "/v1/submitMessage", serde_json::to_vec(&message).unwrap()).await;
    assert_eq!(status, 200, "{body}");
    check_response(Operation::find("SubmitMessage").unwrap(), &QueryMap::new(), &body).unwrap();
    assert_eq!(body["hash"], hash);

    let resume = resume.to_string();
    let page = call_ok(&client, &base, "ListEvents", &query(&[("from_event_id", resume.as_str())])).await;
    check_events_page(&page).unwrap();
    let events = page["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "HUB_EVENT_TYPE_MERGE_MESSAGE");
    assert_eq!(events[0]["mergeMessageBody"]["message"]["hash"], hash);

    let id = events[0]["id"].as_u64().unwrap().to_string();
    let one = call_ok(&client, &base, "GetEventById", &query(&[("event_id", id.as_str())])).await;
    assert_eq!(one, events[0]);

    let fid = PRIMARY_FID.to_string();
    call_ok(&client, &base, "GetCastById", &query(&[("fid", fid.as_str()), ("hash", hash)])).await;
}

#[tokio::test]
async fn validate_message_does_not_merge() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let key = SigningKey::generate(&mut OsRng);
    let hash = "0x3333333333333333333333333333333333333333";
    let bytes = serde_json::to_vec(&new_cast(&key, hash, "just checking")).unwrap();
    let (status, body) = post_bytes(&client, &base, "/v1/validateMessage", bytes).await;
    assert_eq!(status, 200, "{body}");
    check_response(Operation::find("ValidateMessage").unwrap(), &QueryMap::new(), &body).unwrap();
    assert_eq!(body["valid"], true);

    let q = query(&[("fid", "6833"), ("hash", hash)]);
    let (status, _) = get(&client, &base, "/v1/castById", &q).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn rejected_submissions() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let (status, body) = post_bytes(&client, &base, "/v1/submitMessage", b"not json".to_vec()).await;
    assert_eq!(status, 400);
    assert_eq!(check_error(&body).unwrap().err_code, "bad_request.parse_failure");

    let key = SigningKey::generate(&mut OsRng);
    let mut tampered = new_cast(&key, "0x4444444444444444444444444444444444444444", "original");
    if let MessageBody::CastAdd { body } = &mut tampered.data.body {
        body.text = "edited".into();
    }
    tampered.hash = "0x5555555555555555555555555555555555555555".into();
    let (status, body) =
        post_bytes(&client, &base, "/v1/submitMessage", serde_json::to_vec(&tampered).unwrap()).await;
    assert_eq!(status, 400);
    assert_eq!(check_error(&body).unwrap().err_code, "bad_request.validation_failure");

    let bytes = serde_json::to_vec(&new_cast(&key, "0x6666666666666666666666666666666666666666", "once")).unwrap();
    let (status, _) = post_bytes(&client, &base, "/v1/submitMessage", bytes.clone()).await;
    assert_eq!(status, 200);
    let (status, body) = post_bytes(&client, &base, "/v1/submitMessage", bytes).await;
    assert_eq!(status, 400);
    assert_eq!(check_error(&body).unwrap().err_code, "bad_request.duplicate");
}

// ---------------------------------------------------------------------------
// Documentation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn openapi_document_matches_catalog() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let doc: Value = client
        .get(format!("{base}/api-docs/openapi.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(doc["openapi"], "3.0.1");
    assert_eq!(doc["servers"][0]["url"], base.as_str());

    let documented: BTreeSet<&str> = doc["paths"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let catalog: BTreeSet<&str> = CATALOG.iter().map(|op| op.path).collect();
    assert_eq!(documented, catalog);

    for op in CATALOG {
        let entry = &doc["paths"][op.path][op.method.openapi_key()];
        assert_eq!(entry["operationId"], op.operation_id);
    }
}

#[tokio::test]
async fn root_redirects_to_docs_page() {
    let (base, _storage) = spawn_hub().await;
    let client = make_client();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.url().path(), "/api-docs");
    let html = resp.text().await.unwrap();
    assert!(html.contains("swagger-ui"));
    assert!(html.contains("/api-docs/openapi.json"));
}
