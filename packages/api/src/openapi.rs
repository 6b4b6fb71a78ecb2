//! OpenAPI 3.0 document for the hub REST API.
//!
//! [`document`] builds a deterministic `serde_json::Value` from the route
//! catalog and the wire enums; nothing is read from disk. Enum lists come
//! from the `ALL` tables in `hubspec`, so the document cannot drift from the
//! types that parse responses.

use serde_json::{json, Map, Value};

use hubspec::{
    patterns, FarcasterNetwork, HashScheme, IdRegisterEventType, LinkType, MessageType,
    OnChainEventType, ReactionType, SignatureScheme, SignerEventType, StoreType, UserDataType,
    UserNameType,
};

use crate::operation::{Example, Method, Operation, Param, ParamSchema, ResponseShape, CATALOG};

/// Server advertised when none is configured.
pub const DEFAULT_SERVER_URL: &str = "https://hubs.dev.airstack.xyz";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-airstack-hubs";

const TITLE: &str = "Farcaster Hub REST API";
const VERSION: &str = "1.0";
const DESCRIPTION: &str = "Perform basic queries of Farcaster state via the REST API of a \
Farcaster hub. See the [Farcaster docs](https://www.thehubble.xyz/docs/httpapi/httpapi.html) for \
more details. Some client libraries:\n  - \
[TypeScript](https://www.npmjs.com/package/@standard-crypto/farcaster-js-hub-rest)\n";

const MESSAGE_DESCRIPTION: &str = "* \nA Message is a delta operation on the Farcaster network. \
The message protobuf is an envelope \nthat wraps a MessageData object and contains a hash and \
signature which can verify its authenticity.";

const NETWORK_DESCRIPTION: &str = "Farcaster network the message is intended for.\n\
- FARCASTER_NETWORK_MAINNET: Public primary network\n \
- FARCASTER_NETWORK_TESTNET: Public test network\n \
- FARCASTER_NETWORK_DEVNET: Private test network";

const HASH_SCHEME_DESCRIPTION: &str = "Type of hashing scheme used to produce a digest of \
MessageData. - HASH_SCHEME_BLAKE3: Default scheme for hashing MessageData\n";

const LINK_TYPE_DESCRIPTION: &str = "Type of Link.\n- follow: Follow another user";

const MESSAGE_TYPE_DESCRIPTION: &str = "Type of the MessageBody.\n \
- MESSAGE_TYPE_CAST_ADD: Add a new Cast\n \
- MESSAGE_TYPE_CAST_REMOVE: Remove an existing Cast\n \
- MESSAGE_TYPE_REACTION_ADD: Add a Reaction to a Cast\n \
- MESSAGE_TYPE_REACTION_REMOVE: Remove a Reaction from a Cast\n \
- MESSAGE_TYPE_LINK_ADD: Add a new Link\n \
- MESSAGE_TYPE_LINK_REMOVE: Remove an existing Link\n \
- MESSAGE_TYPE_VERIFICATION_ADD_ETH_ADDRESS: Add a Verification of an Ethereum Address\n \
- MESSAGE_TYPE_VERIFICATION_REMOVE: Remove a Verification\n \
- MESSAGE_TYPE_USER_DATA_ADD: Add metadata about a user\n \
- MESSAGE_TYPE_USERNAME_PROOF: Add or replace a username proof\n \
- MESSAGE_TYPE_FRAME_ACTION: A Farcaster Frame action";

const REACTION_TYPE_DESCRIPTION: &str = "Type of Reaction.\n\
- REACTION_TYPE_LIKE: Like the target cast\n \
- REACTION_TYPE_RECAST: Share target cast to the user's audience";

const SIGNATURE_SCHEME_DESCRIPTION: &str = "Type of signature scheme used to sign the Message \
hash\n- SIGNATURE_SCHEME_ED25519: Ed25519 signature (default)\n \
- SIGNATURE_SCHEME_EIP712: ECDSA signature using EIP-712 scheme";

const USER_DATA_TYPE_DESCRIPTION: &str = "Type of UserData.\n\
- USER_DATA_TYPE_PFP: Profile Picture for the user\n \
- USER_DATA_TYPE_DISPLAY: Display Name for the user\n \
- USER_DATA_TYPE_BIO: Bio for the user\n \
- USER_DATA_TYPE_URL: URL of the user\n \
- USER_DATA_TYPE_USERNAME: Preferred Name for the user";

const CHAIN_URL_EXAMPLE: &str =
    "chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2";
const ADDRESS_EXAMPLE: &str = "0x00000000fcd5a8e45785c8a4b9a718c9348e4f18";

/// Options that vary between deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocOptions {
    /// Base URLs listed under `servers`.
    pub servers: Vec<String>,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            servers: vec![DEFAULT_SERVER_URL.to_string()],
        }
    }
}

/// Build the OpenAPI document.
pub fn document(options: &DocOptions) -> Value {
    let servers: Vec<Value> = options
        .servers
        .iter()
        .map(|url| json!({ "url": url }))
        .collect();

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": TITLE,
            "version": VERSION,
            "description": DESCRIPTION,
        },
        "servers": servers,
        "security": [{ "ApiKeyAuth": [] }],
        "paths": paths(),
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": { "type": "apiKey", "in": "header", "name": API_KEY_HEADER }
            },
            "parameters": {
                "pageSize": {
                    "name": "pageSize",
                    "in": "query",
                    "description": "Maximum number of messages to return in a single response",
                    "schema": { "type": "integer" }
                },
                "paginationReverse": {
                    "name": "reverse",
                    "in": "query",
                    "description": "Reverse the sort order, returning latest messages first",
                    "schema": { "type": "boolean" }
                },
                "pageToken": {
                    "name": "pageToken",
                    "in": "query",
                    "description": "The page token returned by the previous query, to fetch the next page. If this parameter is empty, fetch the first page",
                    "schema": { "type": "string" }
                }
            },
            "schemas": schemas(),
            "responses": {
                "ErrorResponse": {
                    "description": "An unexpected error response.",
                    "content": {
                        "application/json": { "schema": schema_ref("ErrorResponse") }
                    }
                }
            }
        }
    })
}

/// The document rendered as YAML.
pub fn document_yaml(options: &DocOptions) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&document(options))
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

fn paths() -> Value {
    let mut paths = Map::new();
    for op in CATALOG {
        let item = paths
            .entry(op.path)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(methods) = item {
            methods.insert(op.method.openapi_key().to_string(), operation(op));
        }
    }
    Value::Object(paths)
}

fn operation(op: &Operation) -> Value {
    let mut params: Vec<Value> = op.params.iter().map(parameter).collect();
    if op.paged {
        for name in ["pageSize", "paginationReverse", "pageToken"] {
            params.push(json!({ "$ref": format!("#/components/parameters/{name}") }));
        }
    }

    let mut obj = Map::new();
    if op.secured {
        obj.insert("security".into(), json!([{ "ApiKeyAuth": [] }]));
    }
    obj.insert("tags".into(), json!([op.tag]));
    obj.insert("operationId".into(), json!(op.operation_id));
    obj.insert("summary".into(), json!(op.summary));
    if let Some(description) = op.description {
        obj.insert("description".into(), json!(description));
    }
    if !params.is_empty() || op.method == Method::Get {
        obj.insert("parameters".into(), Value::Array(params));
    }
    if op.request_body {
        obj.insert(
            "requestBody".into(),
            json!({
                "description": MESSAGE_DESCRIPTION,
                "content": {
                    "application/octet-stream": {
                        "schema": { "type": "string", "format": "binary" }
                    }
                },
                "required": true
            }),
        );
    }
    obj.insert(
        "responses".into(),
        json!({
            "200": {
                "description": op.response_description,
                "content": {
                    "application/json": { "schema": response_schema(op.response) }
                }
            },
            "default": { "$ref": "#/components/responses/ErrorResponse" }
        }),
    );
    if op.codegen_body_name {
        obj.insert("x-codegen-request-body-name".into(), json!("body"));
    }
    Value::Object(obj)
}

fn parameter(param: &Param) -> Value {
    let schema = match param.schema {
        ParamSchema::Integer => json!({ "type": "integer" }),
        ParamSchema::Boolean => json!({ "type": "boolean" }),
        ParamSchema::String => json!({ "type": "string" }),
        ParamSchema::Hash => json!({ "type": "string", "pattern": patterns::HASH_PATTERN }),
        ParamSchema::Enum(e) => schema_ref(e.schema_name()),
    };
    let mut out = json!({
        "name": param.name,
        "in": "query",
        "required": param.required,
        "schema": schema,
    });
    if let Value::Object(obj) = &mut out {
        if let Some(description) = param.description {
            obj.insert("description".into(), json!(description));
        }
        match param.example {
            Some(Example::Int(n)) => {
                obj.insert("example".into(), json!(n));
            }
            Some(Example::Str(s)) => {
                obj.insert("example".into(), json!(s));
            }
            Some(Example::Named(named)) => {
                let examples: Map<String, Value> = named
                    .iter()
                    .map(|(name, value)| (name.to_string(), json!({ "value": value })))
                    .collect();
                obj.insert("examples".into(), Value::Object(examples));
            }
            None => {}
        }
    }
    out
}

fn response_schema(shape: ResponseShape) -> Value {
    match shape {
        ResponseShape::HubInfo => schema_ref("HubInfoResponse"),
        ResponseShape::Message(m) => schema_ref(m.schema_name()),
        ResponseShape::Paged(m) => paged_messages(m.schema_name()),
        ResponseShape::UserData => json!({
            "oneOf": [schema_ref("UserDataAdd"), paged_messages("UserDataAdd")]
        }),
        ResponseShape::Fids => schema_ref("FidsResponse"),
        ResponseShape::StorageLimits => schema_ref("StorageLimitsResponse"),
        ResponseShape::UsernameProofs => schema_ref("UsernameProofsResponse"),
        ResponseShape::UserNameProof => schema_ref("UserNameProof"),
        ResponseShape::OnChainIdRegister => schema_ref("OnChainEventIdRegister"),
        ResponseShape::OnChainEvents => events_list("OnChainEvent"),
        ResponseShape::Signers => json!({
            "oneOf": [schema_ref("OnChainEventSigner"), events_list("OnChainEventSigner")]
        }),
        ResponseShape::ValidateMessage => schema_ref("ValidateMessageResponse"),
        ResponseShape::Events => json!({
            "type": "object",
            "properties": {
                "nextPageEventId": { "type": "integer" },
                "events": { "type": "array", "items": schema_ref("HubEvent") }
            },
            "required": ["nextPageEventId", "events"]
        }),
        ResponseShape::HubEvent => schema_ref("HubEvent"),
    }
}

fn paged_messages(item: &str) -> Value {
    json!({
        "type": "object",
        "required": ["messages", "nextPageToken"],
        "properties": {
            "messages": { "type": "array", "items": schema_ref(item) },
            "nextPageToken": base64_field()
        }
    })
}

fn events_list(item: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "events": { "type": "array", "items": schema_ref(item) }
        },
        "required": ["events"]
    })
}

// ---------------------------------------------------------------------------
// Schema helpers
// ---------------------------------------------------------------------------

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn base64_field() -> Value {
    json!({ "pattern": patterns::BASE64_PATTERN, "type": "string", "format": "byte" })
}

fn uint64() -> Value {
    json!({ "type": "integer", "format": "uint64" })
}

fn int64() -> Value {
    json!({ "type": "integer", "format": "int64" })
}

fn with_title(mut schema: Value, title: &str) -> Value {
    if let Value::Object(obj) = &mut schema {
        obj.insert("title".into(), json!(title));
    }
    schema
}

/// String enum whose default is its first literal.
fn enum_schema(literals: &[&str], description: Option<&str>) -> Value {
    let mut schema = json!({
        "type": "string",
        "default": literals.first().copied().unwrap_or_default(),
        "enum": literals,
    });
    if let (Some(d), Value::Object(obj)) = (description, &mut schema) {
        obj.insert("description".into(), json!(d));
    }
    schema
}

macro_rules! literals {
    ($ty:ty) => {
        <$ty>::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>()
    };
}

/// Name of the `MessageData*` schema carrying `t`'s body.
fn message_data_schema(t: MessageType) -> &'static str {
    match t {
        MessageType::CastAdd => "MessageDataCastAdd",
        MessageType::CastRemove => "MessageDataCastRemove",
        MessageType::ReactionAdd | MessageType::ReactionRemove => "MessageDataReaction",
        MessageType::LinkAdd | MessageType::LinkRemove => "MessageDataLink",
        MessageType::VerificationAddEthAddress => "MessageDataVerificationAdd",
        MessageType::VerificationRemove => "MessageDataVerificationRemove",
        MessageType::UserDataAdd => "MessageDataUserDataAdd",
        MessageType::UsernameProof => "MessageDataUsernameProof",
        MessageType::FrameAction => "MessageDataFrameAction",
    }
}

/// `MessageData*`: the common fields plus one required body key.
fn message_data(body_key: &str, body_schema: &str) -> Value {
    json!({
        "allOf": [
            schema_ref("MessageDataCommon"),
            {
                "type": "object",
                "required": [body_key],
                "properties": { body_key: schema_ref(body_schema) }
            }
        ]
    })
}

/// A typed message schema such as `CastAdd`.
fn message_variant(data_schema: &str) -> Value {
    json!({
        "allOf": [
            schema_ref("MessageCommon"),
            {
                "type": "object",
                "properties": {
                    "data": {
                        "allOf": [
                            schema_ref(data_schema),
                            {
                                "type": "object",
                                "properties": { "type": schema_ref("MessageType") },
                                "required": ["type"]
                            }
                        ]
                    }
                },
                "required": ["data"]
            }
        ]
    })
}

fn on_chain_variant(body_key: &str, body_schema: &str) -> Value {
    json!({
        "allOf": [
            schema_ref("OnChainEventCommon"),
            {
                "type": "object",
                "properties": { body_key: schema_ref(body_schema) },
                "required": [body_key]
            }
        ]
    })
}

fn hub_event_variant(event_type: &str, body_key: &str, body_schema: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "type": { "type": "string", "example": event_type },
            "id": uint64(),
            body_key: schema_ref(body_schema)
        },
        "required": ["type", "id", body_key]
    })
}

// ---------------------------------------------------------------------------
// Component schemas
// ---------------------------------------------------------------------------

fn schemas() -> Value {
    let mut s = Map::new();
    message_schemas(&mut s);
    body_schemas(&mut s);
    on_chain_schemas(&mut s);
    hub_event_schemas(&mut s);
    response_schemas(&mut s);
    enum_schemas(&mut s);
    Value::Object(s)
}

fn message_schemas(s: &mut Map<String, Value>) {
    let data_variants = [
        "MessageDataCastAdd",
        "MessageDataCastRemove",
        "MessageDataReaction",
        "MessageDataLink",
        "MessageDataVerificationAdd",
        "MessageDataVerificationRemove",
        "MessageDataUserDataAdd",
        "MessageDataUsernameProof",
        "MessageDataFrameAction",
    ];
    let mapping: Map<String, Value> = MessageType::ALL
        .iter()
        .map(|t| {
            (
                t.as_str().to_string(),
                json!(format!("#/components/schemas/{}", message_data_schema(*t))),
            )
        })
        .collect();

    s.insert(
        "Message".into(),
        json!({
            "allOf": [
                {
                    "type": "object",
                    "properties": {
                        "data": {
                            "oneOf": data_variants.iter().map(|n| schema_ref(n)).collect::<Vec<_>>(),
                            "discriminator": { "propertyName": "type", "mapping": mapping }
                        }
                    },
                    "required": ["data"]
                },
                schema_ref("MessageCommon")
            ],
            "description": MESSAGE_DESCRIPTION
        }),
    );

    s.insert(
        "MessageCommon".into(),
        json!({
            "type": "object",
            "properties": {
                "hash": {
                    "title": "Hash digest of data",
                    "pattern": patterns::HASH_PATTERN,
                    "type": "string",
                    "example": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974"
                },
                "hashScheme": schema_ref("HashScheme"),
                "signature": with_title(base64_field(), "Signature of the hash digest"),
                "signatureScheme": schema_ref("SignatureScheme"),
                "signer": {
                    "title": "Public key or address of the key pair that produced the signature",
                    "pattern": patterns::SIGNER_PATTERN,
                    "type": "string"
                }
            },
            "required": ["hash", "hashScheme", "signature", "signatureScheme", "signer"]
        }),
    );

    s.insert(
        "MessageDataCommon".into(),
        json!({
            "required": ["fid", "network", "timestamp"],
            "type": "object",
            "properties": {
                "fid": {
                    "title": "Farcaster ID of the user producing the message",
                    "type": "integer",
                    "format": "uint64",
                    "example": 2
                },
                "timestamp": {
                    "title": "Farcaster epoch timestamp in seconds",
                    "type": "integer",
                    "format": "int64",
                    "example": 48994466
                },
                "network": schema_ref("FarcasterNetwork")
            }
        }),
    );

    for (name, key, body) in [
        ("MessageDataCastAdd", "castAddBody", "CastAddBody"),
        ("MessageDataCastRemove", "castRemoveBody", "CastRemoveBody"),
        ("MessageDataFrameAction", "frameActionBody", "FrameActionBody"),
        ("MessageDataLink", "linkBody", "LinkBody"),
        ("MessageDataReaction", "reactionBody", "ReactionBody"),
        ("MessageDataUserDataAdd", "userDataBody", "UserDataBody"),
        ("MessageDataUsernameProof", "usernameProofBody", "UserNameProof"),
        (
            "MessageDataVerificationAdd",
            "verificationAddEthAddressBody",
            "VerificationAddEthAddressBody",
        ),
        (
            "MessageDataVerificationRemove",
            "verificationRemoveBody",
            "VerificationRemoveBody",
        ),
    ] {
        s.insert(name.into(), message_data(key, body));
    }

    for (name, data) in [
        ("CastAdd", "MessageDataCastAdd"),
        ("CastRemove", "MessageDataCastRemove"),
        ("LinkAdd", "MessageDataLink"),
        ("LinkRemove", "MessageDataLink"),
        ("Reaction", "MessageDataReaction"),
        ("UserDataAdd", "MessageDataUserDataAdd"),
        ("Verification", "MessageDataVerificationAdd"),
        ("VerificationRemove", "MessageDataVerificationRemove"),
    ] {
        s.insert(name.into(), message_variant(data));
    }

    // ReactionRemove does not pin the `type` field.
    s.insert(
        "ReactionRemove".into(),
        json!({
            "allOf": [
                schema_ref("MessageCommon"),
                {
                    "type": "object",
                    "properties": { "data": schema_ref("MessageDataReaction") },
                    "required": ["data"]
                }
            ]
        }),
    );
}

fn body_schemas(s: &mut Map<String, Value>) {
    s.insert(
        "CastAddBody".into(),
        json!({
            "description": "Adds a new Cast",
            "type": "object",
            "properties": {
                "embedsDeprecated": {
                    "title": "URLs to be embedded in the cast",
                    "type": "array",
                    "items": { "type": "string" }
                },
                "mentions": {
                    "title": "Fids mentioned in the cast",
                    "type": "array",
                    "items": { "type": "integer", "format": "uint64", "example": 2 }
                },
                "parentCastId": schema_ref("CastId"),
                "parentUrl": {
                    "title": "Parent URL",
                    "type": "string",
                    "example": CHAIN_URL_EXAMPLE
                },
                "text": { "title": "Text of the cast", "type": "string" },
                "mentionsPositions": {
                    "title": "Positions of the mentions in the text",
                    "type": "array",
                    "items": int64()
                },
                "embeds": {
                    "title": "URLs or cast ids to be embedded in the cast",
                    "type": "array",
                    "items": schema_ref("Embed")
                }
            },
            "required": ["embedsDeprecated", "mentions", "text", "mentionsPositions", "embeds"]
        }),
    );

    s.insert(
        "CastEmbed".into(),
        json!({
            "type": "object",
            "properties": { "castId": schema_ref("CastId") },
            "required": ["castId"]
        }),
    );
    s.insert(
        "UrlEmbed".into(),
        json!({
            "type": "object",
            "properties": { "url": { "type": "string", "format": "uri" } },
            "required": ["url"]
        }),
    );
    s.insert(
        "Embed".into(),
        json!({ "oneOf": [schema_ref("CastEmbed"), schema_ref("UrlEmbed")] }),
    );

    s.insert(
        "CastId".into(),
        json!({
            "description": "Identifier used to look up a Cast",
            "required": ["fid", "hash"],
            "type": "object",
            "properties": {
                "fid": with_title(uint64(), "Fid of the user who created the cast"),
                "hash": schema_ref("CastHash")
            }
        }),
    );
    s.insert(
        "CastHash".into(),
        json!({ "pattern": patterns::HASH_PATTERN, "type": "string" }),
    );

    s.insert(
        "CastRemoveBody".into(),
        json!({
            "description": "Removes an existing Cast",
            "type": "object",
            "properties": {
                "targetHash": with_title(base64_field(), "Hash of the cast to remove")
            },
            "required": ["targetHash"]
        }),
    );

    s.insert(
        "FrameActionBody".into(),
        json!({
            "description": "A Farcaster Frame action",
            "type": "object",
            "properties": {
                "url": { "type": "string", "format": "uri" },
                "buttonIndex": {
                    "title": "The index of the button pressed (1-4)",
                    "type": "integer",
                    "format": "int32",
                    "minimum": 1,
                    "maximum": 4
                },
                "castId": schema_ref("CastId")
            },
            "required": ["url", "buttonIndex", "castId"]
        }),
    );

    s.insert(
        "LinkBody".into(),
        json!({
            "description": "Adds or removes a Link",
            "type": "object",
            "properties": {
                "type": schema_ref("LinkType"),
                "displayTimestamp": with_title(
                    int64(),
                    "User-defined timestamp that preserves original timestamp when message.data.timestamp needs to be updated for compaction"
                ),
                "targetFid": with_title(uint64(), "The fid the link relates to")
            },
            "required": ["type", "targetFid"]
        }),
    );

    s.insert(
        "ReactionBody".into(),
        json!({
            "description": "Adds or removes a Reaction from a Cast",
            "type": "object",
            "properties": {
                "type": schema_ref("ReactionType"),
                "targetCastId": schema_ref("CastId"),
                "targetUrl": { "title": "URL to react to", "type": "string" }
            },
            "required": ["type"]
        }),
    );

    s.insert(
        "UserDataBody".into(),
        json!({
            "description": "Adds metadata about a user",
            "type": "object",
            "properties": {
                "type": schema_ref("UserDataType"),
                "value": { "title": "Value of the metadata", "type": "string" }
            },
            "required": ["type", "value"]
        }),
    );

    s.insert(
        "UserNameProof".into(),
        json!({
            "type": "object",
            "properties": {
                "timestamp": uint64(),
                "name": { "type": "string", "example": "gavi" },
                "owner": { "pattern": patterns::HASH_PATTERN, "type": "string" },
                "signature": base64_field(),
                "fid": uint64(),
                "type": schema_ref("UserNameType")
            },
            "required": ["timestamp", "name", "owner", "signature", "fid", "type"]
        }),
    );

    s.insert(
        "VerificationAddEthAddressBody".into(),
        json!({
            "description": "Adds a Verification of ownership of an Ethereum Address",
            "type": "object",
            "properties": {
                "address": {
                    "title": "Ethereum address being verified",
                    "pattern": patterns::ETH_ADDRESS_PATTERN,
                    "type": "string"
                },
                "ethSignature": with_title(
                    base64_field(),
                    "Signature produced by the user's Ethereum address"
                ),
                "blockHash": {
                    "title": "Hash of the latest Ethereum block when the signature was produced",
                    "pattern": patterns::BYTES32_PATTERN,
                    "type": "string"
                }
            },
            "required": ["address", "ethSignature", "blockHash"]
        }),
    );

    s.insert(
        "VerificationRemoveBody".into(),
        json!({
            "description": "Removes a Verification of any type",
            "type": "object",
            "properties": {
                "address": {
                    "title": "Address of the Verification to remove",
                    "pattern": patterns::VERIFICATION_REMOVE_ADDRESS_PATTERN,
                    "type": "string"
                }
            },
            "required": ["address"]
        }),
    );
}

fn on_chain_schemas(s: &mut Map<String, Value>) {
    let variants = [
        (OnChainEventType::Signer, "OnChainEventSigner", "signerEventBody", "SignerEventBody"),
        (
            OnChainEventType::SignerMigrated,
            "OnChainEventSignerMigrated",
            "signerMigratedEventBody",
            "SignerMigratedEventBody",
        ),
        (
            OnChainEventType::IdRegister,
            "OnChainEventIdRegister",
            "idRegisterEventBody",
            "IdRegisterEventBody",
        ),
        (
            OnChainEventType::StorageRent,
            "OnChainEventStorageRent",
            "storageRentEventBody",
            "StorageRentEventBody",
        ),
    ];

    let mapping: Map<String, Value> = variants
        .iter()
        .map(|(t, name, _, _)| {
            (
                t.as_str().to_string(),
                json!(format!("#/components/schemas/{name}")),
            )
        })
        .collect();
    s.insert(
        "OnChainEvent".into(),
        json!({
            "oneOf": variants.iter().map(|(_, name, _, _)| schema_ref(name)).collect::<Vec<_>>(),
            "discriminator": { "propertyName": "type", "mapping": mapping }
        }),
    );
    for (_, name, key, body) in variants {
        s.insert(name.into(), on_chain_variant(key, body));
    }

    s.insert(
        "OnChainEventCommon".into(),
        json!({
            "type": "object",
            "properties": {
                "type": { "type": "string", "example": "EVENT_TYPE_SIGNER" },
                "chainId": { "type": "integer" },
                "blockNumber": { "type": "integer" },
                "blockHash": {
                    "type": "string",
                    "example": "0x75fbbb8b2a4ede67ac350e1b0503c6a152c0091bd8e3ef4a6927d58e088eae28"
                },
                "blockTimestamp": { "type": "integer" },
                "transactionHash": {
                    "type": "string",
                    "example": "0x36ef79e6c460e6ae251908be13116ff0065960adb1ae032b4cc65a8352f28952"
                },
                "logIndex": { "type": "integer" },
                "txIndex": { "type": "integer" },
                "fid": { "type": "integer" }
            },
            "required": [
                "type", "chainId", "blockNumber", "blockHash", "blockTimestamp",
                "transactionHash", "logIndex", "txIndex", "fid"
            ]
        }),
    );

    s.insert(
        "SignerEventBody".into(),
        json!({
            "type": "object",
            "properties": {
                "key": { "pattern": patterns::BYTES32_PATTERN, "type": "string" },
                "keyType": int64(),
                "eventType": schema_ref("SignerEventType"),
                "metadata": base64_field(),
                "metadataType": int64()
            },
            "required": ["key", "keyType", "eventType", "metadata", "metadataType"]
        }),
    );
    s.insert(
        "SignerMigratedEventBody".into(),
        json!({
            "type": "object",
            "properties": { "migratedAt": int64() },
            "required": ["migratedAt"]
        }),
    );

    let address = json!({
        "pattern": patterns::HEX_PATTERN,
        "type": "string",
        "example": ADDRESS_EXAMPLE
    });
    s.insert(
        "IdRegisterEventBody".into(),
        json!({
            "type": "object",
            "properties": {
                "to": address.clone(),
                "eventType": schema_ref("IdRegisterEventType"),
                "from": address.clone(),
                "recoveryAddress": address
            },
            "required": ["to", "from", "eventType", "recoveryAddress"]
        }),
    );
    s.insert(
        "StorageRentEventBody".into(),
        json!({
            "type": "object",
            "properties": {
                "payer": base64_field(),
                "units": int64(),
                "expiry": int64()
            },
            "required": ["payer", "units", "expiry"]
        }),
    );
}

fn hub_event_schemas(s: &mut Map<String, Value>) {
    let variants = [
        ("HubEventMergeMessage", "mergeMessageBody", "MergeMessageBody"),
        ("HubEventPruneMessage", "pruneMessageBody", "PruneMessageBody"),
        ("HubEventRevokeMessage", "revokeMessageBody", "RevokeMessageBody"),
        (
            "HubEventMergeUsernameProof",
            "mergeUsernameProofBody",
            "MergeUserNameProofBody",
        ),
        (
            "HubEventMergeOnChainEvent",
            "mergeOnChainEventBody",
            "MergeOnChainEventBody",
        ),
    ];
    let types = [
        "HUB_EVENT_TYPE_MERGE_MESSAGE",
        "HUB_EVENT_TYPE_PRUNE_MESSAGE",
        "HUB_EVENT_TYPE_REVOKE_MESSAGE",
        "HUB_EVENT_TYPE_MERGE_USERNAME_PROOF",
        "HUB_EVENT_TYPE_MERGE_ON_CHAIN_EVENT",
    ];

    let mapping: Map<String, Value> = types
        .iter()
        .zip(variants.iter())
        .map(|(t, (name, _, _))| {
            (
                t.to_string(),
                json!(format!("#/components/schemas/{name}")),
            )
        })
        .collect();
    s.insert(
        "HubEvent".into(),
        json!({
            "oneOf": variants.iter().map(|(name, _, _)| schema_ref(name)).collect::<Vec<_>>(),
            "discriminator": { "propertyName": "type", "mapping": mapping }
        }),
    );
    for (t, (name, key, body)) in types.iter().zip(variants) {
        s.insert(name.into(), hub_event_variant(t, key, body));
    }

    s.insert(
        "MergeMessageBody".into(),
        json!({
            "type": "object",
            "properties": {
                "message": schema_ref("Message"),
                "deletedMessages": { "type": "array", "items": schema_ref("Message") }
            },
            "required": ["message", "deletedMessages"]
        }),
    );
    for name in ["PruneMessageBody", "RevokeMessageBody"] {
        s.insert(
            name.into(),
            json!({
                "type": "object",
                "properties": { "message": schema_ref("Message") },
                "required": ["message"]
            }),
        );
    }
    s.insert(
        "MergeUserNameProofBody".into(),
        json!({
            "type": "object",
            "properties": {
                "usernameProof": schema_ref("UserNameProof"),
                "deletedUsernameProof": schema_ref("UserNameProof"),
                "usernameProofMessage": schema_ref("Message"),
                "deletedUsernameProofMessage": schema_ref("Message")
            }
        }),
    );
    s.insert(
        "MergeOnChainEventBody".into(),
        json!({
            "type": "object",
            "properties": { "onChainEvent": schema_ref("OnChainEvent") },
            "required": ["onChainEvent"]
        }),
    );
}

fn response_schemas(s: &mut Map<String, Value>) {
    s.insert(
        "HubInfoResponse".into(),
        json!({
            "title": "Response Types for the Sync RPC Methods",
            "required": ["hubOperatorFid", "isSyncing", "nickname", "peerId", "rootHash", "version"],
            "type": "object",
            "properties": {
                "version": { "type": "string" },
                "isSyncing": { "type": "boolean" },
                "nickname": { "type": "string" },
                "rootHash": { "type": "string" },
                "dbStats": schema_ref("DbStats"),
                "peerId": { "type": "string" },
                "hubOperatorFid": uint64()
            }
        }),
    );
    s.insert(
        "DbStats".into(),
        json!({
            "required": ["numFidEvents", "numFnameEvents", "numMessages"],
            "type": "object",
            "properties": {
                "numMessages": uint64(),
                "numFidEvents": uint64(),
                "numFnameEvents": uint64()
            }
        }),
    );
    s.insert(
        "ErrorResponse".into(),
        json!({
            "required": ["code", "details", "errCode", "metadata", "name", "presentable"],
            "type": "object",
            "properties": {
                "errCode": { "type": "string" },
                "presentable": { "type": "boolean" },
                "name": { "type": "string" },
                "code": { "type": "integer" },
                "details": { "type": "string" },
                "metadata": {
                    "required": ["errcode"],
                    "type": "object",
                    "properties": {
                        "errcode": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }
        }),
    );
    s.insert(
        "FidsResponse".into(),
        json!({
            "type": "object",
            "properties": {
                "fids": { "type": "array", "items": uint64() },
                "nextPageToken": base64_field()
            },
            "required": ["fids", "nextPageToken"]
        }),
    );
    s.insert(
        "StorageLimit".into(),
        json!({
            "type": "object",
            "properties": {
                "storeType": schema_ref("StoreType"),
                "limit": uint64()
            },
            "required": ["storeType", "limit"]
        }),
    );
    s.insert(
        "StorageLimitsResponse".into(),
        json!({
            "type": "object",
            "properties": {
                "limits": { "type": "array", "items": schema_ref("StorageLimit") }
            },
            "required": ["limits"]
        }),
    );
    s.insert(
        "UsernameProofsResponse".into(),
        json!({
            "type": "object",
            "properties": {
                "proofs": { "type": "array", "items": schema_ref("UserNameProof") }
            },
            "required": ["proofs"]
        }),
    );
    s.insert(
        "ValidateMessageResponse".into(),
        json!({
            "type": "object",
            "properties": {
                "valid": { "type": "boolean" },
                "message": schema_ref("Message")
            },
            "required": ["valid", "message"]
        }),
    );
}

fn enum_schemas(s: &mut Map<String, Value>) {
    let enums: [(&str, Vec<&str>, Option<&str>); 12] = [
        (
            "FarcasterNetwork",
            literals!(FarcasterNetwork),
            Some(NETWORK_DESCRIPTION),
        ),
        ("HashScheme", literals!(HashScheme), Some(HASH_SCHEME_DESCRIPTION)),
        ("LinkType", literals!(LinkType), Some(LINK_TYPE_DESCRIPTION)),
        ("MessageType", literals!(MessageType), Some(MESSAGE_TYPE_DESCRIPTION)),
        ("ReactionType", literals!(ReactionType), Some(REACTION_TYPE_DESCRIPTION)),
        (
            "SignatureScheme",
            literals!(SignatureScheme),
            Some(SIGNATURE_SCHEME_DESCRIPTION),
        ),
        ("UserDataType", literals!(UserDataType), Some(USER_DATA_TYPE_DESCRIPTION)),
        ("OnChainEventType", literals!(OnChainEventType), None),
        ("IdRegisterEventType", literals!(IdRegisterEventType), None),
        ("SignerEventType", literals!(SignerEventType), None),
        ("StoreType", literals!(StoreType), None),
        ("UserNameType", literals!(UserNameType), None),
    ];
    for (name, values, description) in enums {
        s.insert(name.into(), enum_schema(&values, description));
    }
}
