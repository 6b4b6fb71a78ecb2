//! The route catalog: one [`Operation`] per documented endpoint.
//!
//! The OpenAPI builder, the response checker, the mock hub router and the CLI
//! all read this table, so a route exists in exactly one place.

use std::fmt;

use hubspec::{patterns, LinkType, MessageType, OnChainEventType, ReactionType, UserDataType};

/// HTTP method of an operation. The hub only uses two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Lowercase key used under an OpenAPI path item.
    pub const fn openapi_key(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// An enum-valued query parameter. Accepts the wire literal or, where the
/// enum has one, its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumParam {
    ReactionType,
    LinkType,
    UserDataType,
    OnChainEventType,
}

impl EnumParam {
    /// Name of the component schema the parameter refers to.
    pub const fn schema_name(self) -> &'static str {
        match self {
            EnumParam::ReactionType => "ReactionType",
            EnumParam::LinkType => "LinkType",
            EnumParam::UserDataType => "UserDataType",
            EnumParam::OnChainEventType => "OnChainEventType",
        }
    }

    pub fn accepts(self, raw: &str) -> bool {
        match self {
            EnumParam::ReactionType => ReactionType::parse_lenient(raw).is_ok(),
            EnumParam::LinkType => LinkType::parse_lenient(raw).is_ok(),
            EnumParam::UserDataType => UserDataType::parse_lenient(raw).is_ok(),
            EnumParam::OnChainEventType => OnChainEventType::parse_lenient(raw).is_ok(),
        }
    }

    pub fn literals(self) -> Vec<&'static str> {
        match self {
            EnumParam::ReactionType => ReactionType::ALL.iter().map(|v| v.as_str()).collect(),
            EnumParam::LinkType => LinkType::ALL.iter().map(|v| v.as_str()).collect(),
            EnumParam::UserDataType => UserDataType::ALL.iter().map(|v| v.as_str()).collect(),
            EnumParam::OnChainEventType => {
                OnChainEventType::ALL.iter().map(|v| v.as_str()).collect()
            }
        }
    }
}

/// Declared type of a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSchema {
    Integer,
    Boolean,
    String,
    /// A 20-byte hex digest matching [`patterns::HASH_PATTERN`].
    Hash,
    Enum(EnumParam),
}

impl ParamSchema {
    /// Whether `raw`, as it would appear in a query string, satisfies the
    /// declared type.
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            ParamSchema::Integer => raw.parse::<u64>().is_ok(),
            ParamSchema::Boolean => matches!(raw, "true" | "false"),
            ParamSchema::String => true,
            ParamSchema::Hash => patterns::is_hash(raw),
            ParamSchema::Enum(e) => e.accepts(raw),
        }
    }
}

/// Example value attached to a parameter in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    Int(i64),
    Str(&'static str),
    /// Several named examples (`examples:` rather than `example:`).
    Named(&'static [(&'static str, &'static str)]),
}

/// A query parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub required: bool,
    pub schema: ParamSchema,
    pub example: Option<Example>,
}

impl Param {
    const fn required(name: &'static str, description: &'static str, schema: ParamSchema) -> Self {
        Self {
            name,
            description: Some(description),
            required: true,
            schema,
            example: None,
        }
    }

    const fn optional(name: &'static str, description: &'static str, schema: ParamSchema) -> Self {
        Self {
            name,
            description: Some(description),
            required: false,
            schema,
            example: None,
        }
    }

    const fn example(self, example: Example) -> Self {
        Self {
            example: Some(example),
            ..self
        }
    }
}

/// Names of the three pagination parameters shared by list operations.
pub const PAGE_PARAMS: [&str; 3] = ["pageSize", "reverse", "pageToken"];

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Which `Message` component schema a response item must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSchema {
    CastAdd,
    Reaction,
    LinkAdd,
    UserDataAdd,
    Verification,
    /// Any message type.
    Message,
}

impl MessageSchema {
    pub const fn schema_name(self) -> &'static str {
        match self {
            MessageSchema::CastAdd => "CastAdd",
            MessageSchema::Reaction => "Reaction",
            MessageSchema::LinkAdd => "LinkAdd",
            MessageSchema::UserDataAdd => "UserDataAdd",
            MessageSchema::Verification => "Verification",
            MessageSchema::Message => "Message",
        }
    }

    /// Whether a message of type `t` satisfies this schema. The variant
    /// schemas constrain the body, so add/remove pairs that share a body
    /// shape are both accepted.
    pub fn accepts(self, t: MessageType) -> bool {
        let key = match self {
            MessageSchema::CastAdd => "castAddBody",
            MessageSchema::Reaction => "reactionBody",
            MessageSchema::LinkAdd => "linkBody",
            MessageSchema::UserDataAdd => "userDataBody",
            MessageSchema::Verification => "verificationAddEthAddressBody",
            MessageSchema::Message => return true,
        };
        t.body_key() == key
    }
}

/// Shape of a successful (200) response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    HubInfo,
    Message(MessageSchema),
    Paged(MessageSchema),
    /// Single `UserDataAdd` when `user_data_type` is present, else a page.
    UserData,
    Fids,
    StorageLimits,
    UsernameProofs,
    UserNameProof,
    OnChainIdRegister,
    OnChainEvents,
    /// Single `OnChainEventSigner` when `signer` is present, else `{events}`.
    Signers,
    ValidateMessage,
    Events,
    HubEvent,
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One documented endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub method: Method,
    pub path: &'static str,
    pub operation_id: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub description: Option<&'static str>,
    pub params: &'static [Param],
    /// Accepts `pageSize`, `reverse` and `pageToken`.
    pub paged: bool,
    /// Takes an `application/octet-stream` request body.
    pub request_body: bool,
    pub response: ResponseShape,
    pub response_description: &'static str,
    /// Requires the `x-airstack-hubs` API key header.
    pub secured: bool,
    /// Carries `x-codegen-request-body-name: body`.
    pub codegen_body_name: bool,
}

impl Operation {
    /// Look up an operation by its `operationId`, ignoring ASCII case.
    pub fn find(operation_id: &str) -> Option<&'static Operation> {
        CATALOG
            .iter()
            .find(|op| op.operation_id.eq_ignore_ascii_case(operation_id))
    }

    /// Look up an operation by method and path.
    pub fn find_by_path(method: Method, path: &str) -> Option<&'static Operation> {
        CATALOG
            .iter()
            .find(|op| op.method == method && op.path == path)
    }

    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Every query parameter name this operation accepts.
    pub fn query_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.params.iter().map(|p| p.name).collect();
        if self.paged {
            names.extend(PAGE_PARAMS);
        }
        names
    }

    pub fn required_params(&self) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(|p| p.required)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

const HASH_EXAMPLE: &str = "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9";
const CHAIN_URL_EXAMPLE: &str =
    "chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2";

const REACTION_TYPE: Param = Param::required(
    "reaction_type",
    "The type of reaction, either as a numerical enum value or string representation",
    ParamSchema::Enum(EnumParam::ReactionType),
);

const LINK_TYPE_DESC: &str = "The type of link, as a string value";

const FID_REQUESTED: Param =
    Param::required("fid", "The FID being requested", ParamSchema::Integer);

const SUCCESS: &str = "A successful response.";

/// Every documented operation, in document order.
pub static CATALOG: &[Operation] = &[
    Operation {
        method: Method::Get,
        path: "/v1/info",
        operation_id: "GetInfo",
        tag: "Info",
        summary: "Sync Methods",
        description: None,
        params: &[Param::required(
            "dbstats",
            "Whether to return DB stats",
            ParamSchema::Boolean,
        )],
        paged: false,
        request_body: false,
        response: ResponseShape::HubInfo,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    // Casts
    Operation {
        method: Method::Get,
        path: "/v1/castById",
        operation_id: "GetCastById",
        tag: "Casts",
        summary: "Get a cast by its FID and Hash.",
        description: None,
        params: &[
            Param::required("fid", "The FID of the cast's creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::required(
                "hash",
                "The cast's hash",
                ParamSchema::Hash,
            )
            .example(Example::Str(HASH_EXAMPLE)),
        ],
        paged: false,
        request_body: false,
        response: ResponseShape::Message(MessageSchema::CastAdd),
        response_description: "The requested Cast.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/castsByFid",
        operation_id: "ListCastsByFid",
        tag: "Casts",
        summary: "Fetch all casts authored by an FID.",
        description: None,
        params: &[
            Param::required("fid", "The FID of the casts' creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::CastAdd),
        response_description: "The requested Casts.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/castsByMention",
        operation_id: "ListCastsByMention",
        tag: "Casts",
        summary: "Fetch all casts that mention an FID",
        description: None,
        params: &[Param::required(
            "fid",
            "The FID that is mentioned in a cast",
            ParamSchema::Integer,
        )
        .example(Example::Int(6833))],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::CastAdd),
        response_description: "The requested Casts.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/castsByParent",
        operation_id: "ListCastsByParent",
        tag: "Casts",
        summary: "Fetch all casts by parent cast's FID and Hash OR by the parent's URL",
        description: None,
        params: &[
            Param::optional("fid", "The FID of the parent cast", ParamSchema::Integer)
                .example(Example::Int(226)),
            Param::optional("hash", "The parent cast's hash", ParamSchema::String)
                .example(Example::Str(HASH_EXAMPLE)),
            Param {
                name: "url",
                description: None,
                required: false,
                schema: ParamSchema::String,
                example: Some(Example::Str(CHAIN_URL_EXAMPLE)),
            },
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::CastAdd),
        response_description: "The requested Casts.",
        secured: true,
        codegen_body_name: false,
    },
    // Reactions
    Operation {
        method: Method::Get,
        path: "/v1/reactionById",
        operation_id: "GetReactionById",
        tag: "Reactions",
        summary: "Get a reaction by its created FID and target Cast.",
        description: None,
        params: &[
            Param::required("fid", "The FID of the reaction's creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::required("target_fid", "The FID of the cast's creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::required("target_hash", "The cast's hash", ParamSchema::String)
                .example(Example::Str(HASH_EXAMPLE)),
            REACTION_TYPE,
        ],
        paged: false,
        request_body: false,
        response: ResponseShape::Message(MessageSchema::Reaction),
        response_description: "The requested Reaction.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/reactionsByCast",
        operation_id: "ListReactionsByCast",
        tag: "Reactions",
        summary: "Get all reactions to a cast",
        description: None,
        params: &[
            Param::required("target_fid", "The FID of the cast's creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::required("target_hash", "The hash of the cast", ParamSchema::String)
                .example(Example::Str(HASH_EXAMPLE)),
            REACTION_TYPE,
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::Reaction),
        response_description: "The requested Reactions.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/reactionsByFid",
        operation_id: "ListReactionsByFid",
        tag: "Reactions",
        summary: "Get all reactions by an FID",
        description: None,
        params: &[
            Param::required("fid", "The FID of the reaction's creator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            REACTION_TYPE,
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::Reaction),
        response_description: "The requested Reactions.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/reactionsByTarget",
        operation_id: "ListReactionsByTarget",
        tag: "Reactions",
        summary: "Get all reactions to a target URL",
        description: None,
        params: &[
            Param::required("url", "The URL of the parent cast", ParamSchema::String)
                .example(Example::Str(CHAIN_URL_EXAMPLE)),
            REACTION_TYPE,
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::Reaction),
        response_description: "The requested Reactions.",
        secured: true,
        codegen_body_name: false,
    },
    // Links
    Operation {
        method: Method::Get,
        path: "/v1/linkById",
        operation_id: "GetLinkById",
        tag: "Links",
        summary: "Get a link by its FID and target FID.",
        description: None,
        params: &[
            Param::required("fid", "The FID of the link's originator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::required(
                "target_fid",
                "The FID of the target of the link",
                ParamSchema::Integer,
            )
            .example(Example::Int(2)),
            Param::required("link_type", LINK_TYPE_DESC, ParamSchema::Enum(EnumParam::LinkType)),
        ],
        paged: false,
        request_body: false,
        response: ResponseShape::Message(MessageSchema::LinkAdd),
        response_description: "The requested Link.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/linksByFid",
        operation_id: "ListLinksByFid",
        tag: "Links",
        summary: "Get all links from a source FID",
        description: None,
        params: &[
            Param::required("fid", "The FID of the link's originator", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::optional("link_type", LINK_TYPE_DESC, ParamSchema::Enum(EnumParam::LinkType)),
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::LinkAdd),
        response_description: "The requested Links.",
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/linksByTargetFid",
        operation_id: "ListLinksByTargetFid",
        tag: "Links",
        summary: "Get all links to a target FID",
        description: None,
        params: &[
            Param::required(
                "target_fid",
                "The FID of the target of the link",
                ParamSchema::Integer,
            )
            .example(Example::Int(6833)),
            Param::optional("link_type", LINK_TYPE_DESC, ParamSchema::Enum(EnumParam::LinkType)),
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::LinkAdd),
        response_description: "The requested Links.",
        secured: true,
        codegen_body_name: false,
    },
    // User data
    Operation {
        method: Method::Get,
        path: "/v1/userDataByFid",
        operation_id: "GetUserDataByFid",
        tag: "UserData",
        summary: "Get UserData for a FID.",
        description: Some(
            "**Note:** one of two different response schemas is returned based on whether the \
             caller provides the `user_data_type` parameter. If included, a single `UserDataAdd` \
             message is returned (or a `not_found` error). If omitted, a paginated list of \
             `UserDataAdd` messages is returned instead",
        ),
        params: &[
            Param::required("fid", "The FID that's being requested", ParamSchema::Integer)
                .example(Example::Int(6833)),
            Param::optional(
                "user_data_type",
                "The type of user data, either as a numerical value or type string. If this is \
                 omitted, all user data for the FID is returned",
                ParamSchema::Enum(EnumParam::UserDataType),
            ),
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::UserData,
        response_description: "The requested UserData.",
        secured: true,
        codegen_body_name: false,
    },
    // FIDs
    Operation {
        method: Method::Get,
        path: "/v1/fids",
        operation_id: "ListFids",
        tag: "FIDs",
        summary: "Get a list of all the FIDs",
        description: None,
        params: &[],
        paged: true,
        request_body: false,
        response: ResponseShape::Fids,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    // Storage
    Operation {
        method: Method::Get,
        path: "/v1/storageLimitsByFid",
        operation_id: "GetStorageLimitsByFid",
        tag: "Storage",
        summary: "Get an FID's storage limits.",
        description: None,
        params: &[Param {
            name: "fid",
            description: None,
            required: true,
            schema: ParamSchema::Integer,
            example: None,
        }],
        paged: false,
        request_body: false,
        response: ResponseShape::StorageLimits,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: true,
    },
    // Usernames
    Operation {
        method: Method::Get,
        path: "/v1/userNameProofsByFid",
        operation_id: "ListUsernameProofsByFid",
        tag: "Usernames",
        summary: "Get a list of proofs provided by an FID",
        description: None,
        params: &[FID_REQUESTED],
        paged: false,
        request_body: false,
        response: ResponseShape::UsernameProofs,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/userNameProofByName",
        operation_id: "GetUsernameProof",
        tag: "Usernames",
        summary: "Get an proof for a username by the Farcaster username",
        description: None,
        params: &[Param::required(
            "name",
            "The Farcaster username or ENS address",
            ParamSchema::String,
        )
        .example(Example::Named(&[("username", "gavi"), ("ENS address", "dwr.eth")]))],
        paged: false,
        request_body: false,
        response: ResponseShape::UserNameProof,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    // Verifications
    Operation {
        method: Method::Get,
        path: "/v1/verificationsByFid",
        operation_id: "ListVerificationsByFid",
        tag: "Verifications",
        summary: "Get a list of verifications provided by an FID",
        description: None,
        params: &[
            FID_REQUESTED,
            Param::optional(
                "address",
                "The optional ETH address to filter by",
                ParamSchema::String,
            ),
        ],
        paged: true,
        request_body: false,
        response: ResponseShape::Paged(MessageSchema::Verification),
        response_description: "The requested Reactions.",
        secured: true,
        codegen_body_name: true,
    },
    // On-chain events
    Operation {
        method: Method::Get,
        path: "/v1/onChainIdRegistryEventByAddress",
        operation_id: "GetOnChainIdRegistrationByAddress",
        tag: "OnChainEvents",
        summary: "Get an on chain ID Registry Event for a given Address",
        description: None,
        params: &[Param::required(
            "address",
            "The ETH address being requested",
            ParamSchema::Hash,
        )],
        paged: false,
        request_body: false,
        response: ResponseShape::OnChainIdRegister,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/onChainEventsByFid",
        operation_id: "ListOnChainEventsByFid",
        tag: "OnChainEvents",
        summary: "Get a list of on-chain events provided by an FID",
        description: None,
        params: &[
            FID_REQUESTED,
            Param::required(
                "event_type",
                "The numeric of string value of the event type being requested.",
                ParamSchema::Enum(EnumParam::OnChainEventType),
            ),
        ],
        paged: false,
        request_body: false,
        response: ResponseShape::OnChainEvents,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/onChainSignersByFid",
        operation_id: "ListOnChainSignersByFid",
        tag: "OnChainEvents",
        summary: "Get a list of signers provided by an FID",
        description: Some(
            "**Note:** one of two different response schemas is returned based on whether the \
             caller provides the `signer` parameter. If included, a single `OnChainEventSigner` \
             message is returned (or a `not_found` error). If omitted, a non-paginated list of \
             `OnChainEventSigner` messages is returned instead",
        ),
        params: &[
            FID_REQUESTED,
            Param::optional("signer", "The optional key of signer", ParamSchema::String).example(
                Example::Str("0x0852c07b5695ff94138b025e3f9b4788e06133f04e254f0ea0eb85a06e999cdd"),
            ),
        ],
        paged: false,
        request_body: false,
        response: ResponseShape::Signers,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    // Write path
    Operation {
        method: Method::Post,
        path: "/v1/submitMessage",
        operation_id: "SubmitMessage",
        tag: "SubmitMessage",
        summary: "Submit a signed protobuf-serialized message to the Hub",
        description: None,
        params: &[],
        paged: false,
        request_body: true,
        response: ResponseShape::Message(MessageSchema::Message),
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: true,
    },
    Operation {
        method: Method::Post,
        path: "/v1/validateMessage",
        operation_id: "ValidateMessage",
        tag: "ValidateMessage",
        summary: "Validate a signed protobuf-serialized message with the Hub",
        description: None,
        params: &[],
        paged: false,
        request_body: true,
        response: ResponseShape::ValidateMessage,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: true,
    },
    // Events
    Operation {
        method: Method::Get,
        path: "/v1/events",
        operation_id: "ListEvents",
        tag: "HubEvents",
        summary: "Get a page of Hub events",
        description: None,
        params: &[Param::optional(
            "from_event_id",
            "An optional Hub Id to start getting events from. This is also returned from the API \
             as nextPageEventId, which can be used to page through all the Hub events. Set it to \
             0 to start from the first event",
            ParamSchema::Integer,
        )],
        paged: false,
        request_body: false,
        response: ResponseShape::Events,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
    Operation {
        method: Method::Get,
        path: "/v1/eventById",
        operation_id: "GetEventById",
        tag: "HubEvents",
        summary: "Get an event by its ID",
        description: None,
        params: &[Param::required(
            "event_id",
            "The Hub Id of the event",
            ParamSchema::Integer,
        )],
        paged: false,
        request_body: false,
        response: ResponseShape::HubEvent,
        response_description: SUCCESS,
        secured: true,
        codegen_body_name: false,
    },
];
