//! HTTP contract of the Farcaster Hub REST API.
//!
//! This crate encodes the hub's REST surface as Rust types: the query
//! parameters of every route, the response envelopes, the uniform error
//! payload and the pagination rules. The route table in [`operation`] is the
//! single source the OpenAPI document, the response checker, the mock hub and
//! the CLI are generated from.
//!
//! # Endpoints covered
//!
//! | Method | Path | Query | Response |
//! |--------|------|-------|----------|
//! | GET | `/v1/info` | [`InfoQuery`] | [`HubInfoResponse`] |
//! | GET | `/v1/castById` | [`CastByIdQuery`] | `CastAdd` message |
//! | GET | `/v1/castsByFid` | [`FidPageQuery`] | [`Paged`] of `CastAdd` |
//! | GET | `/v1/castsByMention` | [`FidPageQuery`] | [`Paged`] of `CastAdd` |
//! | GET | `/v1/castsByParent` | [`CastsByParentQuery`] | [`Paged`] of `CastAdd` |
//! | GET | `/v1/reactionById` | [`ReactionByIdQuery`] | `Reaction` message |
//! | GET | `/v1/reactionsByCast` | [`ReactionsByCastQuery`] | [`Paged`] of `Reaction` |
//! | GET | `/v1/reactionsByFid` | [`ReactionsByFidQuery`] | [`Paged`] of `Reaction` |
//! | GET | `/v1/reactionsByTarget` | [`ReactionsByTargetQuery`] | [`Paged`] of `Reaction` |
//! | GET | `/v1/linkById` | [`LinkByIdQuery`] | `LinkAdd` message |
//! | GET | `/v1/linksByFid` | [`LinksByFidQuery`] | [`Paged`] of `LinkAdd` |
//! | GET | `/v1/linksByTargetFid` | [`LinksByTargetFidQuery`] | [`Paged`] of `LinkAdd` |
//! | GET | `/v1/userDataByFid` | [`UserDataQuery`] | [`UserDataResponse`] |
//! | GET | `/v1/fids` | [`PageQuery`] | [`FidsResponse`] |
//! | GET | `/v1/storageLimitsByFid` | [`FidQuery`] | [`StorageLimitsResponse`] |
//! | GET | `/v1/userNameProofsByFid` | [`FidQuery`] | [`UsernameProofsResponse`] |
//! | GET | `/v1/userNameProofByName` | [`UsernameProofQuery`] | `UserNameProof` |
//! | GET | `/v1/verificationsByFid` | [`VerificationsQuery`] | [`Paged`] of `Verification` |
//! | GET | `/v1/onChainIdRegistryEventByAddress` | [`AddressQuery`] | `OnChainEventIdRegister` |
//! | GET | `/v1/onChainEventsByFid` | [`OnChainEventsQuery`] | [`OnChainEventsResponse`] |
//! | GET | `/v1/onChainSignersByFid` | [`OnChainSignersQuery`] | [`SignersResponse`] |
//! | POST | `/v1/submitMessage` | octet-stream | `Message` |
//! | POST | `/v1/validateMessage` | octet-stream | [`ValidateMessageResponse`] |
//! | GET | `/v1/events` | [`EventsQuery`] | [`EventsResponse`] |
//! | GET | `/v1/eventById` | [`EventByIdQuery`] | `HubEvent` |
//!
//! Any route may instead answer with an [`ErrorResponse`].

pub mod check;
pub mod error;
pub mod openapi;
pub mod operation;
pub mod pagination;
pub mod query;
pub mod response;

pub use check::{check_query, check_response, QueryMap, Violation};
pub use error::{ErrorMetadata, ErrorResponse, HubErrorCode};
pub use openapi::{document, document_yaml, DocOptions, API_KEY_HEADER, DEFAULT_SERVER_URL};
pub use operation::{Method, Operation, CATALOG};
pub use pagination::{
    decode_page_token, encode_page_token, paginate, FidsResponse, PageQuery, Paged, ParamError,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use query::{
    AddressQuery, CastByIdQuery, CastsByParentQuery, EventByIdQuery, EventsQuery, FidPageQuery,
    FidQuery, InfoQuery, LinkByIdQuery, LinksByFidQuery, LinksByTargetFidQuery,
    OnChainEventsQuery, OnChainSignersQuery, Parent, ReactionByIdQuery, ReactionsByCastQuery,
    ReactionsByFidQuery, ReactionsByTargetQuery, UserDataQuery, UsernameProofQuery,
    VerificationsQuery,
};
pub use response::{
    DbStats, EventsResponse, HubInfoResponse, OnChainEventsResponse, SignersResponse,
    StorageLimit, StorageLimitsResponse, UserDataResponse, UsernameProofsResponse,
    ValidateMessageResponse,
};
