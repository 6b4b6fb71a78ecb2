//! Query parameters of every read operation.
//!
//! Names are the exact snake_case spellings of the wire contract, plus the
//! camelCase pagination names. Enum-valued parameters are kept as strings
//! because the hub accepts "either a numerical enum value or string
//! representation"; the accessor methods apply that rule and return a
//! [`ParamError`] naming the offending parameter.
//!
//! Pagination fields are declared inline on each struct rather than through
//! `#[serde(flatten)]`: flattening routes values through an untyped buffer,
//! and url-encoded numbers then fail to parse.

use serde::{Deserialize, Serialize};

use hubspec::{
    patterns, CastId, LinkType, OnChainEventType, ReactionType, UnknownVariant, UserDataType,
};

use crate::pagination::{PageQuery, ParamError};

fn lenient<T>(
    name: &'static str,
    raw: &str,
    parse: fn(&str) -> Result<T, UnknownVariant>,
) -> Result<T, ParamError> {
    parse(raw).map_err(|e| ParamError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn hash_param(name: &'static str, raw: &str) -> Result<String, ParamError> {
    if patterns::is_hash(raw) {
        Ok(raw.to_string())
    } else {
        Err(ParamError::Invalid {
            name,
            reason: format!("must match {}", patterns::HASH_PATTERN),
        })
    }
}

macro_rules! paged {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// The pagination part of this query.
                pub fn page(&self) -> PageQuery {
                    PageQuery {
                        page_size: self.page_size,
                        reverse: self.reverse,
                        page_token: self.page_token.clone(),
                    }
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

/// `GET /v1/info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoQuery {
    /// Whether to return DB stats.
    pub dbstats: bool,
}

// ---------------------------------------------------------------------------
// Casts
// ---------------------------------------------------------------------------

/// `GET /v1/castById`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastByIdQuery {
    pub fid: u64,
    pub hash: String,
}

impl CastByIdQuery {
    pub fn cast_id(&self) -> Result<CastId, ParamError> {
        Ok(CastId::new(self.fid, hash_param("hash", &self.hash)?))
    }
}

/// `GET /v1/castsByFid` and `GET /v1/castsByMention`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FidPageQuery {
    pub fid: u64,
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    pub page_token: Option<String>,
}

/// `GET /v1/castsByParent`: either `fid` + `hash`, or `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastsByParentQuery {
    pub fid: Option<u64>,
    pub hash: Option<String>,
    pub url: Option<String>,
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    pub page_token: Option<String>,
}

/// What a `castsByParent` query selects on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    Cast(CastId),
    Url(String),
}

impl CastsByParentQuery {
    pub fn parent(&self) -> Result<Parent, ParamError> {
        match (&self.fid, &self.hash, &self.url) {
            (Some(fid), Some(hash), None) => {
                Ok(Parent::Cast(CastId::new(*fid, hash_param("hash", hash)?)))
            }
            (None, None, Some(url)) => Ok(Parent::Url(url.clone())),
            (None, None, None) => Err(ParamError::Missing("url")),
            (Some(_), None, _) => Err(ParamError::Missing("hash")),
            (None, Some(_), _) => Err(ParamError::Missing("fid")),
            _ => Err(ParamError::Invalid {
                name: "url",
                reason: "provide either fid and hash, or url".into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

/// `GET /v1/reactionById`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionByIdQuery {
    pub fid: u64,
    pub target_fid: u64,
    pub target_hash: String,
    pub reaction_type: String,
}

/// `GET /v1/reactionsByCast`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionsByCastQuery {
    pub target_fid: u64,
    pub target_hash: String,
    pub reaction_type: String,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

/// `GET /v1/reactionsByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionsByFidQuery {
    pub fid: u64,
    pub reaction_type: String,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

/// `GET /v1/reactionsByTarget`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionsByTargetQuery {
    pub url: String,
    pub reaction_type: String,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

macro_rules! reaction_type {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn reaction_type(&self) -> Result<ReactionType, ParamError> {
                    lenient("reaction_type", &self.reaction_type, ReactionType::parse_lenient)
                }
            }
        )+
    };
}

reaction_type!(
    ReactionByIdQuery,
    ReactionsByCastQuery,
    ReactionsByFidQuery,
    ReactionsByTargetQuery
);

impl ReactionByIdQuery {
    pub fn target(&self) -> Result<CastId, ParamError> {
        Ok(CastId::new(
            self.target_fid,
            hash_param("target_hash", &self.target_hash)?,
        ))
    }
}

impl ReactionsByCastQuery {
    pub fn target(&self) -> Result<CastId, ParamError> {
        Ok(CastId::new(
            self.target_fid,
            hash_param("target_hash", &self.target_hash)?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// `GET /v1/linkById`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkByIdQuery {
    pub fid: u64,
    pub target_fid: u64,
    pub link_type: String,
}

impl LinkByIdQuery {
    pub fn link_type(&self) -> Result<LinkType, ParamError> {
        lenient("link_type", &self.link_type, LinkType::parse_lenient)
    }
}

/// `GET /v1/linksByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksByFidQuery {
    pub fid: u64,
    pub link_type: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

/// `GET /v1/linksByTargetFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksByTargetFidQuery {
    pub target_fid: u64,
    pub link_type: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

macro_rules! optional_link_type {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// `None` when the caller did not filter by link type.
                pub fn link_type(&self) -> Result<Option<LinkType>, ParamError> {
                    self.link_type
                        .as_deref()
                        .map(|raw| lenient("link_type", raw, LinkType::parse_lenient))
                        .transpose()
                }
            }
        )+
    };
}

optional_link_type!(LinksByFidQuery, LinksByTargetFidQuery);

// ---------------------------------------------------------------------------
// User data, fids, storage, usernames, verifications
// ---------------------------------------------------------------------------

/// `GET /v1/userDataByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDataQuery {
    pub fid: u64,
    pub user_data_type: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

impl UserDataQuery {
    /// `Some` selects the single-object response branch.
    pub fn user_data_type(&self) -> Result<Option<UserDataType>, ParamError> {
        self.user_data_type
            .as_deref()
            .map(|raw| lenient("user_data_type", raw, UserDataType::parse_lenient))
            .transpose()
    }
}

/// `GET /v1/storageLimitsByFid` and `GET /v1/userNameProofsByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FidQuery {
    pub fid: u64,
}

/// `GET /v1/userNameProofByName`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameProofQuery {
    /// The Farcaster username or ENS name.
    pub name: String,
}

/// `GET /v1/verificationsByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationsQuery {
    pub fid: u64,
    pub address: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub reverse: Option<bool>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

// ---------------------------------------------------------------------------
// On-chain events
// ---------------------------------------------------------------------------

/// `GET /v1/onChainIdRegistryEventByAddress`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub address: String,
}

impl AddressQuery {
    pub fn address(&self) -> Result<String, ParamError> {
        hash_param("address", &self.address)
    }
}

/// `GET /v1/onChainEventsByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainEventsQuery {
    pub fid: u64,
    pub event_type: String,
}

impl OnChainEventsQuery {
    pub fn event_type(&self) -> Result<OnChainEventType, ParamError> {
        lenient("event_type", &self.event_type, OnChainEventType::parse_lenient)
    }
}

/// `GET /v1/onChainSignersByFid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainSignersQuery {
    pub fid: u64,
    /// `Some` selects the single-object response branch.
    pub signer: Option<String>,
}

// ---------------------------------------------------------------------------
// Hub events
// ---------------------------------------------------------------------------

/// `GET /v1/events`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsQuery {
    /// First event id to return; `0` or absent starts from the beginning.
    pub from_event_id: Option<u64>,
}

/// `GET /v1/eventById`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventByIdQuery {
    pub event_id: u64,
}

paged!(
    FidPageQuery,
    CastsByParentQuery,
    ReactionsByCastQuery,
    ReactionsByFidQuery,
    ReactionsByTargetQuery,
    LinksByFidQuery,
    LinksByTargetFidQuery,
    UserDataQuery,
    VerificationsQuery,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_type_accepts_number_or_literal() {
        let mut q = ReactionsByFidQuery {
            fid: 6833,
            reaction_type: "2".into(),
            page_size: None,
            reverse: None,
            page_token: None,
        };
        assert_eq!(q.reaction_type(), Ok(ReactionType::Recast));
        q.reaction_type = "REACTION_TYPE_LIKE".into();
        assert_eq!(q.reaction_type(), Ok(ReactionType::Like));
        q.reaction_type = "like".into();
        assert!(matches!(
            q.reaction_type(),
            Err(ParamError::Invalid { name: "reaction_type", .. })
        ));
    }

    #[test]
    fn parent_requires_cast_id_or_url() {
        let mut q = CastsByParentQuery {
            fid: Some(226),
            hash: Some("0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9".into()),
            ..Default::default()
        };
        assert!(matches!(q.parent(), Ok(Parent::Cast(_))));

        q.url = Some("chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2".into());
        assert!(q.parent().is_err());

        q.fid = None;
        q.hash = None;
        assert!(matches!(q.parent(), Ok(Parent::Url(_))));

        q.url = None;
        assert_eq!(q.parent(), Err(ParamError::Missing("url")));
    }

    #[test]
    fn optional_user_data_type() {
        let mut q = UserDataQuery {
            fid: 1,
            user_data_type: None,
            page_size: None,
            reverse: None,
            page_token: None,
        };
        assert_eq!(q.user_data_type(), Ok(None));
        q.user_data_type = Some("USER_DATA_TYPE_BIO".into());
        assert_eq!(q.user_data_type(), Ok(Some(UserDataType::Bio)));
    }

    #[test]
    fn page_copies_pagination_fields() {
        let q = FidPageQuery {
            fid: 1,
            page_size: Some(3),
            reverse: Some(true),
            page_token: Some("AAAA".into()),
        };
        let page = q.page();
        assert_eq!(page.effective_page_size(), 3);
        assert!(page.is_reverse());
    }

    #[test]
    fn cast_hash_is_pattern_checked() {
        let q = CastByIdQuery {
            fid: 6833,
            hash: "0x1234".into(),
        };
        assert!(matches!(q.cast_id(), Err(ParamError::Invalid { name: "hash", .. })));
    }
}
