//! Username proofs: bindings of a human-readable name to an address and fid.

use serde::{Deserialize, Serialize};

use crate::enums::UserNameType;

/// Proof that `owner` (and therefore `fid`) holds `name`.
///
/// For fnames the signature comes from the fname registry; for ENS names it
/// is the ENS owner's signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserNameProof {
    pub timestamp: u64,
    pub name: String,
    /// `0x`-prefixed 20-byte address.
    pub owner: String,
    /// Base64 signature.
    pub signature: String,
    pub fid: u64,
    #[serde(rename = "type")]
    pub name_type: UserNameType,
}

impl UserNameProof {
    /// `true` when the name is an ENS name rather than an fname.
    pub fn is_ens(&self) -> bool {
        self.name_type == UserNameType::EnsL1
    }
}
