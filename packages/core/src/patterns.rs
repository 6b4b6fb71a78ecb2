//! String patterns that are part of the wire contract.
//!
//! Each pattern is reproduced verbatim from the published schema so that the
//! regex and the OpenAPI `pattern` keyword can never disagree. The `*_PATTERN`
//! constants are what the OpenAPI builder emits; the `is_*` helpers are what
//! validation runs.

use std::sync::LazyLock;

use regex::Regex;

/// 20-byte hex digest: cast/message hashes and Ethereum addresses.
pub const HASH_PATTERN: &str = "^0x[0-9a-fA-F]{40}$";

/// Ethereum address (same shape as a hash, lowercase-first class as published).
pub const ETH_ADDRESS_PATTERN: &str = "^0x[a-fA-F0-9]{40}$";

/// The looser address pattern published for `VerificationRemoveBody.address`.
pub const VERIFICATION_REMOVE_ADDRESS_PATTERN: &str = "^0x[A-Za-z0-9]{40}$";

/// Signer public key or address: any non-empty hex string.
pub const SIGNER_PATTERN: &str = "^0x[0-9a-fA-F]+$";

/// 32-byte hex value: Ed25519 signer keys and Ethereum block hashes.
pub const BYTES32_PATTERN: &str = "^0x[a-fA-F0-9]{64}$";

/// Hex string of any length, including the bare `0x`.
pub const HEX_PATTERN: &str = "^0x[a-fA-F0-9]*$";

/// Standard (RFC 4648) padding-aware base64.
pub const BASE64_PATTERN: &str =
    "^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$";

static HASH_RE: LazyLock<Regex> = LazyLock::new(|| compile(HASH_PATTERN));
static ETH_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| compile(ETH_ADDRESS_PATTERN));
static VERIFICATION_REMOVE_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(VERIFICATION_REMOVE_ADDRESS_PATTERN));
static SIGNER_RE: LazyLock<Regex> = LazyLock::new(|| compile(SIGNER_PATTERN));
static BYTES32_RE: LazyLock<Regex> = LazyLock::new(|| compile(BYTES32_PATTERN));
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| compile(HEX_PATTERN));
static BASE64_RE: LazyLock<Regex> = LazyLock::new(|| compile(BASE64_PATTERN));

/// `scheme:` prefix check used for `format: uri` fields.
static URI_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("wire pattern must compile")
}

pub fn is_hash(s: &str) -> bool {
    HASH_RE.is_match(s)
}

pub fn is_eth_address(s: &str) -> bool {
    ETH_ADDRESS_RE.is_match(s)
}

pub fn is_verification_remove_address(s: &str) -> bool {
    VERIFICATION_REMOVE_ADDRESS_RE.is_match(s)
}

pub fn is_signer(s: &str) -> bool {
    SIGNER_RE.is_match(s)
}

pub fn is_bytes32(s: &str) -> bool {
    BYTES32_RE.is_match(s)
}

pub fn is_hex(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// `true` for valid padded base64, including the empty string.
pub fn is_base64(s: &str) -> bool {
    BASE64_RE.is_match(s)
}

pub fn is_uri(s: &str) -> bool {
    URI_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_requires_forty_hex_digits() {
        assert!(is_hash("0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9"));
        assert!(is_hash("0xA48DD46161D8E57725F5E26E34EC19C13FF7F3B9"));
        assert!(!is_hash("a48dd46161d8e57725f5e26e34ec19c13ff7f3b9"));
        assert!(!is_hash("0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b"));
        assert!(!is_hash("0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9aa"));
        assert!(!is_hash("0xg48dd46161d8e57725f5e26e34ec19c13ff7f3b9"));
    }

    #[test]
    fn base64_is_padding_aware() {
        assert!(is_base64(""));
        assert!(is_base64("AAAA"));
        assert!(is_base64("AAE="));
        assert!(is_base64("AQ=="));
        assert!(is_base64("ZmFyY2FzdGVy"));
        assert!(!is_base64("AQ"));
        assert!(!is_base64("AQ="));
        assert!(!is_base64("A==="));
        assert!(!is_base64("AA-_"));
    }

    #[test]
    fn signer_accepts_any_hex_length_but_not_empty() {
        assert!(is_signer("0x0852c07b5695ff94138b025e3f9b4788e06133f04e254f0ea0eb85a06e999cdd"));
        assert!(is_signer("0xab"));
        assert!(!is_signer("0x"));
    }

    #[test]
    fn hex_allows_bare_prefix() {
        assert!(is_hex("0x"));
        assert!(is_hex("0x00000000fcd5a8e45785c8a4b9a718c9348e4f18"));
        assert!(!is_hex("00"));
    }

    #[test]
    fn bytes32() {
        assert!(is_bytes32(
            "0x75fbbb8b2a4ede67ac350e1b0503c6a152c0091bd8e3ef4a6927d58e088eae28"
        ));
        assert!(!is_bytes32("0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9"));
    }

    #[test]
    fn uri() {
        assert!(is_uri("https://warpcast.com/~/channel/rust"));
        assert!(is_uri("chain://eip155:1/erc721:0x39d89b649ffa044383333d297e325d42d31329b2"));
        assert!(!is_uri("warpcast.com"));
        assert!(!is_uri(""));
    }
}
