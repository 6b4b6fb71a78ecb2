//! Ed25519 signing and verification of [`Message`] hashes.
//!
//! A message signature covers the raw bytes of `hash` (the 20-byte digest,
//! hex-decoded). The signature is carried base64-encoded in `signature` and
//! the public key `0x`-prefixed hex in `signer`.
//!
//! Computing the digest itself needs the protobuf encoding of `data`, which
//! belongs to the hub; callers supply the hash.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signer, Verifier};
use thiserror::Error;

use crate::enums::SignatureScheme;
use crate::message::Message;

/// Errors returned by [`sign_message`].
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("message is already signed; clear the signature before re-signing")]
    AlreadySigned,
    #[error("hash is not valid hex: {0}")]
    Hash(String),
}

/// Errors returned by [`verify_signature`].
#[derive(Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("message has no signature")]
    SignatureMissing,
    #[error("only Ed25519 signatures can be verified locally")]
    UnsupportedScheme,
    #[error("signer is not a valid Ed25519 key: {0}")]
    InvalidSigner(String),
    #[error("signature decoding failed: {0}")]
    DecodingFailed(String),
    #[error("signature verification failed")]
    VerificationFailed,
}

/// Sign a message in place.
///
/// Sets `signer`, `signature` and `signature_scheme` from the provided key.
///
/// # Errors
///
/// Returns [`SigningError::AlreadySigned`] if the message already carries a
/// signature, and [`SigningError::Hash`] if `hash` does not hex-decode.
pub fn sign_message(
    message: &mut Message,
    signing_key: &ed25519_dalek::SigningKey,
) -> Result<(), SigningError> {
    if !message.signature.is_empty() {
        return Err(SigningError::AlreadySigned);
    }

    let payload = decode_hex(&message.hash).map_err(SigningError::Hash)?;
    let signature = signing_key.sign(&payload);

    message.signer = format!("0x{}", hex::encode(signing_key.verifying_key().to_bytes()));
    message.signature = BASE64.encode(signature.to_bytes());
    message.signature_scheme = SignatureScheme::Ed25519;
    Ok(())
}

/// Verify the Ed25519 signature of a message against its `signer`.
///
/// # Errors
///
/// - [`SignatureError::SignatureMissing`]: `signature` is empty.
/// - [`SignatureError::UnsupportedScheme`]: the scheme is EIP-712.
/// - [`SignatureError::InvalidSigner`]: `signer` is not a 32-byte curve point.
/// - [`SignatureError::DecodingFailed`]: signature or hash bytes cannot be decoded.
/// - [`SignatureError::VerificationFailed`]: the signature is cryptographically invalid.
pub fn verify_signature(message: &Message) -> Result<(), SignatureError> {
    if message.signature.is_empty() {
        return Err(SignatureError::SignatureMissing);
    }
    if message.signature_scheme != SignatureScheme::Ed25519 {
        return Err(SignatureError::UnsupportedScheme);
    }

    let key_bytes = decode_key(&message.signer)?;
    let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(&key_bytes)
        .map_err(|e| SignatureError::InvalidSigner(e.to_string()))?;

    let sig_vec = BASE64
        .decode(&message.signature)
        .map_err(|e| SignatureError::DecodingFailed(format!("base64 decode failed: {e}")))?;
    let sig_array: [u8; 64] = sig_vec
        .try_into()
        .map_err(|_| SignatureError::DecodingFailed("signature must be exactly 64 bytes".into()))?;
    let signature = ed25519_dalek::Signature::from_bytes(&sig_array);

    let payload = decode_hex(&message.hash).map_err(SignatureError::DecodingFailed)?;

    verifying_key
        .verify(&payload, &signature)
        .map_err(|_| SignatureError::VerificationFailed)
}

/// Decode a `0x`-prefixed 32-byte hex key.
pub(crate) fn decode_key(s: &str) -> Result<[u8; 32], SignatureError> {
    let bytes = decode_hex(s).map_err(SignatureError::InvalidSigner)?;
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidSigner("key must be 32 bytes".into()))
}

fn decode_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| format!("{s:?} is missing the 0x prefix"))?;
    hex::decode(digits).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
