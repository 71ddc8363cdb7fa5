// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Owner-side signing of emergency-transfer authorizations.
//!
//! Owners sign off-line and hand the resulting `(v, r, s)` triple to a
//! relayer. Keys are accepted as raw hex or as PEM (SEC1 or PKCS#8). The
//! relayer itself never signs; these helpers are the library surface for
//! owner tooling:
//!
//! ```rust,ignore
//! let signer = signer_from_pem_file("owner.pem")?;
//! let message = AuthorizationMessage::full(signer.address(), backup);
//! let SplitSignature { v, r, s } = sign_authorization(&signer, &domain, &message)?;
//! // POST /v1/emergency-transfer {account, backup_address, v, r, s}
//! ```

use std::path::Path;

use alloy::signers::{local::PrivateKeySigner, SignerSync};
use k256::SecretKey;

use super::domain::TokenDomain;
use super::typed_data::AuthorizationMessage;
use super::types::SplitSignature;

/// Errors raised while loading keys or producing signatures.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Failed to read key file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Parse a private key from PEM format to hex string.
///
/// # Returns
/// * `Ok(String)` - Hex-encoded private key (64 characters, no 0x prefix)
/// * `Err(SigningError)` - If PEM parsing fails
fn pem_to_hex(pem_bytes: &[u8]) -> Result<String, SigningError> {
    let pem_str = std::str::from_utf8(pem_bytes)
        .map_err(|e| SigningError::InvalidPrivateKey(format!("Invalid UTF-8: {}", e)))?;

    let pem = pem::parse(pem_str)
        .map_err(|e| SigningError::InvalidPrivateKey(format!("Invalid PEM: {}", e)))?;

    let secret_key = SecretKey::from_sec1_der(pem.contents())
        .or_else(|_| parse_pkcs8_to_secret_key(pem.contents()))
        .map_err(|e| SigningError::InvalidPrivateKey(format!("Invalid key format: {}", e)))?;

    Ok(alloy::hex::encode(secret_key.to_bytes()))
}

fn parse_pkcs8_to_secret_key(der: &[u8]) -> Result<SecretKey, String> {
    use k256::pkcs8::DecodePrivateKey;
    SecretKey::from_pkcs8_der(der).map_err(|e| e.to_string())
}

/// Create a signer from a hex private key (with or without `0x`).
pub fn signer_from_hex(private_key_hex: &str) -> Result<PrivateKeySigner, SigningError> {
    let key_bytes = alloy::hex::decode(private_key_hex.trim())
        .map_err(|e| SigningError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| SigningError::InvalidPrivateKey(e.to_string()))
}

/// Create a signer from PEM-encoded private key.
pub fn signer_from_pem(pem_bytes: &[u8]) -> Result<PrivateKeySigner, SigningError> {
    let hex_key = pem_to_hex(pem_bytes)?;
    signer_from_hex(&hex_key)
}

/// Load a PEM key file and create a signer from it.
pub fn signer_from_pem_file(path: impl AsRef<Path>) -> Result<PrivateKeySigner, SigningError> {
    let pem_bytes = std::fs::read(path.as_ref())?;
    signer_from_pem(&pem_bytes)
}

/// Sign an authorization for `domain`, returning the relayer-ready triple.
///
/// `v` is encoded as `27`/`28`, the form `ecrecover` expects.
pub fn sign_authorization(
    signer: &PrivateKeySigner,
    domain: &TokenDomain,
    message: &AuthorizationMessage,
) -> Result<SplitSignature, SigningError> {
    let digest = message.signing_hash(domain);
    let signature = signer
        .sign_hash_sync(&digest)
        .map_err(|e| SigningError::SigningFailed(e.to_string()))?;

    Ok(SplitSignature {
        v: 27 + u8::from(signature.v()),
        r: signature.r().to_be_bytes::<32>().into(),
        s: signature.s().to_be_bytes::<32>().into(),
    })
}
