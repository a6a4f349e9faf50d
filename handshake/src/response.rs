use crate::crypto::RsaKeyPair;
use crate::error::{HandshakeError, Result};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use tracing::debug;

/// Payload the forum encrypts under our public key once access is granted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserApiKeyRecord {
    pub key: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub push: bool,
    #[serde(rename = "api", default)]
    pub api_version: i64,
}

impl UserApiKeyRecord {
    /// The forum echoes the request nonce back; anything else is a replayed
    /// or foreign response.
    pub fn verify_nonce(&self, expected: &str) -> Result<()> {
        if self.nonce == expected {
            Ok(())
        } else {
            Err(HandshakeError::NonceMismatch {
                expected: expected.to_string(),
                received: self.nonce.clone(),
            })
        }
    }
}

/// Drops every whitespace character; the forum wraps the blob when displaying it.
pub fn normalize_response(pasted: &str) -> String {
    pasted.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decodes and decrypts the pasted blob, returning the raw JSON plaintext.
pub fn decrypt_payload(key_pair: &RsaKeyPair, pasted: &str) -> Result<Vec<u8>> {
    let encoded = normalize_response(pasted);
    if encoded.is_empty() {
        return Err(HandshakeError::EmptyInput);
    }

    let ciphertext = BASE64.decode(encoded.as_bytes())?;
    debug!(len = ciphertext.len(), "Decoded encrypted User-API-Key data");

    key_pair.decrypt(&ciphertext)
}

pub fn parse_payload(plaintext: &[u8]) -> Result<UserApiKeyRecord> {
    serde_json::from_slice(plaintext).map_err(|e| HandshakeError::MalformedPayload(e.to_string()))
}

pub fn decrypt_response(key_pair: &RsaKeyPair, pasted: &str) -> Result<UserApiKeyRecord> {
    parse_payload(&decrypt_payload(key_pair, pasted)?)
}
