use crate::error::{HandshakeError, Result};
use rsa::{
    Pkcs1v15Encrypt, RsaPublicKey,
    pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding},
    rand_core::OsRng,
};
use sha2::{Digest, Sha256};

/// SPKI DER wrapped in `PUBLIC KEY` armor.
pub fn public_key_to_pem(public_key: &RsaPublicKey) -> Result<String> {
    public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| HandshakeError::KeyGeneration(e.to_string()))
}

pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .map_err(|e| HandshakeError::Configuration(format!("invalid public key PEM: {}", e)))
}

/// Lowercase hex SHA-256 over the SPKI DER encoding.
pub fn public_key_fingerprint(public_key: &RsaPublicKey) -> Result<String> {
    let der = public_key
        .to_public_key_der()
        .map_err(|e| HandshakeError::KeyGeneration(e.to_string()))?;
    let mut hasher = Sha256::new();
    hasher.update(der.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Forum side of the exchange: PKCS#1 v1.5 encryption under our public key.
pub fn encrypt_with_public_key(public_key: &RsaPublicKey, data: &[u8]) -> Result<Vec<u8>> {
    let mut rng = OsRng;
    public_key
        .encrypt(&mut rng, Pkcs1v15Encrypt, data)
        .map_err(|e| HandshakeError::Encryption(e.to_string()))
}
