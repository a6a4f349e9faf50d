use crate::error::{HandshakeError, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rsa::rand_core::CryptoRngCore;
use uuid::Builder;

/// Random bytes behind every generated nonce.
pub const NONCE_BYTES: usize = 20;

fn random_bytes<const N: usize, R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| HandshakeError::RandomSource(e.to_string()))?;
    Ok(bytes)
}

/// URL-safe, unpadded base64 over [`NONCE_BYTES`] random bytes (27 characters).
pub fn generate_nonce<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<String> {
    let bytes: [u8; NONCE_BYTES] = random_bytes(rng)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Version-4 UUID in hyphenated lowercase form.
pub fn generate_client_id<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<String> {
    let bytes: [u8; 16] = random_bytes(rng)?;
    Ok(Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string())
}
