use super::utils;
use crate::error::{HandshakeError, Result};
use rsa::{
    Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey,
    pkcs8::{EncodePrivateKey, LineEnding},
    rand_core::{CryptoRngCore, OsRng},
    traits::PublicKeyParts,
};
use std::fmt;
use tracing::debug;

pub const DEFAULT_KEY_BITS: usize = 2048;
pub const MIN_KEY_BITS: usize = 2048;

/// Keypair for a single handshake. Lives only in memory for the process lifetime.
#[derive(Clone)]
pub struct RsaKeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl RsaKeyPair {
    pub fn generate(bits: usize) -> Result<Self> {
        Self::generate_with_rng(&mut OsRng, bits)
    }

    pub fn generate_with_rng<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: usize) -> Result<Self> {
        if bits < MIN_KEY_BITS {
            return Err(HandshakeError::KeyGeneration(format!(
                "key size of {} bits is below the minimum of {} bits",
                bits, MIN_KEY_BITS
            )));
        }

        debug!(bits, "Generating RSA key pair");
        let private_key = RsaPrivateKey::new(rng, bits)
            .map_err(|e| HandshakeError::KeyGeneration(e.to_string()))?;
        let public_key = private_key.to_public_key();

        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    pub fn private_key_to_pem(&self) -> Result<String> {
        self.private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map(|s| s.to_string())
            .map_err(|e| HandshakeError::KeyGeneration(e.to_string()))
    }

    pub fn public_key_to_pem(&self) -> Result<String> {
        utils::public_key_to_pem(&self.public_key)
    }

    pub fn public_key_fingerprint(&self) -> Result<String> {
        utils::public_key_fingerprint(&self.public_key)
    }

    /// PKCS#1 v1.5 decryption with blinding. Every failure collapses into
    /// [`HandshakeError::Decryption`].
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() != self.private_key.size() {
            return Err(HandshakeError::Decryption);
        }
        let mut rng = OsRng;
        self.private_key
            .decrypt_blinded(&mut rng, Pkcs1v15Encrypt, data)
            .map_err(|_| HandshakeError::Decryption)
    }
}

impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
