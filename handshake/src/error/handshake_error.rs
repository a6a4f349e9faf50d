use crate::handshake::HandshakeState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandshakeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Random source error: {0}")]
    RandomSource(String),

    #[error("User-API-Key data from forum site missing")]
    EmptyInput,

    #[error("Base64 decode error: {0}")]
    Decoding(#[from] base64::DecodeError),

    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Carries no cause so that padding failures cannot be told apart.
    #[error("Decryption error: User-API-Key data could not be decrypted")]
    Decryption,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Nonce mismatch: expected [{expected}], received [{received}]")]
    NonceMismatch { expected: String, received: String },

    #[error("Invalid handshake transition from {from} to {to}")]
    InvalidTransition {
        from: HandshakeState,
        to: HandshakeState,
    },
}
