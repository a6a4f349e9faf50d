//! Discourse User-API-Key handshake: keypair generation, authorization
//! request construction and decryption of the forum's response.

pub mod crypto;
pub mod error;
pub mod handshake;
pub mod request;
pub mod response;

pub use crypto::{DEFAULT_KEY_BITS, RsaKeyPair, encrypt_with_public_key};
pub use error::{HandshakeError, Result};
pub use handshake::{Handshake, HandshakeState};
pub use request::{
    AuthorizationRequest, DEFAULT_APPLICATION_NAME, DEFAULT_SCOPES, RequestBuilder,
    RequestParameters,
};
pub use response::{
    UserApiKeyRecord, decrypt_payload, decrypt_response, normalize_response, parse_payload,
};
