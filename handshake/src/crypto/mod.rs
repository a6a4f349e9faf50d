pub mod random;
pub mod rsa_key_pair;
pub mod utils;

pub use random::{NONCE_BYTES, generate_client_id, generate_nonce};
pub use rsa_key_pair::{DEFAULT_KEY_BITS, MIN_KEY_BITS, RsaKeyPair};
pub use utils::{
    encrypt_with_public_key, public_key_fingerprint, public_key_from_pem, public_key_to_pem,
};
