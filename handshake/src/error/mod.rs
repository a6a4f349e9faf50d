mod handshake_error;

pub use handshake_error::HandshakeError;
pub type Result<T> = std::result::Result<T, HandshakeError>;
