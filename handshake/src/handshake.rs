use crate::crypto::RsaKeyPair;
use crate::error::{HandshakeError, Result};
use crate::request::{AuthorizationRequest, RequestBuilder};
use crate::response::{UserApiKeyRecord, decrypt_payload, parse_payload};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    KeysGenerated,
    RequestIssued,
    AwaitingUserInput,
    ResponseDecrypted,
}

impl fmt::Display for HandshakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandshakeState::KeysGenerated => "KeysGenerated",
            HandshakeState::RequestIssued => "RequestIssued",
            HandshakeState::AwaitingUserInput => "AwaitingUserInput",
            HandshakeState::ResponseDecrypted => "ResponseDecrypted",
        };
        f.write_str(name)
    }
}

/// One run of the User-API-Key flow.
///
/// Every transition consumes the handshake, so a state is never entered twice.
/// A failed transition drops the handshake along with its keys.
#[derive(Debug)]
pub struct Handshake {
    key_pair: RsaKeyPair,
    request: Option<AuthorizationRequest>,
    payload: Option<Vec<u8>>,
    state: HandshakeState,
}

impl Handshake {
    pub fn from_key_pair(key_pair: RsaKeyPair) -> Self {
        info!(state = %HandshakeState::KeysGenerated, "Handshake started");
        Self {
            key_pair,
            request: None,
            payload: None,
            state: HandshakeState::KeysGenerated,
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn key_pair(&self) -> &RsaKeyPair {
        &self.key_pair
    }

    pub fn request(&self) -> Option<&AuthorizationRequest> {
        self.request.as_ref()
    }

    pub fn issue_request(mut self, builder: &RequestBuilder) -> Result<Self> {
        self.advance(HandshakeState::KeysGenerated, HandshakeState::RequestIssued)?;
        self.request = Some(builder.build(self.key_pair.public_key())?);
        Ok(self)
    }

    pub fn await_response(mut self) -> Result<Self> {
        self.advance(HandshakeState::RequestIssued, HandshakeState::AwaitingUserInput)?;
        Ok(self)
    }

    /// Decrypts the pasted response. The plaintext is kept as received so it
    /// can be shown even when it turns out not to be a valid record.
    pub fn complete(mut self, pasted: &str) -> Result<Self> {
        self.advance(
            HandshakeState::AwaitingUserInput,
            HandshakeState::ResponseDecrypted,
        )?;
        self.payload = Some(decrypt_payload(&self.key_pair, pasted)?);
        Ok(self)
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Parses the decrypted payload and checks that it answers our request.
    pub fn into_record(self) -> Result<UserApiKeyRecord> {
        let payload = match (self.state, &self.payload) {
            (HandshakeState::ResponseDecrypted, Some(payload)) => payload,
            _ => {
                return Err(HandshakeError::InvalidTransition {
                    from: self.state,
                    to: HandshakeState::ResponseDecrypted,
                });
            }
        };
        let record = parse_payload(payload)?;
        if let Some(request) = &self.request {
            record.verify_nonce(request.nonce())?;
        }
        Ok(record)
    }

    fn advance(&mut self, from: HandshakeState, to: HandshakeState) -> Result<()> {
        if self.state != from {
            return Err(HandshakeError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        info!(from = %from, to = %to, "Handshake state changed");
        self.state = to;
        Ok(())
    }
}
