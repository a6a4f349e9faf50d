use crate::crypto::{self, public_key_to_pem};
use crate::error::{HandshakeError, Result};
use rsa::RsaPublicKey;
use rsa::rand_core::{CryptoRngCore, OsRng};
use std::fmt;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_APPLICATION_NAME: &str = "GenericDiscourseReader";
pub const DEFAULT_SCOPES: &str = "read";
pub const USER_API_KEY_PATH: &str = "/user-api-key/new";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub forum_host: String,
    pub application_name: String,
    pub client_id: String,
    pub scopes: String,
    pub nonce: String,
    pub public_key_pem: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    parameters: RequestParameters,
    url: String,
}

impl AuthorizationRequest {
    pub fn parameters(&self) -> &RequestParameters {
        &self.parameters
    }

    pub fn nonce(&self) -> &str {
        &self.parameters.nonce
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for AuthorizationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Assembles the `/user-api-key/new` authorization URL.
///
/// Client id and nonce are generated at build time unless overridden.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    forum_host: String,
    application_name: String,
    client_id: Option<String>,
    scopes: String,
    nonce: Option<String>,
}

impl RequestBuilder {
    pub fn new(forum_host: impl Into<String>) -> Self {
        Self {
            forum_host: forum_host.into(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            client_id: None,
            scopes: DEFAULT_SCOPES.to_string(),
            nonce: None,
        }
    }

    pub fn application_name(mut self, application_name: impl Into<String>) -> Self {
        self.application_name = application_name.into();
        self
    }

    pub fn client_id(mut self, client_id: Option<String>) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = scopes.into();
        self
    }

    pub fn nonce(mut self, nonce: Option<String>) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn build(&self, public_key: &RsaPublicKey) -> Result<AuthorizationRequest> {
        self.build_with_rng(public_key, &mut OsRng)
    }

    pub fn build_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        public_key: &RsaPublicKey,
        rng: &mut R,
    ) -> Result<AuthorizationRequest> {
        let client_id = match &self.client_id {
            Some(client_id) => client_id.clone(),
            None => crypto::generate_client_id(rng)?,
        };
        let nonce = match &self.nonce {
            Some(nonce) => nonce.clone(),
            None => crypto::generate_nonce(rng)?,
        };

        let parameters = RequestParameters {
            forum_host: self.forum_host.clone(),
            application_name: self.application_name.clone(),
            client_id,
            scopes: self.scopes.clone(),
            nonce,
            public_key_pem: public_key_to_pem(public_key)?,
        };
        debug!(
            forum = %parameters.forum_host,
            application = %parameters.application_name,
            client_id = %parameters.client_id,
            scopes = %parameters.scopes,
            "Request parameters assembled"
        );

        let url = authorization_url(&parameters)?;
        info!(forum = %parameters.forum_host, "Authorization request built");

        Ok(AuthorizationRequest { parameters, url })
    }
}

fn authorization_url(parameters: &RequestParameters) -> Result<String> {
    let host = parameters.forum_host.as_str();
    if host.trim().is_empty() {
        return Err(HandshakeError::Configuration(
            "forum host must not be empty".to_string(),
        ));
    }

    let mut url = Url::parse(&format!("https://{}{}", host, USER_API_KEY_PATH)).map_err(|e| {
        HandshakeError::Configuration(format!("invalid forum host [{}]: {}", host, e))
    })?;
    if url.query().is_some() || url.fragment().is_some() || !url.path().ends_with(USER_API_KEY_PATH)
    {
        return Err(HandshakeError::Configuration(format!(
            "invalid forum host [{}]",
            host
        )));
    }

    url.query_pairs_mut()
        .append_pair("application_name", &parameters.application_name)
        .append_pair("client_id", &parameters.client_id)
        .append_pair("scopes", &parameters.scopes)
        .append_pair("public_key", &parameters.public_key_pem)
        .append_pair("nonce", &parameters.nonce);

    Ok(url.into())
}
