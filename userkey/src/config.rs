use crate::cli::CliArgs;
use handshake::{HandshakeError, RequestBuilder, Result};

/// Validated run settings derived from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub forum: String,
    pub application: String,
    pub client: Option<String>,
    pub scopes: String,
    pub nonce: Option<String>,
    pub verbose: bool,
    pub log_level: String,
}

impl Settings {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let forum = args
            .forum
            .as_deref()
            .map(normalize_forum)
            .filter(|forum| !forum.is_empty())
            .ok_or_else(|| {
                HandshakeError::Configuration("mandatory option '--forum' missing".to_string())
            })?;

        let application = args.application.trim().to_string();
        if application.is_empty() {
            return Err(HandshakeError::Configuration(
                "application name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            forum,
            application,
            client: non_empty(args.client),
            scopes: normalize_scopes(&args.scopes)?,
            nonce: non_empty(args.nonce),
            verbose: args.verbose,
            log_level: args.log_level,
        })
    }

    pub fn request_builder(&self) -> RequestBuilder {
        RequestBuilder::new(self.forum.clone())
            .application_name(self.application.clone())
            .client_id(self.client.clone())
            .scopes(self.scopes.clone())
            .nonce(self.nonce.clone())
    }
}

/// Accepts `https://host/` as well as a bare host.
fn normalize_forum(forum: &str) -> String {
    let forum = forum.trim();
    let forum = forum
        .strip_prefix("https://")
        .or_else(|| forum.strip_prefix("http://"))
        .unwrap_or(forum);
    forum.trim_end_matches('/').to_string()
}

fn normalize_scopes(scopes: &str) -> Result<String> {
    let scopes: Vec<&str> = scopes
        .split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .collect();
    if scopes.is_empty() {
        return Err(HandshakeError::Configuration(
            "at least one scope is required".to_string(),
        ));
    }
    Ok(scopes.join(","))
}

// An empty override means "generate one".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
