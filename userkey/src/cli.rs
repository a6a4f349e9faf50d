use clap::Parser;
use handshake::{DEFAULT_APPLICATION_NAME, DEFAULT_SCOPES};

pub const USAGE_EXAMPLES: &str = "\
Examples:
  userkey --forum community.openstreetmap.org
  userkey --forum meta.discourse.org --application UltimateReaderWriter --scopes read,write";

#[derive(Parser, Debug, Clone)]
#[command(name = "userkey")]
#[command(author, version, about = "Obtain a Discourse User-API-Key", long_about = None)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct CliArgs {
    /// Discourse forum host (e.g. meta.discourse.org)
    #[arg(long)]
    pub forum: Option<String>,

    /// Name of application shown on forum site
    #[arg(long, default_value = DEFAULT_APPLICATION_NAME)]
    pub application: String,

    /// Client ID (default: generated UUID v4)
    #[arg(long)]
    pub client: Option<String>,

    /// Comma-separated list of access scopes allowed for the key
    #[arg(long, default_value = DEFAULT_SCOPES)]
    pub scopes: String,

    /// Random string bound to this request (default: generated URL-safe random string)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Verbose output (maybe helpful in case of problems)
    #[arg(long)]
    pub verbose: bool,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
