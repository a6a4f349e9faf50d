use crate::cli::CliArgs;
use crate::config::Settings;
use clap::CommandFactory;
use handshake::{RequestParameters, UserApiKeyRecord};
use std::io::{self, BufRead, Write};

pub const WORKFLOW: &str = "
Workflow for getting an User-API-Key:
  Step 1: copy forum URL into your browser
  Step 2: authorize application access on forum site
  Step 3: copy encrypted User-API-Key data from forum site in here
  Step 4: save User-API-Key into your key vault";

#[derive(Debug, Clone, Copy)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub purpose: &'static str,
    pub info: &'static str,
}

impl ProgramInfo {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            purpose: env!("CARGO_PKG_DESCRIPTION"),
            info: "This program obtains a User-API-Key for a Discourse forum.",
        }
    }
}

pub fn print_banner<W: Write>(out: &mut W, program: &ProgramInfo) -> io::Result<()> {
    writeln!(out, "\nProgram:")?;
    writeln!(out, "  Name    : {}", program.name)?;
    writeln!(out, "  Release : v{}", program.version)?;
    writeln!(out, "  Purpose : {}", program.purpose)?;
    writeln!(out, "  Info    : {}", program.info)
}

pub fn print_workflow<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", WORKFLOW)
}

pub fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    let help = CliArgs::command().render_help();
    writeln!(out, "\n{}", help)?;
    print_workflow(out)?;
    writeln!(out)
}

pub fn print_settings<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(out, "\nParameters from command line:")?;
    writeln!(out, "  forum       : {}", settings.forum)?;
    writeln!(out, "  application : {}", settings.application)?;
    writeln!(out, "  client      : {}", settings.client.as_deref().unwrap_or(""))?;
    writeln!(out, "  scopes      : {}", settings.scopes)?;
    writeln!(out, "  nonce       : {}", settings.nonce.as_deref().unwrap_or(""))
}

pub fn print_request_parameters<W: Write>(
    out: &mut W,
    parameters: &RequestParameters,
) -> io::Result<()> {
    writeln!(out, "\nRequest parameters for URL:")?;
    writeln!(out, "  forum       : {}", parameters.forum_host)?;
    writeln!(out, "  application : {}", parameters.application_name)?;
    writeln!(out, "  client      : {}", parameters.client_id)?;
    writeln!(out, "  scopes      : {}", parameters.scopes)?;
    writeln!(out, "  nonce       : {}", parameters.nonce)
}

pub fn print_key_material<W: Write>(
    out: &mut W,
    private_key_pem: &str,
    public_key_pem: &str,
    fingerprint: &str,
) -> io::Result<()> {
    write!(out, "\nPrivate Key = {}", private_key_pem)?;
    write!(out, "\nPublic Key = {}", public_key_pem)?;
    writeln!(out, "\nPublic Key SHA-256 = {}", fingerprint)
}

pub fn print_authorization_steps<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "\nStep 1: copy forum URL into your browser ...\n\n{}", url)?;
    writeln!(out, "\nStep 2: authorize application access on forum site ...")?;
    writeln!(
        out,
        "\nStep 3: copy encrypted User-API-Key data from forum site in here (and press Enter) ...\n"
    )?;
    out.flush()
}

/// Blocks until one line is available; EOF yields an empty string.
pub fn read_response<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

pub fn print_payload<W: Write>(out: &mut W, payload: &str) -> io::Result<()> {
    writeln!(out, "\nDecrypted User-API-Key data = {}", payload)
}

pub fn print_record<W: Write>(out: &mut W, record: &UserApiKeyRecord) -> io::Result<()> {
    writeln!(
        out,
        "\nUser-API-Key = {}\n-----------------------------------------------",
        record.key
    )?;
    writeln!(out, "\nStep 4: save User-API-Key into your key vault\n")
}

/// Reports a bad command line the way a missing `--forum` is reported.
pub fn print_command_line_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\nError: {}", message)?;
    print_usage(out)
}

pub fn print_fatal_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "Fatal Error: {}\n", message)
}
