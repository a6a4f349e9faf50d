mod cli;
mod config;
mod console;
mod session;
mod telemetry;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use handshake::HandshakeError;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&mut out) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            let reported = console::print_fatal_error(&mut out, &format!("{:#}", e))
                .and_then(|()| out.flush());
            if let Err(write_err) = reported {
                eprintln!("Fatal Error: {:#} (stdout unavailable: {})", e, write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(out: &mut W) -> Result<ExitCode> {
    let program = console::ProgramInfo::current();

    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.lines().next().unwrap_or_default();
            console::print_banner(out, &program)?;
            console::print_command_line_error(out, message.trim_start_matches("error: "))?;
            return Ok(ExitCode::FAILURE);
        }
    };
    telemetry::init_tracing(&args.log_level);
    console::print_banner(out, &program)?;

    let settings = match config::Settings::from_args(args) {
        Ok(settings) => settings,
        Err(HandshakeError::Configuration(message)) => {
            console::print_command_line_error(out, &message)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    console::print_workflow(out)?;
    if settings.verbose {
        console::print_settings(out, &settings)?;
    }
    session::run(&settings, io::stdin().lock(), out)?;
    Ok(ExitCode::SUCCESS)
}
