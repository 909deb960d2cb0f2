//! acme person transcoder
//!
//! Reads a person payload, decodes it under the declared content type and
//! writes it back out in the encoding the accept header negotiates.
//!
//! Usage:
//!   acme-transcode --content-type application/vnd.acme.v1+json --accept application/xml < in.json

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use acme_negotiate::NegotiationEngine;
use acme_transcode::{TranscodeConfig, transcode};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "acme-transcode")]
#[command(about = "Transcode acme person payloads between media types")]
struct Args {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Declared Content-Type of the input, e.g. "application/xml; charset=ISO-8859-1"
    #[arg(short, long)]
    content_type: Option<String>,

    /// Charset of the input, overrides the Content-Type parameter
    #[arg(long)]
    charset: Option<String>,

    /// Accept header selecting the output encoding
    #[arg(short, long)]
    accept: Option<String>,

    /// Treat the input as a list of people
    #[arg(long)]
    collection: bool,

    /// Path to the config file
    #[arg(long, default_value = "acme-transcode.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = TranscodeConfig::load_from(&args.config)?.with_overrides(
        args.content_type,
        args.charset,
        args.accept,
        args.collection,
    );

    let input = read_input(args.input.as_deref())?;
    let engine = NegotiationEngine::new();

    match transcode(&engine, &input, &config) {
        Ok(encoded) => {
            info!("Content-Type: {}", encoded.header_value());
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&encoded.body)
                .context("failed to write output")?;
            stdout.flush().context("failed to flush output")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{} (status {})", e, e.status_code());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
