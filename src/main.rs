use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphene_rpc_decode::{AppConfig, ResponseDecoderFactory};
use graphene_rpc_decode::shared::LoggingUtils;
use tracing::{error, info};

/// Decode a saved Graphene RPC reply and print it as typed JSON
#[derive(Debug, Parser)]
#[command(name = "graphene-decode", version, about)]
struct Args {
    /// RPC method the reply belongs to, e.g. get_block
    method: String,

    /// File holding the raw JSON-RPC reply
    file: PathBuf,

    /// Configuration file (defaults to Decoder.toml when present)
    #[arg(long)]
    config: Option<String>,

    /// Print compact instead of pretty JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(file) => AppConfig::load_from(file, true),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    LoggingUtils::initialize(&config.logging.level, &config.logging.format)?;

    let factory = ResponseDecoderFactory::from_config(&config.decoder);
    let raw = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    info!(method = %args.method, bytes = raw.len(), "Decoding reply");
    let decoded = factory.decode_method(&raw, &args.method)?;

    let rendered = if args.compact {
        serde_json::to_string(&decoded)?
    } else {
        serde_json::to_string_pretty(&decoded)?
    };
    println!("{}", rendered);

    Ok(())
}
