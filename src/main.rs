//! Confab CLI
//!
//! Loads deployment properties, generates the Consul agent configuration
//! and writes it where the daemon will read it (or to stdout).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use confab::{generate_configuration, output, RawConfiguration};

/// Consul agent configuration generator
#[derive(Parser, Debug)]
#[command(name = "confab")]
#[command(version, about = "Generates Consul agent configuration from deployment properties")]
struct Args {
    /// Properties file (JSON, TOML or YAML)
    #[arg(short, long, env = "CONFAB_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the agent configuration; stdout when omitted
    #[arg(short, long, env = "CONFAB_OUTPUT")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "CONFAB_DEBUG")]
    debug: bool,

    /// Print the loaded properties as TOML instead of generating
    #[arg(long)]
    print_properties: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the generated config
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting confab");

    let raw = RawConfiguration::load(args.config.as_deref())
        .context("Failed to load deployment properties")?;

    if args.print_properties {
        let properties = raw
            .to_toml()
            .context("Failed to render deployment properties")?;
        print!("{}", properties);
        return Ok(());
    }

    let config = generate_configuration(&raw);

    match &args.output {
        Some(path) => output::write_configuration(path, &config)
            .await
            .context("Failed to write agent configuration")?,
        None => {
            let json = config
                .to_json_pretty()
                .context("Failed to render agent configuration")?;
            println!("{}", json);
        }
    }

    Ok(())
}
