//! qris - put fixed amounts into static QRIS payloads.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qris_cli::commands::{CommandExecutor, InjectCommand, InspectCommand, VerifyCommand};
use qris_cli::{QrisConfig, BASE_PAYLOAD_ENV};

#[derive(Parser)]
#[command(name = "qris")]
#[command(version)]
#[command(about = "Inject fixed amounts into static QRIS payloads and check their checksums")]
struct Cli {
    /// Config file (defaults to ./qris.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Inject(InjectCommand),
    Verify(VerifyCommand),
    Inspect(InspectCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Inject(cmd) => cmd,
            Commands::Verify(cmd) => cmd,
            Commands::Inspect(cmd) => cmd,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = QrisConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_env_override(env::var(BASE_PAYLOAD_ENV).ok());

    let output = cli.command.executor().execute(&config)?;
    println!("{output}");
    Ok(())
}
