//! Subcommands. Each holds its parsed arguments and implements
//! [`CommandExecutor`].

mod inject;
mod inspect;
mod verify;

pub use inject::InjectCommand;
pub use inspect::InspectCommand;
pub use verify::VerifyCommand;

use anyhow::{Context, Result};
use std::io::{self, Read};

use crate::QrisConfig;

pub trait CommandExecutor {
    /// Runs the command and returns the text to print on stdout.
    fn execute(&self, config: &QrisConfig) -> Result<String>;
}

/// Uses the argument when given, otherwise reads stdin.
fn payload_or_stdin(arg: Option<&str>) -> Result<String> {
    let raw = match arg {
        Some(p) => p.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read payload from stdin")?;
            buffer
        }
    };
    let payload = raw.trim();
    if payload.is_empty() {
        anyhow::bail!("payload cannot be empty");
    }
    Ok(payload.to_string())
}
