use anyhow::{Context, Result};
use clap::Args;

use super::{payload_or_stdin, CommandExecutor};
use crate::QrisConfig;

/// Check the trailing checksum of a payload.
#[derive(Args, Debug, Default)]
pub struct VerifyCommand {
    /// Payload to check; read from stdin if omitted
    pub payload: Option<String>,
}

impl CommandExecutor for VerifyCommand {
    fn execute(&self, _config: &QrisConfig) -> Result<String> {
        let payload = payload_or_stdin(self.payload.as_deref())?;
        let crc = qris::verify(&payload).context("payload failed verification")?;
        Ok(format!("ok {crc:04X}"))
    }
}
