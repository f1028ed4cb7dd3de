use anyhow::{Context, Result};
use clap::Args;
use qris::Payload;

use super::{payload_or_stdin, CommandExecutor};
use crate::QrisConfig;

/// List the records of a payload.
#[derive(Args, Debug, Default)]
pub struct InspectCommand {
    /// Payload to decode; read from stdin if omitted
    pub payload: Option<String>,

    /// Print the merchant/amount summary as JSON instead
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self, _config: &QrisConfig) -> Result<String> {
        let text = payload_or_stdin(self.payload.as_deref())?;
        let payload = Payload::parse(&text).context("cannot decode payload")?;
        if self.json {
            return Ok(serde_json::to_string_pretty(&payload.summary())?);
        }
        let lines: Vec<String> = payload
            .records()
            .iter()
            .map(|r| format!("{} {:02} {}", r.tag(), r.len(), r.value()))
            .collect();
        Ok(lines.join("\n"))
    }
}
