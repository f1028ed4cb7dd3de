use anyhow::{Context, Result};
use clap::Args;
use qris::Amount;
use tracing::info;

use super::CommandExecutor;
use crate::QrisConfig;

/// Put a fixed amount into a static payload and print the result.
#[derive(Args, Debug, Default)]
pub struct InjectCommand {
    /// Amount in Rupiah; falls back to `default_amount` from the config
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Static base payload; falls back to the config or QRIS_BASE_PAYLOAD
    #[arg(short, long)]
    pub payload: Option<String>,
}

impl CommandExecutor for InjectCommand {
    fn execute(&self, config: &QrisConfig) -> Result<String> {
        let base = self
            .payload
            .as_deref()
            .or(config.base_payload.as_deref())
            .map(str::trim)
            .context("no base payload: pass --payload, set base_payload in qris.toml or QRIS_BASE_PAYLOAD")?;

        let amount = match (self.amount, config.default_amount) {
            (Some(a), _) => Amount::new(a)?,
            (None, Some(d)) => Amount::from_rupiah(d)?,
            (None, None) => anyhow::bail!("no amount: pass --amount or set default_amount"),
        };

        let out = qris::inject_amount(base, &amount).context("cannot inject amount")?;
        info!(amount = %amount, "payload ready");
        Ok(out)
    }
}
