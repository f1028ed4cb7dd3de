//! Amount injection.

use tracing::debug;

use crate::{Amount, Payload, QrisError};

/// Injects `amount` into a static payload and returns the final payload
/// text with a recomputed checksum.
///
/// Fails with [`QrisError::InvalidAmount`] for non-positive or non-finite
/// amounts, with [`QrisError::MalformedPayload`] when `base_payload` does
/// not decode into at least one record, and with [`QrisError::ValueTooLong`]
/// when the formatted amount does not fit the 2-digit length field.
///
/// ```
/// let base = "00020101021153033605802ID5905Kelas6007BANDUNG6304FFFF";
/// let out = qris::inject(base, 100000.0).unwrap();
/// assert!(out.contains("5406100000"));
/// assert!(qris::verify(&out).is_ok());
/// ```
pub fn inject(base_payload: &str, amount: f64) -> Result<String, QrisError> {
    let amount = Amount::new(amount)?;
    inject_amount(base_payload, &amount)
}

/// Like [`inject`], with an already validated amount.
pub fn inject_amount(base_payload: &str, amount: &Amount) -> Result<String, QrisError> {
    let (payload, placement) = Payload::parse(base_payload)?.with_amount_placed(amount)?;
    let out = payload.encode()?;
    debug!(
        records = payload.records().len(),
        amount = amount.as_str(),
        ?placement,
        "amount injected"
    );
    Ok(out)
}
