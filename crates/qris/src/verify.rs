//! Checksum verification.

use qris_crc16::{crc16_ccitt_false, from_hex, to_hex, HEX_WIDTH};
use tracing::debug;

use crate::{tags, Payload, QrisError};

/// Checks that `payload` ends with a checksum field matching the CRC of
/// everything before its 4 digits. Returns the checksum on success.
pub fn verify(payload: &str) -> Result<u16, QrisError> {
    let decoded = Payload::parse(payload)?;
    let last = decoded
        .records()
        .last()
        .filter(|r| r.tag() == tags::CRC && r.len() == HEX_WIDTH)
        .ok_or(QrisError::MissingChecksum)?;

    let covered = &payload[..payload.len() - last.value().len()];
    let expected = crc16_ccitt_false(covered.as_bytes());
    match from_hex(last.value()) {
        Ok(found) if found == expected => {
            debug!(checksum = %to_hex(expected), "checksum verified");
            Ok(expected)
        }
        _ => Err(QrisError::ChecksumMismatch {
            expected: to_hex(expected),
            found: last.value().to_string(),
        }),
    }
}
