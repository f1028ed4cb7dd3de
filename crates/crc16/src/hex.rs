//! The 4-digit hex rendering carried in the checksum field.

use crate::constants::HEX_WIDTH;
use crate::Crc16Error;

/// Renders a checksum as 4 uppercase hex digits, zero-padded on the left.
///
/// ```
/// use qris_crc16::to_hex;
///
/// assert_eq!(to_hex(0x29B1), "29B1");
/// assert_eq!(to_hex(0x000F), "000F");
/// ```
pub fn to_hex(crc: u16) -> String {
    format!("{:0width$X}", crc, width = HEX_WIDTH)
}

/// Parses a 4-digit hex checksum. Lowercase digits are accepted.
pub fn from_hex(s: &str) -> Result<u16, Crc16Error> {
    let count = s.chars().count();
    if count != HEX_WIDTH {
        return Err(Crc16Error::InvalidHexLength(count));
    }
    let mut value: u16 = 0;
    for c in s.chars() {
        let digit = c.to_digit(16).ok_or(Crc16Error::InvalidHexDigit(c))?;
        value = (value << 4) | digit as u16;
    }
    Ok(value)
}
