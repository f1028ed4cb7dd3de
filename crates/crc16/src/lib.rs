//! CRC-16/CCITT-FALSE for EMV-QR payloads.
//!
//! EMV-QR (and the Indonesian QRIS profile built on it) ends every payload
//! with tag `63`, a 4-digit uppercase hex CRC computed with these
//! parameters:
//!
//! | Parameter  | Value  |
//! |------------|--------|
//! | Polynomial | 0x1021 |
//! | Init       | 0xFFFF |
//! | RefIn      | false  |
//! | RefOut     | false  |
//! | XorOut     | 0x0000 |
//!
//! # Overview
//!
//! - [`crc16_ccitt_false`] - one-shot checksum of a byte slice
//! - [`Crc16`] - incremental digest for data arriving in pieces
//! - [`to_hex`] / [`from_hex`] - the 4-digit wire rendering
//!
//! # Example
//!
//! ```
//! use qris_crc16::{crc16_ccitt_false, to_hex};
//!
//! assert_eq!(crc16_ccitt_false(b"123456789"), 0x29B1);
//! assert_eq!(to_hex(821), "0335");
//! ```

mod constants;
mod crc16;
mod hex;

pub use constants::{HEX_WIDTH, INIT, POLY};
pub use crc16::{crc16_ccitt_false, crc16_ccitt_false_bitwise, Crc16};
pub use hex::{from_hex, to_hex};

use thiserror::Error;

/// Error type for parsing a rendered checksum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Crc16Error {
    #[error("checksum must be 4 hex digits, got {0} characters")]
    InvalidHexLength(usize),
    #[error("invalid hex digit {0:?} in checksum")]
    InvalidHexDigit(char),
}
