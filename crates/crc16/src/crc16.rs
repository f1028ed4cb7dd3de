//! Table-driven and bitwise CRC-16/CCITT-FALSE.

use crate::constants::{INIT, POLY};

const fn step(mut crc: u16) -> u16 {
    let mut j = 0;
    while j < 8 {
        if crc & 0x8000 != 0 {
            crc = (crc << 1) ^ POLY;
        } else {
            crc <<= 1;
        }
        j += 1;
    }
    crc
}

/// Lookup table: entry `i` is the register after shifting `i << 8` through
/// eight rounds of the polynomial.
const TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = step((i as u16) << 8);
        i += 1;
    }
    table
};

/// Computes the CRC-16/CCITT-FALSE checksum of `data`.
///
/// # Example
///
/// ```
/// use qris_crc16::crc16_ccitt_false;
///
/// assert_eq!(crc16_ccitt_false(b""), 0xFFFF);
/// assert_eq!(crc16_ccitt_false(b"123456789"), 0x29B1);
/// ```
#[inline]
#[must_use]
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    let mut digest = Crc16::new();
    digest.update(data);
    digest.finish()
}

/// Bit-at-a-time reference implementation.
///
/// Slower than [`crc16_ccitt_false`] but follows the textbook definition
/// one shift at a time; the table is checked against it.
#[must_use]
pub fn crc16_ccitt_false_bitwise(data: &[u8]) -> u16 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Incremental CRC-16/CCITT-FALSE digest.
///
/// Feeding data in several [`update`](Crc16::update) calls gives the same
/// result as one call over the concatenation.
///
/// ```
/// use qris_crc16::{crc16_ccitt_false, Crc16};
///
/// let mut digest = Crc16::new();
/// digest.update(b"12345");
/// digest.update(b"6789");
/// assert_eq!(digest.finish(), crc16_ccitt_false(b"123456789"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    crc: u16,
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc16 {
    pub const fn new() -> Self {
        Self { crc: INIT }
    }

    /// Feeds more bytes into the register.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.crc;
        for &byte in data {
            let idx = ((crc >> 8) as u8 ^ byte) as usize;
            crc = (crc << 8) ^ TABLE[idx];
        }
        self.crc = crc;
    }

    /// Returns the current checksum. The digest can keep being updated.
    #[inline]
    #[must_use]
    pub const fn finish(&self) -> u16 {
        self.crc
    }
}
