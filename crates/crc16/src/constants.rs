/// Generator polynomial (x^16 + x^12 + x^5 + 1), non-reflected.
pub const POLY: u16 = 0x1021;

/// Initial register value.
pub const INIT: u16 = 0xFFFF;

/// Number of hex digits in a rendered checksum.
pub const HEX_WIDTH: usize = 4;
