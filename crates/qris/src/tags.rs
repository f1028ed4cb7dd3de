//! Top-level EMV-QR tags the injector and summary look at.

use qris_tlv::Tag;

pub const CURRENCY: Tag = Tag::from_static("53");
pub const AMOUNT: Tag = Tag::from_static("54");
pub const COUNTRY: Tag = Tag::from_static("58");
pub const MERCHANT_NAME: Tag = Tag::from_static("59");
pub const MERCHANT_CITY: Tag = Tag::from_static("60");
/// Always the last record; its value is the CRC of everything before it.
pub const CRC: Tag = Tag::from_static("63");
