//! TLV codec for EMV-QR payload text.
//!
//! An EMV-QR payload is a flat concatenation of records, each written as a
//! 2-digit tag, a 2-digit decimal length and `length` characters of value:
//!
//! ```text
//! 00 02 01 | 01 02 11 | 53 03 360 | 58 02 ID | 63 04 342D
//! ```
//!
//! Record order matters and tags may repeat, so a payload decodes into a
//! `Vec<TlvRecord>`, never a map.
//!
//! # Overview
//!
//! - [`Tag`] - a validated 2-digit tag
//! - [`TlvRecord`] - a tag plus a value of at most 99 characters
//! - [`TlvReader`] / [`TlvWriter`] - cursor-based decoding and encoding
//! - [`parse`] / [`serialize`] - whole-payload conversions
//!
//! # Example
//!
//! ```
//! use qris_tlv::{parse, serialize, Tag};
//!
//! let records = parse("00020153033605802ID").unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].tag(), Tag::from_static("53"));
//! assert_eq!(records[1].value(), "360");
//! assert_eq!(serialize(&records), "00020153033605802ID");
//! ```

mod codec;
mod error;
mod reader;
mod record;
mod tag;
mod writer;

pub use codec::{find, parse, position, serialize};
pub use error::TlvError;
pub use reader::TlvReader;
pub use record::{TlvRecord, MAX_VALUE_LEN};
pub use tag::Tag;
pub use writer::TlvWriter;
