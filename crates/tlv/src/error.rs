//! TLV codec error type.

use thiserror::Error;

use crate::Tag;

/// Error type for TLV decoding and record construction.
///
/// Offsets count characters from the start of the decoded string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
    #[error("invalid tag {tag:?} at offset {offset}")]
    InvalidTag { offset: usize, tag: String },
    #[error("invalid length field {length:?} at offset {offset}")]
    InvalidLength { offset: usize, length: String },
    #[error("value of tag {tag} is {length} characters, maximum is 99")]
    ValueTooLong { tag: Tag, length: usize },
}
