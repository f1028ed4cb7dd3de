//! Injector error type.

use qris_tlv::{Tag, TlvError};
use thiserror::Error;

/// Error type for amount injection and checksum verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrisError {
    #[error("malformed payload: {0}")]
    MalformedPayload(TlvError),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("value of tag {tag} is {length} characters, maximum is 99")]
    ValueTooLong { tag: Tag, length: usize },
    #[error("payload does not end with a 4-character checksum field")]
    MissingChecksum,
    #[error("checksum mismatch: computed {expected}, payload carries {found}")]
    ChecksumMismatch { expected: String, found: String },
}

impl QrisError {
    /// True when the input payload could not be decoded into records.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }
}

impl From<TlvError> for QrisError {
    fn from(err: TlvError) -> Self {
        match err {
            TlvError::ValueTooLong { tag, length } => Self::ValueTooLong { tag, length },
            other => Self::MalformedPayload(other),
        }
    }
}
