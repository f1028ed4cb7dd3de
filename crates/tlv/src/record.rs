//! A single tag/value record.

use crate::{codec, Tag, TlvError};

/// Largest value length the 2-digit length field can express.
pub const MAX_VALUE_LEN: usize = 99;

/// One TLV record.
///
/// The value is kept as text; its length (in characters) is checked
/// against [`MAX_VALUE_LEN`] on construction, so every record can be
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TlvRecord {
    tag: Tag,
    value: String,
}

impl TlvRecord {
    pub fn new(tag: Tag, value: impl Into<String>) -> Result<Self, TlvError> {
        let value = value.into();
        let length = value.chars().count();
        if length > MAX_VALUE_LEN {
            return Err(TlvError::ValueTooLong { tag, length });
        }
        Ok(Self { tag, value })
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value length in characters, as written in the length field.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Characters this record occupies once serialized.
    pub fn encoded_len(&self) -> usize {
        4 + self.len()
    }

    /// Returns a copy of this record carrying `value` instead.
    pub fn with_value(&self, value: impl Into<String>) -> Result<Self, TlvError> {
        Self::new(self.tag, value)
    }

    /// Decodes the value as a nested record sequence.
    ///
    /// Template tags (merchant account information, additional data) wrap
    /// their own TLV list. Nothing is validated beyond TLV framing.
    pub fn children(&self) -> Result<Vec<TlvRecord>, TlvError> {
        codec::parse(&self.value)
    }
}
