//! Two-digit record tags.

use std::fmt;

use crate::TlvError;

/// A record tag: exactly two ASCII decimal digits, `"00"` through `"99"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u8);

const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

impl Tag {
    /// Parses a tag from its 2-character text form.
    pub fn new(s: &str) -> Result<Self, TlvError> {
        match s.as_bytes() {
            [a, b] if is_digit(*a) && is_digit(*b) => Ok(Self((a - b'0') * 10 + (b - b'0'))),
            _ => Err(TlvError::InvalidTag {
                offset: 0,
                tag: s.to_string(),
            }),
        }
    }

    /// Builds a tag from a literal, failing at compile time when used in a
    /// `const` with anything other than two digits.
    ///
    /// ```
    /// use qris_tlv::Tag;
    ///
    /// const AMOUNT: Tag = Tag::from_static("54");
    /// assert_eq!(AMOUNT.to_string(), "54");
    /// ```
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !is_digit(bytes[0]) || !is_digit(bytes[1]) {
            panic!("tag must be two ASCII digits");
        }
        Self((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
    }

    /// Builds a tag from its numeric value.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n < 100 {
            Some(Self(n))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::str::FromStr for Tag {
    type Err = TlvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        Tag::new(other).is_ok_and(|t| t == *self)
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        PartialEq::<str>::eq(self, *other)
    }
}
