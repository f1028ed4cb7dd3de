//! Character cursor over TLV text.

use crate::{Tag, TlvError, TlvRecord};

/// Reads TLV records from a string, tracking a cursor.
///
/// `x` is a byte index into the source (always on a character boundary);
/// `pos` counts the characters consumed so far and is what error offsets
/// report.
///
/// # Example
///
/// ```
/// use qris_tlv::TlvReader;
///
/// let mut reader = TlvReader::new("5303360");
/// let record = reader.record().unwrap();
/// assert_eq!(record.value(), "360");
/// assert!(reader.is_done());
/// ```
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    src: &'a str,
    x: usize,
    pos: usize,
}

impl<'a> TlvReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, x: 0, pos: 0 }
    }

    /// Characters consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of characters not yet read.
    pub fn size(&self) -> usize {
        self.src[self.x..].chars().count()
    }

    pub fn is_done(&self) -> bool {
        self.x >= self.src.len()
    }

    /// Returns the next `n` characters and advances past them.
    pub fn take(&mut self, n: usize) -> Result<&'a str, TlvError> {
        let rest = &self.src[self.x..];
        let end = match rest.char_indices().nth(n) {
            Some((i, _)) => i,
            None if rest.chars().count() == n => rest.len(),
            None => return Err(TlvError::UnexpectedEof { offset: self.pos }),
        };
        self.x += end;
        self.pos += n;
        Ok(&rest[..end])
    }

    /// Reads a 2-digit tag.
    pub fn tag(&mut self) -> Result<Tag, TlvError> {
        let offset = self.pos;
        let raw = self.take(2)?;
        Tag::new(raw).map_err(|_| TlvError::InvalidTag {
            offset,
            tag: raw.to_string(),
        })
    }

    /// Reads a 2-digit decimal length. Both characters must be ASCII digits.
    pub fn length(&mut self) -> Result<usize, TlvError> {
        let offset = self.pos;
        let raw = self.take(2)?;
        match raw.as_bytes() {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
                Ok(((a - b'0') * 10 + (b - b'0')) as usize)
            }
            _ => Err(TlvError::InvalidLength {
                offset,
                length: raw.to_string(),
            }),
        }
    }

    /// Reads one full record.
    pub fn record(&mut self) -> Result<TlvRecord, TlvError> {
        let tag = self.tag()?;
        let length = self.length()?;
        let value = self.take(length)?;
        TlvRecord::new(tag, value)
    }
}
