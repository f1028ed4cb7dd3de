//! Accumulating TLV encoder.

use crate::record::MAX_VALUE_LEN;
use crate::{Tag, TlvError, TlvRecord};

/// Writes TLV records into a growing string.
///
/// # Example
///
/// ```
/// use qris_tlv::{Tag, TlvRecord, TlvWriter};
///
/// let mut writer = TlvWriter::new();
/// writer.record(&TlvRecord::new(Tag::from_static("58"), "ID").unwrap());
/// writer.header(Tag::from_static("63"), 4).unwrap();
/// assert_eq!(writer.flush(), "5802ID6304");
/// ```
#[derive(Debug, Default, Clone)]
pub struct TlvWriter {
    out: String,
}

impl TlvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Writes a tag and a zero-padded length, without any value.
    pub fn header(&mut self, tag: Tag, length: usize) -> Result<(), TlvError> {
        if length > MAX_VALUE_LEN {
            return Err(TlvError::ValueTooLong { tag, length });
        }
        self.push_header(tag, length);
        Ok(())
    }

    fn push_header(&mut self, tag: Tag, length: usize) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{tag}{length:02}");
    }

    /// Writes one complete record.
    pub fn record(&mut self, record: &TlvRecord) {
        self.push_header(record.tag(), record.len());
        self.out.push_str(record.value());
    }

    pub fn write_all(&mut self, records: &[TlvRecord]) {
        for record in records {
            self.record(record);
        }
    }

    /// Appends raw text, such as a checksum value following a header.
    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Takes the written text, leaving the writer empty.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    pub fn reset(&mut self) {
        self.out.clear();
    }
}
