//! Whole-payload decoding and encoding.

use crate::{Tag, TlvError, TlvReader, TlvRecord, TlvWriter};

/// Decodes a payload into its ordered record sequence.
///
/// Decoding is strict: a non-digit tag or length field, or a declared
/// length running past the end of the input, fails with the offset of the
/// offending field. The empty string decodes to no records.
pub fn parse(s: &str) -> Result<Vec<TlvRecord>, TlvError> {
    let mut reader = TlvReader::new(s);
    let mut records = Vec::new();
    while !reader.is_done() {
        records.push(reader.record()?);
    }
    Ok(records)
}

/// Encodes records back into payload text, in order.
pub fn serialize(records: &[TlvRecord]) -> String {
    let capacity = records.iter().map(TlvRecord::encoded_len).sum();
    let mut writer = TlvWriter::with_capacity(capacity);
    writer.write_all(records);
    writer.flush()
}

/// First record carrying `tag`.
pub fn find(records: &[TlvRecord], tag: Tag) -> Option<&TlvRecord> {
    records.iter().find(|r| r.tag() == tag)
}

/// Index of the first record carrying `tag`.
pub fn position(records: &[TlvRecord], tag: Tag) -> Option<usize> {
    records.iter().position(|r| r.tag() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero_records() {
        assert_eq!(parse(""), Ok(vec![]));
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn duplicate_tags_keep_order() {
        let records = parse("0102AA0102BB").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value(), "AA");
        assert_eq!(records[1].value(), "BB");
        assert_eq!(position(&records, Tag::from_static("01")), Some(0));
        assert_eq!(find(&records, Tag::from_static("01")).map(|r| r.value()), Some("AA"));
        assert_eq!(find(&records, Tag::from_static("02")), None);
    }
}
