//! An EMV-QR payload as an ordered record sequence.

use qris_crc16::{crc16_ccitt_false, to_hex, HEX_WIDTH};
use qris_tlv::{find, position, Tag, TlvError, TlvRecord, TlvWriter};
use serde::Serialize;
use tracing::trace;

use crate::{tags, Amount, QrisError};

/// A decoded payload.
///
/// Records keep their original order and duplicates. The builder-style
/// methods consume the payload and return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    records: Vec<TlvRecord>,
}

/// Where [`Payload::with_amount`] put the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountPlacement {
    Replaced,
    AfterCurrency,
    Appended,
}

/// Plain lookups of the top-level fields a caller usually displays.
///
/// Values are copied verbatim; none of them are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayloadSummary {
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<String>,
    pub checksum: Option<String>,
}

impl Payload {
    /// Decodes payload text.
    ///
    /// An input with no records is malformed: the first record is missing
    /// at offset 0.
    pub fn parse(s: &str) -> Result<Self, QrisError> {
        let records = qris_tlv::parse(s)?;
        if records.is_empty() {
            return Err(QrisError::MalformedPayload(TlvError::UnexpectedEof {
                offset: 0,
            }));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TlvRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TlvRecord> {
        self.records
    }

    pub fn get(&self, tag: Tag) -> Option<&str> {
        find(&self.records, tag).map(TlvRecord::value)
    }

    /// Current value of the amount field, if any.
    pub fn amount(&self) -> Option<&str> {
        self.get(tags::AMOUNT)
    }

    /// Drops every checksum record.
    pub fn without_checksum(self) -> Self {
        let records = self
            .records
            .into_iter()
            .filter(|r| r.tag() != tags::CRC)
            .collect();
        Self { records }
    }

    /// Sets the amount field.
    ///
    /// Checksum records are dropped first, since they are stale once the
    /// amount changes. An existing tag `54` then keeps its position and
    /// gets the new value. Otherwise the field goes right after the
    /// currency (tag `53`), or, without a currency, at the very end.
    pub fn with_amount(self, amount: &Amount) -> Result<Self, QrisError> {
        self.with_amount_placed(amount).map(|(payload, _)| payload)
    }

    pub(crate) fn with_amount_placed(
        self,
        amount: &Amount,
    ) -> Result<(Self, AmountPlacement), QrisError> {
        let field = TlvRecord::new(tags::AMOUNT, amount.as_str())?;
        let mut records = self.without_checksum().records;
        let placement = if let Some(i) = position(&records, tags::AMOUNT) {
            records[i] = field;
            AmountPlacement::Replaced
        } else if let Some(i) = position(&records, tags::CURRENCY) {
            records.insert(i + 1, field);
            AmountPlacement::AfterCurrency
        } else {
            records.push(field);
            AmountPlacement::Appended
        };
        trace!(?placement, amount = amount.as_str(), "amount field set");
        Ok((Self { records }, placement))
    }

    /// Serializes the records and appends a freshly computed checksum.
    ///
    /// Existing checksum records are skipped. The CRC covers every
    /// character up to and including the `6304` header.
    pub fn encode(&self) -> Result<String, QrisError> {
        let body: Vec<&TlvRecord> = self
            .records
            .iter()
            .filter(|r| r.tag() != tags::CRC)
            .collect();
        let capacity = body.iter().map(|r| r.encoded_len()).sum::<usize>() + 8;
        let mut writer = TlvWriter::with_capacity(capacity);
        for record in body {
            writer.record(record);
        }
        writer.header(tags::CRC, HEX_WIDTH)?;
        let crc = crc16_ccitt_false(writer.as_str().as_bytes());
        writer.raw(&to_hex(crc));
        Ok(writer.flush())
    }

    pub fn summary(&self) -> PayloadSummary {
        let get = |tag| self.get(tag).map(str::to_string);
        PayloadSummary {
            merchant_name: get(tags::MERCHANT_NAME),
            merchant_city: get(tags::MERCHANT_CITY),
            country: get(tags::COUNTRY),
            currency: get(tags::CURRENCY),
            amount: get(tags::AMOUNT),
            checksum: get(tags::CRC),
        }
    }
}
