//! Amount injection properties over a real static QRIS payload.

use proptest::prelude::*;
use qris::{inject, inject_amount, tags, verify, Amount, Payload, QrisError, TlvError};
use qris_crc16::{crc16_ccitt_false, to_hex};

const STATIC_QRIS: &str = "00020101021126610014COM.GO-JEK.WWW01189360091432646524520210G2646524520303UMI\
51440014ID.CO.QRIS.WWW0215ID10243264534600303UMI5204599953033605802ID\
5912Digital Cell6009SUKOHARJO61055755262070703A016304342D";

const PREFIX: &str = "00020101021126610014COM.GO-JEK.WWW01189360091432646524520210G2646524520303UMI\
51440014ID.CO.QRIS.WWW0215ID10243264534600303UMI520459995303360";

const SUFFIX: &str = "5802ID5912Digital Cell6009SUKOHARJO61055755262070703A016304";

fn tags_of(payload: &str) -> Vec<String> {
    Payload::parse(payload)
        .unwrap()
        .records()
        .iter()
        .map(|r| r.tag().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Concrete vectors
// ---------------------------------------------------------------------------

#[test]
fn base_payload_checksum_is_valid() {
    assert_eq!(verify(STATIC_QRIS), Ok(0x342D));
}

#[test]
fn one_hundred_thousand() {
    let out = inject(STATIC_QRIS, 100000.0).unwrap();
    assert!(out.contains("5406100000"));
    assert_eq!(out, format!("{PREFIX}5406100000{SUFFIX}9824"));
    assert_eq!(verify(&out), Ok(0x9824));
}

#[test]
fn one_hundred_fifty_thousand() {
    let out = inject(STATIC_QRIS, 150000.0).unwrap();
    assert_eq!(out, format!("{PREFIX}5406150000{SUFFIX}0F5D"));
    assert_eq!(Payload::parse(&out).unwrap().amount(), Some("150000"));
}

#[test]
fn fractional_amount_keeps_cents() {
    let out = inject(STATIC_QRIS, 1000.50).unwrap();
    assert_eq!(out, format!("{PREFIX}54061000.5{SUFFIX}0DF3"));
}

#[test]
fn exact_half_cent_rounds_up() {
    let out = inject(STATIC_QRIS, 1.125).unwrap();
    assert_eq!(out, format!("{PREFIX}54041.13{SUFFIX}1C63"));
}

#[test]
fn rupiah_and_float_paths_agree() {
    let by_float = inject(STATIC_QRIS, 100000.0).unwrap();
    let by_int = inject_amount(STATIC_QRIS, &Amount::from_rupiah(100000).unwrap()).unwrap();
    assert_eq!(by_float, by_int);
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn amount_follows_currency() {
    let out = inject(STATIC_QRIS, 100000.0).unwrap();
    let tags = tags_of(&out);
    let currency = tags.iter().position(|t| t == "53").unwrap();
    assert_eq!(tags[currency + 1], "54");
    assert_eq!(tags.last().map(String::as_str), Some("63"));
    assert_eq!(tags.iter().filter(|t| *t == "63").count(), 1);
}

#[test]
fn reparse_is_mutated_sequence_plus_checksum() {
    let out = inject(STATIC_QRIS, 100000.0).unwrap();
    let expected = Payload::parse(STATIC_QRIS)
        .unwrap()
        .without_checksum()
        .with_amount(&Amount::from_rupiah(100000).unwrap())
        .unwrap();
    let mut records = Payload::parse(&out).unwrap().into_records();
    let checksum = records.pop().unwrap();
    assert_eq!(checksum.tag(), tags::CRC);
    assert_eq!(checksum.value(), "9824");
    assert_eq!(records, expected.into_records());
}

#[test]
fn existing_amount_is_replaced_in_place() {
    let first = inject(STATIC_QRIS, 100000.0).unwrap();
    let second = inject(&first, 150000.0).unwrap();
    assert_eq!(second, inject(STATIC_QRIS, 150000.0).unwrap());
    assert_eq!(tags_of(&first), tags_of(&second));
}

#[test]
fn missing_currency_appends_before_checksum() {
    let out = inject("0002015802ID6304FFFF", 5000.0).unwrap();
    assert_eq!(tags_of(&out), ["00", "58", "54", "63"]);
    assert!(verify(&out).is_ok());
}

#[test]
fn payload_without_checksum_gets_one() {
    let out = inject("00020101021153033605802ID", 5000.0).unwrap();
    assert!(out.starts_with("0002010102115303360540450005802ID6304"));
    assert!(verify(&out).is_ok());
}

#[test]
fn summary_serializes_to_json() {
    let out = inject(STATIC_QRIS, 100000.0).unwrap();
    let summary = Payload::parse(&out).unwrap().summary();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "merchant_name": "Digital Cell",
            "merchant_city": "SUKOHARJO",
            "country": "ID",
            "currency": "360",
            "amount": "100000",
            "checksum": "9824",
        })
    );
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn same_inputs_same_output() {
    assert_eq!(
        inject(STATIC_QRIS, 42000.0).unwrap(),
        inject(STATIC_QRIS, 42000.0).unwrap()
    );
}

#[test]
fn reinjecting_same_amount_is_a_fixed_point() {
    let once = inject(STATIC_QRIS, 42000.0).unwrap();
    assert_eq!(inject(&once, 42000.0).unwrap(), once);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_payload_is_malformed() {
    let err = inject("", 100000.0).unwrap_err();
    assert!(matches!(err, QrisError::MalformedPayload(_)));
    assert_eq!(
        err,
        QrisError::MalformedPayload(TlvError::UnexpectedEof { offset: 0 })
    );
    assert!(err.is_malformed());
}

#[test]
fn non_positive_amounts() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            inject(STATIC_QRIS, bad),
            Err(QrisError::InvalidAmount(_))
        ));
    }
}

#[test]
fn truncated_payload_is_malformed() {
    let err = inject(&STATIC_QRIS[..STATIC_QRIS.len() - 2], 1000.0).unwrap_err();
    assert!(matches!(
        err,
        QrisError::MalformedPayload(TlvError::UnexpectedEof { .. })
    ));
    assert!(err.is_malformed());
}

#[test]
fn garbage_length_is_malformed() {
    let err = inject("000201010211XX", 1000.0).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn oversized_amount_is_value_too_long() {
    assert!(matches!(
        inject(STATIC_QRIS, 1e120),
        Err(QrisError::ValueTooLong { tag, .. }) if tag == tags::AMOUNT
    ));
}

#[test]
fn tampered_output_fails_verification() {
    let out = inject(STATIC_QRIS, 100000.0).unwrap();
    let tampered = out.replace("5406100000", "5406900000");
    let body = &tampered[..tampered.len() - 4];
    assert_eq!(
        verify(&tampered),
        Err(QrisError::ChecksumMismatch {
            expected: to_hex(crc16_ccitt_false(body.as_bytes())),
            found: "9824".into(),
        })
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn output_always_verifies(rupiah in 1u64..10_000_000_000) {
        let out = inject(STATIC_QRIS, rupiah as f64).unwrap();
        prop_assert!(verify(&out).is_ok());
        let decoded = Payload::parse(&out).unwrap();
        let expected = rupiah.to_string();
        prop_assert_eq!(decoded.amount(), Some(expected.as_str()));
    }

    #[test]
    fn summary_reflects_injected_amount(cents in 1u64..100_000_000) {
        let amount = Amount::new(cents as f64 / 100.0).unwrap();
        let out = inject_amount(STATIC_QRIS, &amount).unwrap();
        let summary = Payload::parse(&out).unwrap().summary();
        prop_assert_eq!(summary.amount.as_deref(), Some(amount.as_str()));
        prop_assert_eq!(summary.merchant_name.as_deref(), Some("Digital Cell"));
    }
}
