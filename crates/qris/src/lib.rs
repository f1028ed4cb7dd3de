//! Fixed-amount QRIS payloads from a static merchant QR.
//!
//! A static (open-amount) QRIS payload lets the payer type any amount. To
//! ask for a specific sum, the amount goes into tag `54` and the trailing
//! CRC (tag `63`) is recomputed so scanners still accept the code.
//!
//! # Overview
//!
//! - [`inject`] - the whole transformation, text in and text out
//! - [`Amount`] - validated amount in its wire form
//! - [`Payload`] - decoded record sequence with the individual steps
//! - [`verify`] - checksum check of a finished payload
//!
//! Everything here is pure: no I/O, no shared state. Rendering the result
//! as a QR image is left to the caller.
//!
//! # Example
//!
//! ```
//! use qris::{inject, Payload};
//!
//! let base = "00020101021126610014COM.GO-JEK.WWW01189360091432646524520210G2646524520303UMI\
//!             51440014ID.CO.QRIS.WWW0215ID10243264534600303UMI5204599953033605802ID\
//!             5912Digital Cell6009SUKOHARJO61055755262070703A016304342D";
//!
//! let out = inject(base, 150000.0).unwrap();
//! assert_eq!(Payload::parse(&out).unwrap().amount(), Some("150000"));
//! assert!(out.ends_with("63040F5D"));
//! ```

mod amount;
mod error;
mod inject;
mod payload;
pub mod tags;
mod verify;

pub use amount::Amount;
pub use error::QrisError;
pub use inject::{inject, inject_amount};
pub use payload::{AmountPlacement, Payload, PayloadSummary};
pub use verify::verify;

pub use qris_tlv::{Tag, TlvError, TlvRecord};
