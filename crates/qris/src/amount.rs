//! Transaction amount in its wire form.

use std::fmt;

use crate::QrisError;

/// A positive transaction amount, held as the decimal text that goes into
/// tag `54`.
///
/// Fractions are rounded to two digits, then trailing zeros (and a bare
/// trailing `.`) are dropped: `100000.0` becomes `"100000"` and `1000.50`
/// becomes `"1000.5"`. No currency symbol, no separators.
///
/// Rounding looks at the exact binary value of the `f64`. A value sitting
/// exactly halfway between two cents goes up (`1.125` is `"1.13"`), while
/// `1.005`, stored just below the half, goes down to `"1"`.
///
/// ```
/// use qris::Amount;
///
/// assert_eq!(Amount::new(100000.0).unwrap().as_str(), "100000");
/// assert_eq!(Amount::new(1000.50).unwrap().as_str(), "1000.5");
/// assert!(Amount::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: f64) -> Result<Self, QrisError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(QrisError::InvalidAmount(describe(value)));
        }
        let text = trim_fraction(&to_cents(value));
        if text == "0" {
            return Err(QrisError::InvalidAmount(format!(
                "{} rounds to zero",
                describe(value)
            )));
        }
        Ok(Self(text))
    }

    /// Whole Rupiah, the common case.
    pub fn from_rupiah(value: u64) -> Result<Self, QrisError> {
        if value == 0 {
            return Err(QrisError::InvalidAmount("0".into()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = QrisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for Amount {
    type Error = QrisError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_rupiah(value)
    }
}

/// Renders a positive finite `value` with two fraction digits, ties up.
///
/// The float is `m * 2^e`. With `e >= 0` it is an integer. Otherwise the
/// cents are `100m / 2^k` with `k = -e`, and the remainder decides the
/// rounding. `100m < 2^60`, so for `k > 60` the value is below half a cent.
fn to_cents(value: f64) -> String {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if exp >= 0 {
        return format!("{value:.0}");
    }
    let k = exp.unsigned_abs();
    if k > 60 {
        return "0".to_string();
    }
    let scaled = u128::from(mantissa) * 100;
    let mut cents = scaled >> k;
    let rem = scaled & ((1u128 << k) - 1);
    if rem >= 1u128 << (k - 1) {
        cents += 1;
    }
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Short rendering for error messages; tiny and huge values use exponent form.
fn describe(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !value.is_finite() || (1e-4..1e16).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{value:e}")
    }
}

fn trim_fraction(fixed: &str) -> String {
    match fixed.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{int}.{frac}")
            }
        }
        None => fixed.to_string(),
    }
}
