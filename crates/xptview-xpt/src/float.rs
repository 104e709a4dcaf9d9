//! IBM System/370 floating-point decoding.
//!
//! XPT numerics use the IBM mainframe long floating-point layout: 1 sign
//! bit, a 7-bit base-16 exponent biased by 64, and a 56-bit fraction, stored
//! big-endian. SAS missing values reuse the same 8 bytes with a tag byte in
//! the first position and a zero fraction; that pattern must be recognized
//! before magnitude decoding, since it also parses as a valid float.

use crate::types::MissingValue;

/// Convert 8 bytes of IBM long floating point to a native f64.
///
/// The all-zero pattern is 0.0, never missing. Any other pattern decodes to
/// its computed magnitude; IBM's range fits inside IEEE binary64, so the
/// result is always finite.
///
/// The fraction is converted to f64 in one step and then scaled by an exact
/// power of two, so no error beyond native binary64 rounding is introduced.
#[must_use]
pub fn ibm_to_ieee(bytes: [u8; 8]) -> f64 {
    let sign = bytes[0] & 0x80 != 0;
    let exponent = i32::from(bytes[0] & 0x7F) - 64;

    let mut fraction: u64 = 0;
    for &byte in &bytes[1..] {
        fraction = (fraction << 8) | u64::from(byte);
    }

    if fraction == 0 {
        return 0.0;
    }

    // magnitude = fraction * 16^exponent / 2^56
    let magnitude = fraction as f64 * 2f64.powi(4 * exponent - 56);
    if sign { -magnitude } else { magnitude }
}

/// Recognize a SAS missing-value pattern in a numeric field.
///
/// A field is missing when its first byte is a missing tag (`.`, `_`, or
/// `A`-`Z`) and every remaining byte is zero. Works on short numerics too:
/// the check runs on the raw field bytes before zero-extension.
#[must_use]
pub fn is_missing(bytes: &[u8]) -> Option<MissingValue> {
    let (first, rest) = bytes.split_first()?;
    if rest.iter().any(|&b| b != 0) {
        return None;
    }
    MissingValue::from_tag_byte(*first)
}
