//! Field validators for upstream response schemas

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Number;

/// Exclusive upper bound of `u64` as an `f64` (2^64)
const U64_LIMIT_F64: f64 = 18_446_744_073_709_551_616.0;

/// Deserialize a JSON number that is a non-negative integer
///
/// Integral floats such as `12.0` are accepted. Fractions, negatives,
/// strings and `null` are rejected.
///
/// # Errors
///
/// Returns a deserialization error for any other value
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked above the cast
pub fn non_negative_integer<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;

    if let Some(value) = number.as_u64() {
        return Ok(value);
    }

    match number.as_f64() {
        Some(value) if value >= 0.0 && value < U64_LIMIT_F64 && value.fract() == 0.0 => {
            Ok(value as u64)
        }
        _ => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {number}"
        ))),
    }
}
