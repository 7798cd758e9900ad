//! Monetary amount handling.
//!
//! Printify reports prices as JSON numbers. Amounts are kept as `f64` and
//! passed through without rounding, but a negative or non-finite amount is
//! rejected when decoding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional monetary amount, rejecting negative values.
///
/// Use together with `#[serde(default)]` so a missing field stays `None`.
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(amount) if !amount.is_finite() || amount < 0.0 => Err(D::Error::custom(format!(
            "monetary amount must be a non-negative number, got {amount}"
        ))),
        amount => Ok(amount),
    }
}
