//! # JSON Format
//!
//! Loading a [`MonsterCollection`] from JSON and rendering results as JSON.
//!
//! ## Input Checks
//!
//! - Size is checked against `MAX_COLLECTION_BYTES` before parsing
//! - The top-level value must be an object
//! - Nothing below the top level is validated; malformed records are the
//!   analytics layer's concern and degrade to NaN there

use crate::primitives::MAX_COLLECTION_BYTES;
use crate::{BestiaryError, MonsterCollection};
use serde::Serialize;
use serde_json::{Number, Value};

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse a collection from JSON text.
pub fn collection_from_str(text: &str) -> Result<MonsterCollection, BestiaryError> {
    collection_from_slice(text.as_bytes())
}

/// Parse a collection from JSON bytes.
pub fn collection_from_slice(bytes: &[u8]) -> Result<MonsterCollection, BestiaryError> {
    check_size(bytes.len() as u64)?;

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| BestiaryError::DeserializationError(e.to_string()))?;

    MonsterCollection::try_from(value)
}

/// Reject input larger than `MAX_COLLECTION_BYTES`.
pub fn check_size(size: u64) -> Result<(), BestiaryError> {
    let limit = MAX_COLLECTION_BYTES as u64;
    if size > limit {
        return Err(BestiaryError::InputTooLarge { size, limit });
    }
    Ok(())
}

/// Render a number as a JSON value.
///
/// Integral values become JSON integers so `20` reads back as `20`, not
/// `20.0`. Non-finite values become `null`.
#[must_use]
pub fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        if value >= 0.0 {
            return Value::from(value as u64);
        }
        return Value::from(value as i64);
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Render any output value as pretty-printed JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, BestiaryError> {
    serde_json::to_string_pretty(value).map_err(|e| BestiaryError::SerializationError(e.to_string()))
}
