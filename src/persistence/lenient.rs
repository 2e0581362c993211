//=========================================================================
// Lenient Numbers
//=========================================================================
//
// Stored counters and coordinates may be any JSON number. They are rounded
// and saturated into `i32` while decoding so range correction can happen
// afterwards instead of the whole save being thrown away.
//
//=========================================================================

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// `deserialize_with` helper for `i32` save fields.
pub(crate) fn saturating_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    Ok(number_to_i32(&number))
}

/// Rounds to the nearest integer and saturates at the `i32` bounds.
pub(crate) fn number_to_i32(number: &Number) -> i32 {
    if let Some(n) = number.as_i64() {
        return saturate_i64(n);
    }
    if number.is_u64() {
        return i32::MAX;
    }
    // Float-to-int `as` saturates; NaN cannot appear in parsed JSON.
    number.as_f64().map_or(0, |n| n.round() as i32)
}

pub(crate) fn saturate_i64(n: i64) -> i32 {
    n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

//=========================================================================
// Unit Tests
//=========================================================================
