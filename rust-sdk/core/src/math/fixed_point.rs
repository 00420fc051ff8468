use ethnum::U256;

use crate::{FEE_GROWTH_RESOLUTION_BITS, Q128_RESOLUTION};

/// Convert a U256 into the nearest f64.
/// IMPORTANT: values above 2^53 lose precision. Use the result for display or for
/// final float math only.
pub fn u256_to_f64(value: U256) -> f64 {
    let (hi, lo) = value.into_words();
    hi as f64 * Q128_RESOLUTION + lo as f64
}

/// Drop the fractional part of a Q128.128 value.
pub fn x128_to_integer(value: U256) -> U256 {
    value >> FEE_GROWTH_RESOLUTION_BITS
}

/// Descale a Q128.128 value into a float.
pub fn x128_to_f64(value: U256) -> f64 {
    u256_to_f64(value) / Q128_RESOLUTION
}
