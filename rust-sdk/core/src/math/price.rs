use ethnum::U256;
use libm::{exp, log, log1p, pow, round};

use super::{check_tick_index_bounds, u256_to_f64};
use crate::{CoreError, MAX_TICK_INDEX, MIN_TICK_INDEX, Q96_RESOLUTION, TICK_BASE};

/// `ln(1.0001)`, computed without the cancellation of `ln(x)` near one.
#[inline]
fn ln_tick_base() -> f64 {
    log1p(TICK_BASE - 1.0)
}

/// Convert a tick index into a price
/// IMPORTANT: floating point operations can reduce the precision of the result.
/// Make sure to do these operations last and not to use the result for further calculations.
///
/// The power is evaluated as `exp(tick_index * ln(1.0001))`, which stays within f64
/// range for every valid tick.
///
/// # Parameters
/// * `tick_index` - The tick index to convert
/// * `decimals_diff` - `decimals_0 - decimals_1` of the pool tokens
///
/// # Returns
/// * `Result<f64, CoreError>` - The decimal price of token 0 in token 1
pub fn tick_index_to_price(tick_index: i32, decimals_diff: i32) -> Result<f64, CoreError> {
    check_tick_index_bounds(tick_index)?;
    Ok(exp(tick_index as f64 * ln_tick_base()) * pow(10f64, decimals_diff as f64))
}

/// Derive the sqrt of the raw (not decimal adjusted) price at a tick.
///
/// # Parameters
/// * `tick_index` - The tick index to convert
///
/// # Returns
/// * `Result<f64, CoreError>` - `1.0001^(tick_index / 2)`
pub fn tick_index_to_sqrt_price(tick_index: i32) -> Result<f64, CoreError> {
    check_tick_index_bounds(tick_index)?;
    Ok(exp(tick_index as f64 * ln_tick_base() / 2.0))
}

/// Convert a price into the nearest tick index
/// IMPORTANT: floating point operations can reduce the precision of the result.
///
/// Non-positive prices map to the minimum tick, and results are clamped into the
/// valid tick range.
///
/// # Parameters
/// * `price` - The decimal price to convert
/// * `decimals_diff` - `decimals_0 - decimals_1` of the pool tokens
///
/// # Returns
/// * `i32` - The tick index
pub fn price_to_tick_index(price: f64, decimals_diff: i32) -> i32 {
    if price.is_nan() || price <= 0.0 {
        return MIN_TICK_INDEX;
    }
    let raw_price = price / pow(10f64, decimals_diff as f64);
    let tick_index = round(log(raw_price) / ln_tick_base());
    tick_index.clamp(MIN_TICK_INDEX as f64, MAX_TICK_INDEX as f64) as i32
}

/// Convert a Q64.96 sqrt price into a decimal price
/// IMPORTANT: floating point operations can reduce the precision of the result.
///
/// # Parameters
/// * `sqrt_price_x96` - The sqrt price, scaled by 2^96
/// * `decimals_diff` - `decimals_0 - decimals_1` of the pool tokens
///
/// # Returns
/// * `f64` - The decimal price
pub fn sqrt_price_x96_to_price(sqrt_price_x96: U256, decimals_diff: i32) -> f64 {
    let sqrt_price = u256_to_f64(sqrt_price_x96) / Q96_RESOLUTION;
    sqrt_price * sqrt_price * pow(10f64, decimals_diff as f64)
}

/// Round a price to a fixed number of decimal places for display
///
/// # Parameters
/// * `price` - The price to round
/// * `decimals` - The number of decimal places to keep
///
/// # Returns
/// * `f64` - The rounded price. Prices too large to scale are returned unchanged.
pub fn round_price(price: f64, decimals: u32) -> f64 {
    let factor = pow(10f64, decimals as f64);
    let scaled = price * factor;
    if !scaled.is_finite() {
        return price;
    }
    round(scaled) / factor
}

/// Invert a price, quoting token 1 in token 0
/// IMPORTANT: this is a display transformation. Do not feed the result back into
/// fee or reserve math.
///
/// # Parameters
/// * `price` - The price to invert
///
/// # Returns
/// * `f64` - The inverted price, or `0.0` for a zero price
pub fn invert_price(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        1.0 / price
    }
}
