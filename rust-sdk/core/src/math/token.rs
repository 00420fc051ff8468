use libm::pow;

use crate::{CoreError, RealReservesQuote, ReservePricePolicy, DIVISION_BY_ZERO};

/// Calculate the real token reserves held by a position
/// IMPORTANT: floating point operations can reduce the precision of the result.
///
/// ```text
/// reserve_0 = L * (sqrt_upper - sqrt_current) / (sqrt_upper * sqrt_current) / 10^decimals_0
/// reserve_1 = L * (sqrt_current - sqrt_lower) / 10^decimals_1
/// ```
///
/// # Parameters
/// - `liquidity`: The liquidity of the position
/// - `sqrt_price_lower`: The sqrt price at the lower tick
/// - `sqrt_price_current`: The sqrt price at the current tick
/// - `sqrt_price_upper`: The sqrt price at the upper tick
/// - `decimals_0`: The decimals of token 0
/// - `decimals_1`: The decimals of token 1
/// - `policy`: Whether the current sqrt price is clamped into the position range first
///
/// # Returns
/// - `RealReservesQuote`: The reserves of token 0 and token 1 in whole tokens
/// - `Err(DIVISION_BY_ZERO)` if any sqrt price is zero
pub fn real_reserves(
    liquidity: u128,
    sqrt_price_lower: f64,
    sqrt_price_current: f64,
    sqrt_price_upper: f64,
    decimals_0: u8,
    decimals_1: u8,
    policy: ReservePricePolicy,
) -> Result<RealReservesQuote, CoreError> {
    if sqrt_price_lower == 0.0 || sqrt_price_current == 0.0 || sqrt_price_upper == 0.0 {
        return Err(DIVISION_BY_ZERO);
    }

    let sqrt_price_current = match policy {
        ReservePricePolicy::Unclamped => sqrt_price_current,
        ReservePricePolicy::Clamped => sqrt_price_current
            .max(sqrt_price_lower)
            .min(sqrt_price_upper),
    };

    let liquidity = liquidity as f64;
    let reserve_0 = liquidity * (sqrt_price_upper - sqrt_price_current)
        / (sqrt_price_upper * sqrt_price_current)
        / pow(10f64, decimals_0 as f64);
    let reserve_1 =
        liquidity * (sqrt_price_current - sqrt_price_lower) / pow(10f64, decimals_1 as f64);

    Ok(RealReservesQuote {
        reserve_0,
        reserve_1,
    })
}
