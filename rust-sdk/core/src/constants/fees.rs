use ethnum::U256;

/// Number of fractional bits of a Q128.128 fee growth value.
pub const FEE_GROWTH_RESOLUTION_BITS: u32 = 128;

/// 2^128 as a fixed-point one.
pub const Q128: U256 = U256::from_words(1, 0);

/// 2^128 as a float, used to descale Q128.128 values.
pub const Q128_RESOLUTION: f64 = 340282366920938463463374607431768211456.0;

/// 2^96 as a float, used to descale Q64.96 sqrt prices.
pub const Q96_RESOLUTION: f64 = 79228162514264337593543950336.0;
