use ethnum::U256;
use libm::pow;

use crate::{
    x128_to_f64, x128_to_integer, CollectFeesQuote, FeeGrowthInside, PoolFacade, PositionFacade,
    TickFacade, TokenFacade, TokenFeeQuote,
};

/// Calculate the fee growth per unit of liquidity inside a tick range
///
/// All arithmetic is modulo 2^256. The accumulators are free running counters, so a
/// "negative" difference wraps instead of failing.
///
/// # Paramters
/// - `pool`: The pool state, including the current tick
/// - `tick_lower`: The lower tick state
/// - `tick_upper`: The upper tick state
///
/// # Returns
/// - `FeeGrowthInside`: The Q128.128 fee growth inside the range for token 0 and token 1
pub fn fee_growth_inside(
    pool: &PoolFacade,
    tick_lower: &TickFacade,
    tick_upper: &TickFacade,
) -> FeeGrowthInside {
    let tick_current_index = pool.tick_current_index;

    let (fee_growth_below_0, fee_growth_below_1) = if tick_current_index >= tick_lower.tick_index {
        (tick_lower.fee_growth_outside_0, tick_lower.fee_growth_outside_1)
    } else {
        (
            pool.fee_growth_global_0
                .wrapping_sub(tick_lower.fee_growth_outside_0),
            pool.fee_growth_global_1
                .wrapping_sub(tick_lower.fee_growth_outside_1),
        )
    };

    let (fee_growth_above_0, fee_growth_above_1) = if tick_current_index < tick_upper.tick_index {
        (tick_upper.fee_growth_outside_0, tick_upper.fee_growth_outside_1)
    } else {
        (
            pool.fee_growth_global_0
                .wrapping_sub(tick_upper.fee_growth_outside_0),
            pool.fee_growth_global_1
                .wrapping_sub(tick_upper.fee_growth_outside_1),
        )
    };

    FeeGrowthInside {
        fee_growth_inside_0: pool
            .fee_growth_global_0
            .wrapping_sub(fee_growth_below_0)
            .wrapping_sub(fee_growth_above_0),
        fee_growth_inside_1: pool
            .fee_growth_global_1
            .wrapping_sub(fee_growth_below_1)
            .wrapping_sub(fee_growth_above_1),
    }
}

fn token_fee_quote(
    fee_growth_inside: U256,
    fee_growth_inside_last: U256,
    liquidity: u128,
    decimals: u8,
) -> TokenFeeQuote {
    let fee_owed_x128 = fee_growth_inside
        .wrapping_sub(fee_growth_inside_last)
        .wrapping_mul(liquidity.into());

    TokenFeeQuote {
        fee_owed_x128,
        fee_owed: x128_to_integer(fee_owed_x128),
        fee_owed_decimal: x128_to_f64(fee_owed_x128) / pow(10f64, decimals as f64),
    }
}

/// Calculate the fees a position has earned since its last collection
///
/// Every branch of the fee growth formula is supported, so this is meaningful for in
/// range and out of range positions alike.
///
/// # Paramters
/// - `pool`: The pool state
/// - `position`: The position state
/// - `tick_lower`: The lower tick state
/// - `tick_upper`: The upper tick state
/// - `token_0`: Token 0 of the pool, for decimals
/// - `token_1`: Token 1 of the pool, for decimals
///
/// # Returns
/// - `CollectFeesQuote`: The fees owed for token 0 and token 1
pub fn collect_fees_quote(
    pool: &PoolFacade,
    position: &PositionFacade,
    tick_lower: &TickFacade,
    tick_upper: &TickFacade,
    token_0: &TokenFacade,
    token_1: &TokenFacade,
) -> CollectFeesQuote {
    let inside = fee_growth_inside(pool, tick_lower, tick_upper);

    CollectFeesQuote {
        fee_owed_0: token_fee_quote(
            inside.fee_growth_inside_0,
            position.fee_growth_inside_0_last,
            position.liquidity,
            token_0.decimals,
        ),
        fee_owed_1: token_fee_quote(
            inside.fee_growth_inside_1,
            position.fee_growth_inside_1_last,
            position.liquidity,
            token_1.decimals,
        ),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Q128;

    fn x128(value: u128) -> U256 {
        Q128 * U256::from(value)
    }

    fn test_pool(tick_index: i32) -> PoolFacade {
        PoolFacade {
            tick_current_index: tick_index,
            fee_growth_global_0: x128(1000),
            fee_growth_global_1: x128(2000),
            ..PoolFacade::default()
        }
    }

    fn test_position(liquidity: u128) -> PositionFacade {
        PositionFacade {
            liquidity,
            ..PositionFacade::default()
        }
    }

    fn test_tick(tick_index: i32, outside_0: u128, outside_1: u128) -> TickFacade {
        TickFacade {
            tick_index,
            fee_growth_outside_0: x128(outside_0),
            fee_growth_outside_1: x128(outside_1),
        }
    }

    fn test_tokens() -> (TokenFacade, TokenFacade) {
        (TokenFacade::new("WETH", 18), TokenFacade::new("USDC", 6))
    }

    #[test]
    fn test_in_range_scenario() {
        let (token_0, token_1) = test_tokens();
        let pool = test_pool(0);
        let tick_lower = test_tick(-1000, 200, 300);
        let tick_upper = test_tick(1000, 100, 500);

        let inside = fee_growth_inside(&pool, &tick_lower, &tick_upper);
        assert_eq!(inside.fee_growth_inside_0, x128(700));
        assert_eq!(inside.fee_growth_inside_1, x128(1200));

        let result = collect_fees_quote(
            &pool,
            &test_position(5_000_000_000_000_000_000),
            &tick_lower,
            &tick_upper,
            &token_0,
            &token_1,
        );
        assert_eq!(
            result.fee_owed_0.fee_owed,
            U256::from(3_500_000_000_000_000_000_000u128)
        );
        assert_eq!(result.fee_owed_0.fee_owed_decimal, 3500.0);
        assert_eq!(
            result.fee_owed_1.fee_owed,
            U256::from(6_000_000_000_000_000_000_000u128)
        );
        assert_eq!(result.fee_owed_1.fee_owed_decimal, 6_000_000_000_000_000.0);
    }

    #[test]
    fn test_below_range() {
        let pool = test_pool(-2000);
        let inside = fee_growth_inside(
            &pool,
            &test_tick(-1000, 200, 300),
            &test_tick(1000, 100, 500),
        );
        // below = global - outside_lower, above = outside_upper
        assert_eq!(inside.fee_growth_inside_0, x128(100));
        assert_eq!(
            inside.fee_growth_inside_1,
            U256::ZERO.wrapping_sub(x128(200))
        );
    }

    #[test]
    fn test_above_range() {
        let pool = test_pool(2000);
        let inside = fee_growth_inside(
            &pool,
            &test_tick(-1000, 100, 300),
            &test_tick(1000, 300, 700),
        );
        // below = outside_lower, above = global - outside_upper
        assert_eq!(inside.fee_growth_inside_0, x128(200));
        assert_eq!(inside.fee_growth_inside_1, x128(400));
    }

    #[test]
    fn test_on_range_bounds() {
        let tick_lower = test_tick(-1000, 200, 300);
        let tick_upper = test_tick(1000, 100, 500);

        // the lower tick counts as inside
        let on_lower = fee_growth_inside(&test_pool(-1000), &tick_lower, &tick_upper);
        assert_eq!(on_lower.fee_growth_inside_0, x128(700));

        // the upper tick counts as above
        let on_upper = fee_growth_inside(&test_pool(1000), &tick_lower, &tick_upper);
        assert_eq!(
            on_upper.fee_growth_inside_0,
            x128(1000)
                .wrapping_sub(x128(200))
                .wrapping_sub(x128(900))
        );
    }

    #[test]
    fn test_wrapped_accumulator() {
        let (token_0, token_1) = test_tokens();
        let pool = PoolFacade {
            tick_current_index: 0,
            fee_growth_global_0: x128(10),
            fee_growth_global_1: x128(10),
            ..PoolFacade::default()
        };
        let position = PositionFacade {
            liquidity: 1_000_000,
            // recorded before the accumulator wrapped past 2^256
            fee_growth_inside_0_last: U256::ZERO.wrapping_sub(x128(10)),
            fee_growth_inside_1_last: x128(4),
            ..PositionFacade::default()
        };
        let result = collect_fees_quote(
            &pool,
            &position,
            &test_tick(-10, 0, 0),
            &test_tick(10, 0, 0),
            &token_0,
            &token_1,
        );
        assert_eq!(result.fee_owed_0.fee_owed_x128, x128(20_000_000));
        assert_eq!(result.fee_owed_0.fee_owed, U256::from(20_000_000u32));
        assert_eq!(result.fee_owed_1.fee_owed, U256::from(6_000_000u32));
        assert_eq!(result.fee_owed_1.fee_owed_decimal, 6.0);
    }

    #[test]
    fn test_zero_liquidity() {
        let (token_0, token_1) = test_tokens();
        let result = collect_fees_quote(
            &test_pool(0),
            &test_position(0),
            &test_tick(-1000, 200, 300),
            &test_tick(1000, 100, 500),
            &token_0,
            &token_1,
        );
        assert_eq!(result.fee_owed_0.fee_owed_x128, U256::ZERO);
        assert_eq!(result.fee_owed_1.fee_owed_decimal, 0.0);
    }

    proptest! {
        #[test]
        fn test_in_range_fees_are_non_negative(
            outside_lower in 0u64..1_000_000,
            outside_upper in 0u64..1_000_000,
            last in 0u64..1_000_000,
            extra in 0u64..1_000_000,
            liquidity in 1u64..u64::MAX,
        ) {
            let (token_0, token_1) = test_tokens();
            let inside_value =
                outside_lower as u128 + outside_upper as u128 + last as u128 + extra as u128;
            let pool = PoolFacade {
                tick_current_index: 0,
                fee_growth_global_0: x128(inside_value),
                fee_growth_global_1: x128(inside_value),
                ..PoolFacade::default()
            };
            let position = PositionFacade {
                liquidity: liquidity as u128,
                fee_growth_inside_0_last: x128(last as u128),
                fee_growth_inside_1_last: x128(last as u128),
                ..PositionFacade::default()
            };
            let result = collect_fees_quote(
                &pool,
                &position,
                &test_tick(-10, outside_lower as u128, outside_lower as u128),
                &test_tick(10, outside_upper as u128, outside_upper as u128),
                &token_0,
                &token_1,
            );
            prop_assert!(result.fee_owed_0.fee_owed_decimal >= 0.0);
            prop_assert!(result.fee_owed_1.fee_owed_decimal >= 0.0);
            prop_assert_eq!(
                result.fee_owed_0.fee_owed,
                U256::from(extra as u128) * U256::from(liquidity as u128)
            );
        }
    }
}
