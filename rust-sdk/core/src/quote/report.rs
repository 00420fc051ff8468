use crate::math::check_tick_range;
use crate::{
    collect_fees_quote, position_status, real_reserves_quote, round_price,
    sqrt_price_x96_to_price, tick_index_to_price,
    ActivePositionReport, CoreError, PositionReport, PositionSnapshot, PositionStatus, PriceRange,
    ReportConfig,
};

/// Calculate the decimal adjusted prices at the position bounds and the pool tick
///
/// # Paramters
/// - `snapshot`: The position snapshot
/// - `price_decimals`: The number of decimal places the prices are rounded to
///
/// # Returns
/// - `PriceRange`: The rounded prices of token 0 in token 1
/// - `Err(INVALID_TICK_RANGE)` if the lower tick is not below the upper tick
pub fn price_range_quote(
    snapshot: &PositionSnapshot,
    price_decimals: u32,
) -> Result<PriceRange, CoreError> {
    check_tick_range(snapshot.tick_range())?;
    let decimals_diff = snapshot.decimals_diff();
    let price = |tick_index| -> Result<f64, CoreError> {
        Ok(round_price(
            tick_index_to_price(tick_index, decimals_diff)?,
            price_decimals,
        ))
    };

    Ok(PriceRange {
        price_tick_lower: price(snapshot.tick_lower.tick_index)?,
        price_tick_upper: price(snapshot.tick_upper.tick_index)?,
        price_tick_current: price(snapshot.pool.tick_current_index)?,
        price_pool: snapshot
            .pool
            .sqrt_price_x96
            .map(|sqrt_price_x96| {
                round_price(
                    sqrt_price_x96_to_price(sqrt_price_x96, decimals_diff),
                    price_decimals,
                )
            }),
    })
}

/// Build the full report for a position
///
/// Prices are always reported. Deposits, real reserves and uncollected fees are only
/// computed for positions that are in range. Exited and out of range positions get
/// the price range alone.
///
/// # Paramters
/// - `snapshot`: The position snapshot
/// - `config`: Rounding and reserve settings
///
/// # Returns
/// - `PositionReport`: The assembled report, or the first error hit while computing it
pub fn position_report(
    snapshot: &PositionSnapshot,
    config: &ReportConfig,
) -> Result<PositionReport, CoreError> {
    let prices = price_range_quote(snapshot, config.price_decimals)?;

    let status = position_status(
        snapshot.pool.tick_current_index,
        snapshot.tick_lower.tick_index,
        snapshot.tick_upper.tick_index,
        snapshot.position.liquidity,
    );

    let active = match status {
        PositionStatus::InRange => {
            let reserves = real_reserves_quote(snapshot, config.reserve_price_policy)?;
            let fees = collect_fees_quote(
                &snapshot.pool,
                &snapshot.position,
                &snapshot.tick_lower,
                &snapshot.tick_upper,
                &snapshot.token_0,
                &snapshot.token_1,
            );
            Some(ActivePositionReport {
                deposit_0: snapshot.position.deposited_token_0,
                deposit_1: snapshot.position.deposited_token_1,
                real_reserve_0: reserves.reserve_0,
                real_reserve_1: reserves.reserve_1,
                uncollected_fees_0: fees.fee_owed_0.fee_owed_decimal,
                uncollected_fees_1: fees.fee_owed_1.fee_owed_decimal,
            })
        }
        PositionStatus::Exited | PositionStatus::BelowRange | PositionStatus::AboveRange => None,
    };

    Ok(PositionReport {
        symbol_0: snapshot.token_0.symbol.clone(),
        symbol_1: snapshot.token_1.symbol.clone(),
        status,
        prices,
        active,
    })
}
