use crate::{
    real_reserves, tick_index_to_sqrt_price, CoreError, PositionSnapshot, RealReservesQuote,
    ReservePricePolicy,
};

/// Calculate the real reserves of a position from its tick bounds and the pool tick
///
/// # Paramters
/// - `snapshot`: The position snapshot
/// - `policy`: How an out of range current price is treated
///
/// # Returns
/// - `RealReservesQuote`: The reserves of token 0 and token 1 in whole tokens
pub fn real_reserves_quote(
    snapshot: &PositionSnapshot,
    policy: ReservePricePolicy,
) -> Result<RealReservesQuote, CoreError> {
    let sqrt_price_lower = tick_index_to_sqrt_price(snapshot.tick_lower.tick_index)?;
    let sqrt_price_current = tick_index_to_sqrt_price(snapshot.pool.tick_current_index)?;
    let sqrt_price_upper = tick_index_to_sqrt_price(snapshot.tick_upper.tick_index)?;

    real_reserves(
        snapshot.position.liquidity,
        sqrt_price_lower,
        sqrt_price_current,
        sqrt_price_upper,
        snapshot.token_0.decimals,
        snapshot.token_1.decimals,
        policy,
    )
}
