use crate::PositionStatus;

/// Calculate the status of a position
/// The status can be one of four values:
/// - Exited: The position holds no liquidity, regardless of the tick
/// - BelowRange: The current tick is at or below the lower tick
/// - AboveRange: The current tick is at or above the upper tick
/// - InRange: The position is in range and earning fees
///
/// # Parameters
/// - `tick_current_index` - A i32 integer representing the current tick of the pool
/// - `tick_lower_index` - A i32 integer representing the lower tick index of the position
/// - `tick_upper_index` - A i32 integer representing the upper tick index of the position
/// - `liquidity` - A u128 integer representing the liquidity of the position
///
/// # Returns
/// - A PositionStatus enum value indicating the status of the position
pub fn position_status(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    liquidity: u128,
) -> PositionStatus {
    if liquidity == 0 {
        PositionStatus::Exited
    } else if tick_current_index <= tick_lower_index {
        PositionStatus::BelowRange
    } else if tick_current_index >= tick_upper_index {
        PositionStatus::AboveRange
    } else {
        PositionStatus::InRange
    }
}

/// Check if a position is in range.
/// When a position is in range it is earning fees
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    liquidity: u128,
) -> bool {
    position_status(tick_current_index, tick_lower_index, tick_upper_index, liquidity)
        == PositionStatus::InRange
}
