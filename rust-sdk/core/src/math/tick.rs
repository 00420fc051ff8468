use crate::{
    CoreError, TickRange, INVALID_TICK_INDEX, INVALID_TICK_RANGE, MAX_TICK_INDEX, MIN_TICK_INDEX,
};

/// Check if a tick is in-bounds.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick integer
///
/// # Returns
/// - A boolean value indicating if the tick is in-bounds
#[allow(clippy::manual_range_contains)]
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    tick_index <= MAX_TICK_INDEX && tick_index >= MIN_TICK_INDEX
}

/// Return an error if the tick is out of bounds.
///
/// # Returns
/// - `Ok(())` if the tick is in bounds
/// - `Err(INVALID_TICK_INDEX)` otherwise
#[inline]
pub(crate) fn check_tick_index_bounds(tick_index: i32) -> Result<(), CoreError> {
    if is_tick_index_in_bounds(tick_index) {
        Ok(())
    } else {
        Err(INVALID_TICK_INDEX)
    }
}

/// Check if a tick range is usable for a position: both ends in bounds and
/// strictly ordered.
pub fn is_tick_range_valid(tick_range: TickRange) -> bool {
    is_tick_index_in_bounds(tick_range.tick_lower_index)
        && is_tick_index_in_bounds(tick_range.tick_upper_index)
        && tick_range.tick_lower_index < tick_range.tick_upper_index
}

/// Return an error unless both ends of the range are in bounds and strictly ordered.
///
/// # Returns
/// - `Err(INVALID_TICK_INDEX)` if either end is out of bounds
/// - `Err(INVALID_TICK_RANGE)` if the lower tick is not below the upper tick
pub(crate) fn check_tick_range(tick_range: TickRange) -> Result<(), CoreError> {
    check_tick_index_bounds(tick_range.tick_lower_index)?;
    check_tick_index_bounds(tick_range.tick_upper_index)?;
    if is_tick_range_valid(tick_range) {
        Ok(())
    } else {
        Err(INVALID_TICK_RANGE)
    }
}
