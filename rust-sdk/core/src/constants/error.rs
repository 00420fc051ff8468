pub type CoreError = &'static str;

pub const INVALID_TICK_INDEX: CoreError = "Tick index is outside of the valid range";

pub const INVALID_TICK_RANGE: CoreError = "Lower tick index must be below the upper tick index";

pub const DIVISION_BY_ZERO: CoreError = "Division by zero in sqrt price terms";
