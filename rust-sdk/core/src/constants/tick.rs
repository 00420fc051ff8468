/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 887272;

/// The price ratio between two adjacent ticks, `price = TICK_BASE ^ tick`.
pub const TICK_BASE: f64 = 1.0001;
