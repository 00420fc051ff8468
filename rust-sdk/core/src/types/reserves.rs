#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the current sqrt price is treated when it sits outside the position range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ReservePricePolicy {
    /// Use the current sqrt price as is. Out of range positions can report a negative
    /// reserve on one side.
    #[default]
    Unclamped,
    /// Clamp the current sqrt price into `[sqrt_price_lower, sqrt_price_upper]`.
    Clamped,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RealReservesQuote {
    pub reserve_0: f64,
    pub reserve_1: f64,
}
