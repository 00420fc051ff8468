use ethnum::U256;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PoolFacade, TickFacade, TickRange, TokenFacade};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PositionStatus {
    Exited,
    BelowRange,
    InRange,
    AboveRange,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PositionFacade {
    pub liquidity: u128,
    pub deposited_token_0: f64,
    pub deposited_token_1: f64,
    pub fee_growth_inside_0_last: U256,
    pub fee_growth_inside_1_last: U256,
}

/// Everything needed to price a single position, as read from an indexer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PositionSnapshot {
    pub token_0: TokenFacade,
    pub token_1: TokenFacade,
    pub pool: PoolFacade,
    pub tick_lower: TickFacade,
    pub tick_upper: TickFacade,
    pub position: PositionFacade,
}

impl PositionSnapshot {
    /// `decimals_0 - decimals_1`, the exponent applied to raw tick prices.
    pub fn decimals_diff(&self) -> i32 {
        self.token_0.decimals as i32 - self.token_1.decimals as i32
    }

    pub fn tick_range(&self) -> TickRange {
        TickRange {
            tick_lower_index: self.tick_lower.tick_index,
            tick_upper_index: self.tick_upper.tick_index,
        }
    }
}
