use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PositionStatus, ReservePricePolicy};

/// Number of decimal places reported prices are rounded to by default.
pub const DEFAULT_PRICE_DECIMALS: u32 = 8;

/// Explicit numeric settings for building a [`PositionReport`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReportConfig {
    pub price_decimals: u32,
    pub reserve_price_policy: ReservePricePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            price_decimals: DEFAULT_PRICE_DECIMALS,
            reserve_price_policy: ReservePricePolicy::default(),
        }
    }
}

/// Prices of token 0 in terms of token 1 at the position bounds and the pool tick.
///
/// `price_pool` is derived from the pool's Q64.96 sqrt price when the indexer reports
/// one. It sits within a tick of `price_tick_current` and is not part of the map.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PriceRange {
    pub price_tick_lower: f64,
    pub price_tick_upper: f64,
    pub price_tick_current: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub price_pool: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivePositionReport {
    pub deposit_0: f64,
    pub deposit_1: f64,
    pub real_reserve_0: f64,
    pub real_reserve_1: f64,
    pub uncollected_fees_0: f64,
    pub uncollected_fees_1: f64,
}

/// The assembled view of one position.
///
/// `active` is only populated for [`PositionStatus::InRange`] positions. Every other
/// status reports the price range alone, and `status` tells an exited position apart
/// from one that is merely out of range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PositionReport {
    pub symbol_0: String,
    pub symbol_1: String,
    pub status: PositionStatus,
    pub prices: PriceRange,
    pub active: Option<ActivePositionReport>,
}

impl PositionReport {
    pub fn pair_key(&self, field: &str) -> String {
        format!("{}/{}_{}", self.symbol_0, self.symbol_1, field)
    }

    pub fn token_0_key(&self, field: &str) -> String {
        format!("{}_{}", self.symbol_0, field)
    }

    pub fn token_1_key(&self, field: &str) -> String {
        format!("{}_{}", self.symbol_1, field)
    }

    /// Flatten the report into symbol-qualified keys, e.g. `WETH/USDC_priceTickLower`
    /// or `USDC_uncollectedFees`.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::new();
        map.insert(self.pair_key("priceTickLower"), self.prices.price_tick_lower);
        map.insert(self.pair_key("priceTickUpper"), self.prices.price_tick_upper);
        map.insert(self.pair_key("priceTickCurrent"), self.prices.price_tick_current);

        if let Some(active) = &self.active {
            map.insert(self.token_0_key("deposit"), active.deposit_0);
            map.insert(self.token_1_key("deposit"), active.deposit_1);
            map.insert(self.token_0_key("realReserve"), active.real_reserve_0);
            map.insert(self.token_1_key("realReserve"), active.real_reserve_1);
            map.insert(self.token_0_key("uncollectedFees"), active.uncollected_fees_0);
            map.insert(self.token_1_key("uncollectedFees"), active.uncollected_fees_1);
        }

        map
    }

    pub fn is_exited(&self) -> bool {
        self.status == PositionStatus::Exited
    }
}
