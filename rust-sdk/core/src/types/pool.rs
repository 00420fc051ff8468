use ethnum::U256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    pub tick_current_index: i32,
    /// Q64.96 sqrt price as reported by the pool. Informational only, reserve math
    /// derives its sqrt prices from ticks.
    pub sqrt_price_x96: Option<U256>,
    pub fee_growth_global_0: U256,
    pub fee_growth_global_1: U256,
}
