use ethnum::U256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickRange {
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickFacade {
    pub tick_index: i32,
    pub fee_growth_outside_0: U256,
    pub fee_growth_outside_1: U256,
}
