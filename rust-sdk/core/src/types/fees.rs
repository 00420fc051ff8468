use ethnum::U256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct FeeGrowthInside {
    pub fee_growth_inside_0: U256,
    pub fee_growth_inside_1: U256,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TokenFeeQuote {
    /// `(fee_growth_inside - fee_growth_inside_last) * liquidity`, Q128.128, mod 2^256.
    pub fee_owed_x128: U256,
    /// Fee owed in token base units.
    pub fee_owed: U256,
    /// Fee owed in whole tokens.
    pub fee_owed_decimal: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CollectFeesQuote {
    pub fee_owed_0: TokenFeeQuote,
    pub fee_owed_1: TokenFeeQuote,
}
