#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenFacade {
    pub symbol: String,
    pub decimals: u8,
}

impl TokenFacade {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}
