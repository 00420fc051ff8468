use clap::Parser;
use univ3_position::{DEFAULT_FETCH_RETRIES, DEFAULT_SUBGRAPH_URL};
use univ3_position_core::{ReservePricePolicy, DEFAULT_PRICE_DECIMALS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(help = "The Uniswap v3 position NFT token id to report on.")]
    pub token_id: String,

    #[arg(
        short = 'e',
        long,
        default_value_t = DEFAULT_SUBGRAPH_URL.to_string(),
        help = "The Uniswap v3 subgraph GraphQL endpoint.\n"
    )]
    pub endpoint: String,

    #[arg(
        short = 'r',
        long,
        default_value_t = DEFAULT_FETCH_RETRIES,
        help = "Number of times a failed subgraph request is retried.\n"
    )]
    pub retries: u32,

    #[arg(
        short = 'c',
        long,
        help = "Clamp the current price into the position range when computing reserves.\n"
    )]
    pub clamp_reserves: bool,

    #[arg(
        short = 'd',
        long,
        default_value_t = DEFAULT_PRICE_DECIMALS,
        value_parser = clap::value_parser!(u32).range(0..=18),
        help = "Number of decimal places reported prices are rounded to.\n"
    )]
    pub price_decimals: u32,

    #[arg(
        short = 'j',
        long,
        help = "Print the report as a JSON object of symbol qualified keys.\n"
    )]
    pub json: bool,
}

impl Args {
    pub fn reserve_price_policy(&self) -> ReservePricePolicy {
        if self.clamp_reserves {
            ReservePricePolicy::Clamped
        } else {
            ReservePricePolicy::Unclamped
        }
    }
}
