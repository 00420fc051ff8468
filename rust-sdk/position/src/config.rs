use std::{borrow::Cow, error::Error, sync::Mutex};

use univ3_position_core::{ReportConfig, ReservePricePolicy, DEFAULT_PRICE_DECIMALS};

use crate::{PositionError, Result};

/// The default endpoint of the Uniswap v3 subgraph.
pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v3";

/// The currently selected subgraph endpoint.
pub static SUBGRAPH_URL: Mutex<Cow<'static, str>> =
    Mutex::new(Cow::Borrowed(DEFAULT_SUBGRAPH_URL));

/// Sets the currently selected subgraph endpoint.
pub fn set_subgraph_url(url: impl Into<String>) -> std::result::Result<(), Box<dyn Error>> {
    let url = url.into();
    if url.trim().is_empty() {
        return Err("Subgraph url must not be empty".into());
    }
    *SUBGRAPH_URL.try_lock()? = Cow::Owned(url);
    Ok(())
}

/// The default number of times a failed subgraph request is retried.
pub const DEFAULT_FETCH_RETRIES: u32 = 3;

/// The currently selected number of fetch retries.
pub static FETCH_RETRIES: Mutex<u32> = Mutex::new(DEFAULT_FETCH_RETRIES);

/// Sets the currently selected number of fetch retries.
pub fn set_fetch_retries(retries: u32) -> std::result::Result<(), Box<dyn Error>> {
    *FETCH_RETRIES.try_lock()? = retries;
    Ok(())
}

/// The currently selected number of decimal places reported prices are rounded to.
pub static PRICE_DECIMALS: Mutex<u32> = Mutex::new(DEFAULT_PRICE_DECIMALS);

/// Sets the currently selected number of price decimals.
pub fn set_price_decimals(decimals: u32) -> std::result::Result<(), Box<dyn Error>> {
    *PRICE_DECIMALS.try_lock()? = decimals;
    Ok(())
}

/// The default treatment of the current price when computing reserves.
pub const DEFAULT_RESERVE_PRICE_POLICY: ReservePricePolicy = ReservePricePolicy::Unclamped;

/// The currently selected reserve price policy.
pub static RESERVE_PRICE_POLICY: Mutex<ReservePricePolicy> =
    Mutex::new(DEFAULT_RESERVE_PRICE_POLICY);

/// Sets the currently selected reserve price policy.
pub fn set_reserve_price_policy(
    policy: ReservePricePolicy,
) -> std::result::Result<(), Box<dyn Error>> {
    *RESERVE_PRICE_POLICY.try_lock()? = policy;
    Ok(())
}

/// Snapshot the currently selected numeric settings into a [`ReportConfig`].
pub fn report_config() -> Result<ReportConfig> {
    let price_decimals = *PRICE_DECIMALS
        .try_lock()
        .map_err(|e| PositionError::ConfigError(e.to_string()))?;
    let reserve_price_policy = *RESERVE_PRICE_POLICY
        .try_lock()
        .map_err(|e| PositionError::ConfigError(e.to_string()))?;
    Ok(ReportConfig {
        price_decimals,
        reserve_price_policy,
    })
}

/// Resets the configuration to its default values.
pub fn reset_configuration() -> std::result::Result<(), Box<dyn Error>> {
    *SUBGRAPH_URL.try_lock()? = Cow::Borrowed(DEFAULT_SUBGRAPH_URL);
    *FETCH_RETRIES.try_lock()? = DEFAULT_FETCH_RETRIES;
    *PRICE_DECIMALS.try_lock()? = DEFAULT_PRICE_DECIMALS;
    *RESERVE_PRICE_POLICY.try_lock()? = DEFAULT_RESERVE_PRICE_POLICY;
    Ok(())
}
