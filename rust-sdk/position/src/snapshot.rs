use std::borrow::Cow;

use ethnum::U256;
use serde::Deserialize;
use serde_json::{json, Value};
use univ3_position_core::{
    PoolFacade, PositionFacade, PositionSnapshot, TickFacade, TickRange, TokenFacade,
};

use crate::{PositionError, Result};

pub(crate) const POSITIONS_QUERY: &str = r#"query position($id: ID!) {
  positions(where: { id: $id }) {
    liquidity
    depositedToken0
    depositedToken1
    feeGrowthInside0LastX128
    feeGrowthInside1LastX128
    token0 {
      symbol
      decimals
    }
    token1 {
      symbol
      decimals
    }
    pool {
      feeGrowthGlobal0X128
      feeGrowthGlobal1X128
      tick
      sqrtPrice
    }
    tickLower {
      tickIdx
      feeGrowthOutside0X128
      feeGrowthOutside1X128
    }
    tickUpper {
      tickIdx
      feeGrowthOutside0X128
      feeGrowthOutside1X128
    }
  }
}"#;

/// The subgraph encodes BigInt and BigDecimal values as strings, but some gateways
/// hand back plain numbers for small values.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SubgraphScalar {
    Text(String),
    Number(serde_json::Number),
}

impl SubgraphScalar {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.trim()),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubgraphToken {
    symbol: Option<String>,
    decimals: Option<SubgraphScalar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubgraphPool {
    fee_growth_global_0_x128: Option<SubgraphScalar>,
    fee_growth_global_1_x128: Option<SubgraphScalar>,
    tick: Option<SubgraphScalar>,
    sqrt_price: Option<SubgraphScalar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubgraphTick {
    tick_idx: Option<SubgraphScalar>,
    fee_growth_outside_0_x128: Option<SubgraphScalar>,
    fee_growth_outside_1_x128: Option<SubgraphScalar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubgraphPosition {
    liquidity: Option<SubgraphScalar>,
    deposited_token_0: Option<SubgraphScalar>,
    deposited_token_1: Option<SubgraphScalar>,
    fee_growth_inside_0_last_x128: Option<SubgraphScalar>,
    fee_growth_inside_1_last_x128: Option<SubgraphScalar>,
    token_0: Option<SubgraphToken>,
    token_1: Option<SubgraphToken>,
    pool: Option<SubgraphPool>,
    tick_lower: Option<SubgraphTick>,
    tick_upper: Option<SubgraphTick>,
}

#[derive(Debug, Clone, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

fn malformed(field: &str, reason: impl std::fmt::Display) -> PositionError {
    PositionError::MalformedSnapshot(format!("{field}: {reason}"))
}

fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| malformed(field, "missing"))
}

fn parse_u256(value: &Option<SubgraphScalar>, field: &str) -> Result<U256> {
    let text = required(value, field)?.as_text();
    U256::from_str_radix(&text, 10).map_err(|e| malformed(field, format!("{text:?} ({e})")))
}

fn parse_u128(value: &Option<SubgraphScalar>, field: &str) -> Result<u128> {
    let text = required(value, field)?.as_text();
    text.parse::<u128>()
        .map_err(|e| malformed(field, format!("{text:?} ({e})")))
}

fn parse_i32(value: &Option<SubgraphScalar>, field: &str) -> Result<i32> {
    let text = required(value, field)?.as_text();
    text.parse::<i32>()
        .map_err(|e| malformed(field, format!("{text:?} ({e})")))
}

fn parse_u8(value: &Option<SubgraphScalar>, field: &str) -> Result<u8> {
    let text = required(value, field)?.as_text();
    text.parse::<u8>()
        .map_err(|e| malformed(field, format!("{text:?} ({e})")))
}

fn parse_f64(value: &Option<SubgraphScalar>, field: &str) -> Result<f64> {
    let text = required(value, field)?.as_text();
    let parsed = text
        .parse::<f64>()
        .map_err(|e| malformed(field, format!("{text:?} ({e})")))?;
    if !parsed.is_finite() {
        return Err(malformed(field, format!("{text:?} is not finite")));
    }
    Ok(parsed)
}

fn token_facade(token: &Option<SubgraphToken>, field: &str) -> Result<TokenFacade> {
    let token = required(token, field)?;
    let symbol = required(&token.symbol, &format!("{field}.symbol"))?;
    let decimals = parse_u8(&token.decimals, &format!("{field}.decimals"))?;
    Ok(TokenFacade::new(symbol.clone(), decimals))
}

fn tick_facade(tick: &Option<SubgraphTick>, field: &str) -> Result<TickFacade> {
    let tick = required(tick, field)?;
    Ok(TickFacade {
        tick_index: parse_i32(&tick.tick_idx, &format!("{field}.tickIdx"))?,
        fee_growth_outside_0: parse_u256(
            &tick.fee_growth_outside_0_x128,
            &format!("{field}.feeGrowthOutside0X128"),
        )?,
        fee_growth_outside_1: parse_u256(
            &tick.fee_growth_outside_1_x128,
            &format!("{field}.feeGrowthOutside1X128"),
        )?,
    })
}

fn pool_facade(pool: &Option<SubgraphPool>) -> Result<PoolFacade> {
    let pool = required(pool, "pool")?;
    let sqrt_price_x96 = match &pool.sqrt_price {
        Some(_) => Some(parse_u256(&pool.sqrt_price, "pool.sqrtPrice")?),
        None => None,
    };
    Ok(PoolFacade {
        tick_current_index: parse_i32(&pool.tick, "pool.tick")?,
        sqrt_price_x96,
        fee_growth_global_0: parse_u256(
            &pool.fee_growth_global_0_x128,
            "pool.feeGrowthGlobal0X128",
        )?,
        fee_growth_global_1: parse_u256(
            &pool.fee_growth_global_1_x128,
            "pool.feeGrowthGlobal1X128",
        )?,
    })
}

fn position_snapshot(raw: &SubgraphPosition) -> Result<PositionSnapshot> {
    let snapshot = PositionSnapshot {
        token_0: token_facade(&raw.token_0, "token0")?,
        token_1: token_facade(&raw.token_1, "token1")?,
        pool: pool_facade(&raw.pool)?,
        tick_lower: tick_facade(&raw.tick_lower, "tickLower")?,
        tick_upper: tick_facade(&raw.tick_upper, "tickUpper")?,
        position: PositionFacade {
            liquidity: parse_u128(&raw.liquidity, "liquidity")?,
            deposited_token_0: parse_f64(&raw.deposited_token_0, "depositedToken0")?,
            deposited_token_1: parse_f64(&raw.deposited_token_1, "depositedToken1")?,
            fee_growth_inside_0_last: parse_u256(
                &raw.fee_growth_inside_0_last_x128,
                "feeGrowthInside0LastX128",
            )?,
            fee_growth_inside_1_last: parse_u256(
                &raw.fee_growth_inside_1_last_x128,
                "feeGrowthInside1LastX128",
            )?,
        },
    };

    let TickRange {
        tick_lower_index,
        tick_upper_index,
    } = snapshot.tick_range();
    if tick_lower_index >= tick_upper_index {
        return Err(malformed(
            "tickLower",
            format!("{tick_lower_index} is not below tickUpper {tick_upper_index}"),
        ));
    }

    Ok(snapshot)
}

/// Check that a token id is the decimal NFT id the subgraph keys positions by.
///
/// # Returns
/// - `&str`: The trimmed token id
pub fn validate_token_id(token_id: &str) -> Result<&str> {
    let token_id = token_id.trim();
    if token_id.is_empty() || !token_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PositionError::InvalidTokenId(token_id.to_string()));
    }
    Ok(token_id)
}

/// Build the GraphQL request body for a single position. The token id is passed as a
/// variable, never spliced into the query text.
pub fn positions_query_body(token_id: &str) -> Result<Value> {
    let token_id = validate_token_id(token_id)?;
    Ok(json!({
        "query": POSITIONS_QUERY,
        "variables": { "id": token_id },
    }))
}

/// Validate a subgraph response body into a typed [`PositionSnapshot`].
///
/// # Errors
/// - `DataFetch` if the response carries GraphQL errors or no data
/// - `NotFound` if no position matches `token_id`
/// - `MalformedSnapshot` if any field is missing or cannot be parsed, or the ticks
///   are not ordered
pub fn parse_positions_response(token_id: &str, body: Value) -> Result<PositionSnapshot> {
    let response: GraphQlResponse = serde_json::from_value(body)?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(PositionError::DataFetch(messages.join("; ")));
    }

    let data = response
        .data
        .ok_or_else(|| PositionError::DataFetch("response has no data".to_string()))?;
    let positions = data
        .get("positions")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("positions", "missing or not a list"))?;
    let first = positions
        .first()
        .ok_or_else(|| PositionError::NotFound(token_id.to_string()))?;

    let raw: SubgraphPosition =
        serde_json::from_value(first.clone()).map_err(|e| malformed("position", e))?;
    position_snapshot(&raw)
}
