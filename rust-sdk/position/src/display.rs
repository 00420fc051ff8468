use univ3_position_core::{invert_price, PositionReport, PositionStatus};

pub const IN_RANGE_MESSAGE: &str = "The current tick is within the price range!";
pub const OUT_OF_RANGE_MESSAGE: &str = "The current tick is outside of the price range!";
pub const EXITED_MESSAGE: &str = "Liquidity provider has exited position!";

/// Render the human readable summary of a report.
///
/// Prices are shown inverted, as token 1 per token 0 bound, so the lower displayed
/// bound comes from the upper tick.
pub fn format_position_report(report: &PositionReport) -> String {
    let symbol_0 = &report.symbol_0;
    let symbol_1 = &report.symbol_1;
    let prices = &report.prices;

    let mut lines = vec![
        format!(
            "Price Range for {symbol_0}-{symbol_1} LP: {:.8} - {:.8} {symbol_0}/{symbol_1}",
            invert_price(prices.price_tick_upper),
            invert_price(prices.price_tick_lower),
        ),
        format!(
            "Current {symbol_0}/{symbol_1} Price: {:.8}",
            invert_price(prices.price_tick_current)
        ),
    ];

    if let Some(price_pool) = prices.price_pool {
        lines.push(format!(
            "Pool {symbol_0}/{symbol_1} Price (sqrtPrice): {:.8}",
            invert_price(price_pool)
        ));
    }

    match report.status {
        PositionStatus::InRange => {
            lines.push(IN_RANGE_MESSAGE.to_string());
            if let Some(active) = &report.active {
                lines.push(format!("Current {symbol_0} reserve: {:.8}", active.real_reserve_0));
                lines.push(format!("Current {symbol_1} reserve: {:.8}", active.real_reserve_1));
                lines.push(format!(
                    "Uncollected {symbol_0} fees: {:.8}",
                    active.uncollected_fees_0
                ));
                lines.push(format!(
                    "Uncollected {symbol_1} fees: {:.8}",
                    active.uncollected_fees_1
                ));
            }
        }
        PositionStatus::BelowRange | PositionStatus::AboveRange => {
            lines.push(OUT_OF_RANGE_MESSAGE.to_string())
        }
        PositionStatus::Exited => lines.push(EXITED_MESSAGE.to_string()),
    }

    lines.join("\n")
}
