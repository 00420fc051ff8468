use tracing::info;
use univ3_position_core::{position_report, PositionReport, PositionSnapshot, ReportConfig};

use crate::{report_config, PositionSnapshotFetcher, Result, SubgraphClient};

/// Compute the report for an already fetched snapshot.
pub fn compute_position_report(
    snapshot: &PositionSnapshot,
    config: &ReportConfig,
) -> Result<PositionReport> {
    let report = position_report(snapshot, config)?;
    info!(
        pair = %format!("{}/{}", report.symbol_0, report.symbol_1),
        status = ?report.status,
        "computed position report"
    );
    Ok(report)
}

/// Fetch a position through `fetcher` and compute its report.
///
/// A failed fetch aborts before any math runs.
pub async fn fetch_position_report<F>(
    fetcher: &F,
    token_id: &str,
    config: &ReportConfig,
) -> Result<PositionReport>
where
    F: PositionSnapshotFetcher + ?Sized,
{
    let snapshot = fetcher.fetch_position_snapshot(token_id).await?;
    compute_position_report(&snapshot, config)
}

/// Fetch and report a position using the currently selected configuration.
///
/// The subgraph endpoint, retry count, price decimals and reserve policy are read once
/// up front. Changing the configuration while the query runs has no effect on it.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> univ3_position::Result<()> {
/// let report = univ3_position::query_position_report("226230").await?;
/// println!("{:?}", report.to_map());
/// # Ok(())
/// # }
/// ```
pub async fn query_position_report(token_id: &str) -> Result<PositionReport> {
    let config = report_config()?;
    let client = SubgraphClient::from_config()?;
    fetch_position_report(&client, token_id, &config).await
}
