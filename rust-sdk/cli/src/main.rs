mod cli;

use std::error::Error;

use clap::Parser;
use cli::Args;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use univ3_position::{
    format_position_report, query_position_report, set_fetch_retries, set_price_decimals,
    set_reserve_price_policy, set_subgraph_url,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_configuration(args: &Args) -> Result<(), Box<dyn Error>> {
    set_subgraph_url(args.endpoint.clone())?;
    set_fetch_retries(args.retries)?;
    set_price_decimals(args.price_decimals)?;
    set_reserve_price_policy(args.reserve_price_policy())?;
    Ok(())
}

async fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    apply_configuration(args)?;
    let report = query_position_report(&args.token_id).await?;
    tracing::debug!(token_id = %args.token_id, status = ?report.status, "report ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_map())?);
    } else {
        println!("{}", format_position_report(&report));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(err) = run(&args).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
