//! Carry yield estimator - command line entry point
//!
//! Computes one delta-neutral carry estimate from live quotes and exits.

use anyhow::Result;
use stkd_carry_yield::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize logging
    let _logging_guard = utils::setup_logging(&config.log_dir)?;

    info!("🥩 stkd carry yield estimator v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Derivative: {}", config.endpoints.derivative_symbol);
    info!("   Borrow Asset: {}", config.endpoints.borrow_symbol);
    info!("   Supply Asset: {}", config.endpoints.supply_symbol);
    info!("   Collateral Ratio: {}x", config.collateral_ratio);
    info!("   Redemption Period: {} days", config.days_to_redeem);
    info!("   Request Timeout: {:?}", config.request_timeout);

    let fetcher = QuoteFetcher::new(&config)?;

    let report = compute_yield_report(&fetcher, config.collateral_ratio, config.days_to_redeem)
        .await
        .map_err(|e| {
            error!("❌ Yield computation failed: {}", e);
            e
        })?;

    utils::print_yield_report(&report);
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}
