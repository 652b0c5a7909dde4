//! Display and printing utilities

use tracing::{info, warn};
use crate::types::YieldReport;

pub fn print_yield_report(report: &YieldReport) {
    info!("\n📈 DELTA-NEUTRAL CARRY ESTIMATE #{}", report.id);
    info!("🕒 Computed at: {}", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
    info!("📋 Inputs:");
    info!("   Collateral Ratio: {:.2}x", report.collateral_ratio);
    info!("   Redemption Period: {} days", report.days_to_redeem);
    info!("💱 Quotes:");
    info!("   Spot Price:      {:.6}", report.quotes.spot_price);
    info!("   Redemption Rate: {:.6}", report.quotes.redemption_rate);
    info!("   Borrow Rate:     {:.2}%", report.quotes.borrow_rate * 100.0);
    info!("   Supply Rate:     {:.2}%", report.supply_rate * 100.0);
    info!("💰 Yield Analysis:");
    info!("   Arb Ratio:        {:.6}", report.arb_ratio);
    info!("   Annualized Arb:   {:.3}%", report.annualized_arb_pct);
    info!("   Net Borrow Rate:  {:.4}", report.net_borrow_rate);
    info!("   Net Delta-Neutral Yield: {:.3}", report.net_delta_neutral_yield);

    if report.warnings.is_empty() {
        info!("✅ All quote checks passed");
    } else {
        warn!("⚠️  Quote warnings:");
        for warning in &report.warnings {
            warn!("   {}", warning);
        }
    }
}
