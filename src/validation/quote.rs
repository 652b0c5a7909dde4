//! Quote plausibility warnings
//!
//! These never reject a quote. Hard failures belong to the calculator's
//! preconditions, anything merely unusual is reported alongside the result.

use tracing::warn;
use crate::types::PrimaryQuotes;

pub const TYPICAL_RATE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

pub fn validate_primary_quotes(quotes: &PrimaryQuotes) -> Vec<String> {
    let mut warnings = Vec::new();

    if quotes.spot_price > quotes.redemption_rate {
        warnings.push(format!(
            "Spot price {:.6} above redemption rate {:.6}: no redemption premium",
            quotes.spot_price, quotes.redemption_rate
        ));
    }

    if let Some(w) = check_rate("Borrow", quotes.borrow_rate) {
        warnings.push(w);
    }

    for w in &warnings {
        warn!("{}", w);
    }
    warnings
}

pub fn validate_supply_rate(supply_rate: f64) -> Option<String> {
    let warning = check_rate("Supply", supply_rate);
    if let Some(w) = &warning {
        warn!("{}", w);
    }
    warning
}

fn check_rate(label: &str, rate: f64) -> Option<String> {
    (!TYPICAL_RATE_RANGE.contains(&rate)).then(|| {
        format!("{} rate {:.4} outside typical 0-1 range", label, rate)
    })
}
