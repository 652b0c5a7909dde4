//! Quote and yield report types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The external service a quote was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteProvider {
    SpotPrice,
    Redemption,
    Lending,
}

impl fmt::Display for QuoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteProvider::SpotPrice => "spot price pool",
            QuoteProvider::Redemption => "staking redemption",
            QuoteProvider::Lending => "lending market",
        };
        f.write_str(name)
    }
}

/// The three independent quotes fetched together at the start of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimaryQuotes {
    /// Derivative token price in base token units, from a liquidity pool.
    pub spot_price: f64,
    /// Base tokens received per derivative token at redemption.
    pub redemption_rate: f64,
    /// Annualized rate charged to borrow the base token.
    pub borrow_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YieldReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub collateral_ratio: f64,
    pub days_to_redeem: f64,
    pub quotes: PrimaryQuotes,
    pub supply_rate: f64,
    pub arb_ratio: f64,
    pub annualized_arb_pct: f64,
    pub net_borrow_rate: f64,
    pub net_delta_neutral_yield: f64,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_display_names() {
        assert_eq!(QuoteProvider::SpotPrice.to_string(), "spot price pool");
        assert_eq!(QuoteProvider::Redemption.to_string(), "staking redemption");
        assert_eq!(QuoteProvider::Lending.to_string(), "lending market");
    }

    #[test]
    fn provider_serializes_snake_case() {
        let json = serde_json::to_string(&QuoteProvider::SpotPrice).unwrap();
        assert_eq!(json, "\"spot_price\"");
    }
}
