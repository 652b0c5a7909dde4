//! Liquid staking carry-trade yield estimator
//!
//! Fetches a derivative token's pool spot price, its staking redemption rate
//! and lending-market rates, then estimates the annualized net return of a
//! delta-neutral position that captures the redemption premium while
//! borrowing against the derivative.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod carry;
pub mod validation;
pub mod utils;

// Re-export commonly used items
pub use carry::{compute_yield, compute_yield_report, QuoteSource, SupplyRateSource};
pub use config::{Config, QuoteEndpoints};
pub use errors::{CarryError, CarryResult};
pub use network::QuoteFetcher;
pub use types::*;
