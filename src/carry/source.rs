//! Quote sources the calculator pulls from
//!
//! The calculator never talks to the network directly. `QuoteFetcher`
//! implements both traits for live use, tests substitute fixed values.

use std::future::Future;
use crate::{errors::CarryResult, types::PrimaryQuotes};

/// Supplies the funding-leg supply rate, read fresh on every call.
pub trait SupplyRateSource {
    fn supply_rate(&self) -> impl Future<Output = CarryResult<f64>> + Send;
}

/// Supplies spot price, redemption rate and borrow rate in one batch.
pub trait QuoteSource: SupplyRateSource {
    fn primary_quotes(&self) -> impl Future<Output = CarryResult<PrimaryQuotes>> + Send;
}
