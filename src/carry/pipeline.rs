//! One-shot yield computation over a quote source

use chrono::Utc;
use tracing::{debug, info};
use crate::{
    carry::{
        calc_annualized_arb, calc_arb, calc_net_borrow_rate, calc_net_delta_neutral, QuoteSource,
    },
    errors::{CarryError, CarryResult},
    types::YieldReport,
    validation::{validate_primary_quotes, validate_supply_rate},
};

/// Runs the full pipeline and returns only the net delta-neutral yield.
pub async fn compute_yield<S>(source: &S, collateral_ratio: f64, days_to_redeem: f64) -> CarryResult<f64>
where
    S: QuoteSource,
{
    compute_yield_report(source, collateral_ratio, days_to_redeem)
        .await
        .map(|report| report.net_delta_neutral_yield)
}

/// Fetches fresh quotes and derives every intermediate figure. Any failure
/// aborts the computation, nothing is substituted.
pub async fn compute_yield_report<S>(
    source: &S,
    collateral_ratio: f64,
    days_to_redeem: f64,
) -> CarryResult<YieldReport>
where
    S: QuoteSource,
{
    if !(collateral_ratio > 0.0 && collateral_ratio.is_finite()) {
        return Err(CarryError::InvalidCollateralRatio { ratio: collateral_ratio });
    }

    let quotes = source.primary_quotes().await?;
    let mut warnings = validate_primary_quotes(&quotes);

    let arb_ratio = calc_arb(quotes.redemption_rate, quotes.spot_price)?;
    let annualized_arb_pct = calc_annualized_arb(arb_ratio, days_to_redeem)?;
    debug!(arb_ratio, annualized_arb_pct, "Computed redemption arbitrage");

    let net_borrow = calc_net_borrow_rate(quotes.borrow_rate, collateral_ratio, source).await?;
    warnings.extend(validate_supply_rate(net_borrow.supply_rate));

    let net_delta_neutral_yield =
        calc_net_delta_neutral(annualized_arb_pct, collateral_ratio, net_borrow.rate);

    let report = YieldReport {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        collateral_ratio,
        days_to_redeem,
        quotes,
        supply_rate: net_borrow.supply_rate,
        arb_ratio,
        annualized_arb_pct,
        net_borrow_rate: net_borrow.rate,
        net_delta_neutral_yield,
        warnings,
    };

    info!(
        report_id = %report.id,
        net_yield = report.net_delta_neutral_yield,
        warnings = report.warnings.len(),
        "Computed delta-neutral carry estimate"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        carry::SupplyRateSource,
        types::{PrimaryQuotes, QuoteProvider},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubQuotes {
        quotes: PrimaryQuotes,
        supply_rate: f64,
        primary_calls: AtomicUsize,
        supply_calls: AtomicUsize,
    }

    impl StubQuotes {
        fn new(spot_price: f64, redemption_rate: f64, borrow_rate: f64, supply_rate: f64) -> Self {
            Self {
                quotes: PrimaryQuotes { spot_price, redemption_rate, borrow_rate },
                supply_rate,
                primary_calls: AtomicUsize::new(0),
                supply_calls: AtomicUsize::new(0),
            }
        }
    }

    impl SupplyRateSource for StubQuotes {
        async fn supply_rate(&self) -> CarryResult<f64> {
            self.supply_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.supply_rate)
        }
    }

    impl QuoteSource for StubQuotes {
        async fn primary_quotes(&self) -> CarryResult<PrimaryQuotes> {
            self.primary_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.quotes)
        }
    }

    struct MissingSpot;

    impl SupplyRateSource for MissingSpot {
        async fn supply_rate(&self) -> CarryResult<f64> {
            panic!("supply rate must not be read after a failed primary fetch");
        }
    }

    impl QuoteSource for MissingSpot {
        async fn primary_quotes(&self) -> CarryResult<PrimaryQuotes> {
            Err(CarryError::unavailable(QuoteProvider::SpotPrice, "no matching record"))
        }
    }

    #[tokio::test]
    async fn regression_fixture_reproduces_composed_value() {
        let source = StubQuotes::new(1.0, 1.02, 0.08, 0.02);

        let report = compute_yield_report(&source, 1.5, 30.0).await.unwrap();

        let annualized = (1.02_f64.powf(365.0 / 30.0) - 1.0) * 100.0;
        let net_borrow = 0.08 * 1.5 - 0.02;
        let expected = annualized * 1.5 - net_borrow;

        assert!((report.arb_ratio - 1.02).abs() < 1e-12);
        assert!((report.annualized_arb_pct - annualized).abs() < 1e-9);
        assert!((report.net_borrow_rate - net_borrow).abs() < 1e-9);
        assert!((report.net_delta_neutral_yield - expected).abs() < 1e-9);
        assert!((report.net_delta_neutral_yield - 40.76516942607356).abs() < 1e-9);
        assert_eq!(report.supply_rate, 0.02);
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn compute_yield_returns_net_figure() {
        let source = StubQuotes::new(1.0, 1.02, 0.08, 0.02);
        let net = compute_yield(&source, 1.5, 30.0).await.unwrap();
        assert!((net - 40.76516942607356).abs() < 1e-9);
    }

    #[tokio::test]
    async fn every_call_requeries_the_source() {
        let source = StubQuotes::new(1.0, 1.02, 0.08, 0.02);
        compute_yield(&source, 1.5, 30.0).await.unwrap();
        compute_yield(&source, 1.5, 30.0).await.unwrap();

        assert_eq!(source.primary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.supply_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalid_collateral_ratio_fails_before_fetching() {
        let source = StubQuotes::new(1.0, 1.02, 0.08, 0.02);
        for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = compute_yield(&source, ratio, 30.0).await.unwrap_err();
            assert!(matches!(err, CarryError::InvalidCollateralRatio { .. }));
        }
        assert_eq!(source.primary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_spot_price_aborts_with_invalid_arb() {
        let source = StubQuotes::new(0.0, 1.02, 0.08, 0.02);
        let err = compute_yield(&source, 1.5, 30.0).await.unwrap_err();

        assert!(matches!(err, CarryError::InvalidArbRatio { .. }));
        assert_eq!(source.supply_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn primary_failure_propagates_without_partial_result() {
        let err = compute_yield(&MissingSpot, 1.5, 30.0).await.unwrap_err();
        assert!(matches!(
            err,
            CarryError::QuoteUnavailable { provider: QuoteProvider::SpotPrice, .. }
        ));
    }

    #[tokio::test]
    async fn discount_and_odd_rates_surface_as_warnings() {
        let source = StubQuotes::new(1.05, 1.02, 1.4, -0.01);
        let report = compute_yield_report(&source, 1.0, 21.0).await.unwrap();

        assert!(report.annualized_arb_pct < 0.0);
        assert_eq!(report.warnings.len(), 3);
    }
}
