//! HTTP quote fetching from the spot, redemption and lending providers

use rust_decimal::prelude::*;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use crate::{
    carry::{QuoteSource, SupplyRateSource},
    config::{Config, QuoteEndpoints},
    errors::{CarryError, CarryResult},
    types::{
        LendingMarketRecord, PrimaryQuotes, QuoteProvider, RawRecord, RedemptionRecord,
        SpotPriceRecord,
    },
    utils::find_exactly_one,
};

/// Longest slice of an error response body carried into a `QuoteUnavailable` reason.
pub const MAX_ERROR_BODY_CHARS: usize = 256;

/// Reads live quotes. Holds no quote state, so every call hits the providers.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    endpoints: QuoteEndpoints,
}

impl QuoteFetcher {
    pub fn new(config: &Config) -> CarryResult<Self> {
        Self::with_endpoints(config.endpoints.clone(), config.request_timeout)
    }

    pub fn with_endpoints(endpoints: QuoteEndpoints, timeout: Duration) -> CarryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CarryError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &QuoteEndpoints {
        &self.endpoints
    }

    /// Spot price, redemption rate and borrow rate, requested concurrently.
    /// The first failure aborts the batch.
    pub async fn fetch_all_primary_quotes(&self) -> CarryResult<PrimaryQuotes> {
        let (spot_price, redemption_rate, borrow_rate) = tokio::try_join!(
            self.fetch_spot_price(),
            self.fetch_redemption_rate(),
            self.fetch_borrow_rate()
        )?;

        Ok(PrimaryQuotes {
            spot_price,
            redemption_rate,
            borrow_rate,
        })
    }

    pub async fn fetch_spot_price(&self) -> CarryResult<f64> {
        let provider = QuoteProvider::SpotPrice;
        let symbol = &self.endpoints.derivative_symbol;
        let record: SpotPriceRecord = self
            .fetch_matched(provider, &self.endpoints.spot_price_url, symbol)
            .await?;

        let price = parse_rate(provider, "price", &record.price)?;
        debug!(%provider, symbol = %symbol, price, "Fetched spot price");
        Ok(price)
    }

    pub async fn fetch_redemption_rate(&self) -> CarryResult<f64> {
        let provider = QuoteProvider::Redemption;
        let symbol = &self.endpoints.derivative_symbol;
        let record: RedemptionRecord = self
            .fetch_matched(provider, &self.endpoints.redemption_rate_url, symbol)
            .await?;

        let rate = parse_rate(provider, "rate", &record.rate)?;
        debug!(%provider, symbol = %symbol, rate, "Fetched redemption rate");
        Ok(rate)
    }

    pub async fn fetch_borrow_rate(&self) -> CarryResult<f64> {
        let provider = QuoteProvider::Lending;
        let symbol = &self.endpoints.borrow_symbol;
        let record: LendingMarketRecord = self
            .fetch_matched(provider, &self.endpoints.lending_rates_url, symbol)
            .await?;

        let rate = parse_rate(provider, "borrow_rate", &record.borrow_rate)?;
        debug!(%provider, symbol = %symbol, rate, "Fetched borrow rate");
        Ok(rate)
    }

    /// Same provider as the borrow rate, but always a separate request.
    pub async fn fetch_supply_rate(&self) -> CarryResult<f64> {
        let provider = QuoteProvider::Lending;
        let symbol = &self.endpoints.supply_symbol;
        let record: LendingMarketRecord = self
            .fetch_matched(provider, &self.endpoints.lending_rates_url, symbol)
            .await?;

        let rate = parse_rate(provider, "supply_rate", &record.supply_rate)?;
        debug!(%provider, symbol = %symbol, rate, "Fetched supply rate");
        Ok(rate)
    }

    /// Fetches the provider's records, picks the one for `symbol`, then decodes
    /// only that record strictly. Other assets' records are never decoded.
    async fn fetch_matched<T>(&self, provider: QuoteProvider, url: &str, symbol: &str) -> CarryResult<T>
    where
        T: DeserializeOwned,
    {
        let records = self.fetch_records(provider, url).await?;
        let record = find_record(provider, &records, symbol)?;

        record.decode().map_err(|e| {
            warn!(%provider, symbol, error = %e, "⚠️ Matched quote record did not match schema");
            CarryError::malformed(provider, format!("record for {}: {}", symbol, e))
        })
    }

    async fn fetch_records(&self, provider: QuoteProvider, url: &str) -> CarryResult<Vec<RawRecord>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(%provider, url, error = %e, "⚠️ Quote request failed");
            let reason = if e.is_timeout() { "request timed out" } else { "request failed" };
            CarryError::QuoteUnavailable {
                provider,
                reason: reason.to_string(),
                source: Some(e.into()),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%provider, url, %status, "⚠️ Quote provider returned error status");
            return Err(CarryError::unavailable(
                provider,
                format!("HTTP {}: {}", status, truncate_body(&body)),
            ));
        }

        let body = response.bytes().await.map_err(|e| CarryError::QuoteUnavailable {
            provider,
            reason: "failed to read response body".to_string(),
            source: Some(e.into()),
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%provider, url, error = %e, "⚠️ Quote response did not match schema");
            CarryError::malformed(provider, format!("unexpected response shape: {}", e))
        })
    }
}

impl SupplyRateSource for QuoteFetcher {
    async fn supply_rate(&self) -> CarryResult<f64> {
        self.fetch_supply_rate().await
    }
}

impl QuoteSource for QuoteFetcher {
    async fn primary_quotes(&self) -> CarryResult<PrimaryQuotes> {
        self.fetch_all_primary_quotes().await
    }
}

fn find_record<'a>(provider: QuoteProvider, records: &'a [RawRecord], symbol: &str) -> CarryResult<&'a RawRecord> {
    find_exactly_one(records, |r| r.symbol == symbol).map_err(|miss| {
        warn!(%provider, symbol, %miss, "⚠️ Quote record lookup failed");
        CarryError::unavailable(provider, format!("{} for symbol {}", miss, symbol))
    })
}

fn truncate_body(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}... (truncated)", head)
    } else {
        head
    }
}

/// Parses a string-encoded rate. Goes through `Decimal` so spellings like
/// "NaN", "inf" or "1_000" are refused instead of becoming surprising floats.
/// Magnitudes beyond `Decimal`'s range fall back to a finite `f64`.
fn parse_rate(provider: QuoteProvider, field: &str, raw: &str) -> CarryResult<f64> {
    let trimmed = raw.trim();
    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if trimmed.is_empty() || !numeric_chars {
        return Err(CarryError::malformed(
            provider,
            format!("{} {:?} is not a number", field, raw),
        ));
    }

    let value = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(decimal) => decimal.to_f64(),
        Err(_) => f64::from_str(trimmed).ok().filter(|v| v.is_finite()),
    };

    value.ok_or_else(|| {
        CarryError::malformed(
            provider,
            format!("{} {:?} is not a number or is out of range", field, raw),
        )
    })
}
