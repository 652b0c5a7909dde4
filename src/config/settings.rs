//! Calculator configuration settings and environment variable handling

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use crate::errors::{CarryError, CarryResult};

// Configuration constants
pub const DEFAULT_DERIVATIVE_SYMBOL: &str = "stkd-SCRT";
pub const DEFAULT_BORROW_SYMBOL: &str = "SCRT";
pub const DEFAULT_SUPPLY_SYMBOL: &str = "USDC";
pub const DEFAULT_COLLATERAL_RATIO: f64 = 1.5;
pub const MIN_COLLATERAL_RATIO: f64 = 0.1;
pub const MAX_COLLATERAL_RATIO: f64 = 10.0;
pub const DEFAULT_DAYS_TO_REDEEM: f64 = 21.0; // Secret Network unbonding period
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_DIR: &str = "output/logs";

/// Where each quote lives and which record to read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteEndpoints {
    pub spot_price_url: String,
    pub redemption_rate_url: String,
    pub lending_rates_url: String,
    pub derivative_symbol: String,
    pub borrow_symbol: String,
    pub supply_symbol: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoints: QuoteEndpoints,
    pub collateral_ratio: f64,
    pub days_to_redeem: f64,
    pub request_timeout: Duration,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> CarryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> CarryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| CarryError::Config {
                    message: format!("missing env var: {}", key),
                })
        };
        let or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let collateral_ratio: f64 = parse_var(&lookup, "COLLATERAL_RATIO", DEFAULT_COLLATERAL_RATIO)?;
        if !(MIN_COLLATERAL_RATIO..=MAX_COLLATERAL_RATIO).contains(&collateral_ratio) {
            return Err(CarryError::Config {
                message: format!(
                    "COLLATERAL_RATIO {} outside [{}, {}]",
                    collateral_ratio, MIN_COLLATERAL_RATIO, MAX_COLLATERAL_RATIO
                ),
            });
        }

        let days_to_redeem: f64 = parse_var(&lookup, "DAYS_TO_REDEEM", DEFAULT_DAYS_TO_REDEEM)?;
        if !(days_to_redeem > 0.0 && days_to_redeem.is_finite()) {
            return Err(CarryError::Config {
                message: format!("DAYS_TO_REDEEM must be positive, got {}", days_to_redeem),
            });
        }

        let timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(CarryError::Config {
                message: "REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            });
        }

        Ok(Self {
            endpoints: QuoteEndpoints {
                spot_price_url: required("SPOT_PRICE_URL")?,
                redemption_rate_url: required("REDEMPTION_RATE_URL")?,
                lending_rates_url: required("LENDING_RATES_URL")?,
                derivative_symbol: or_default("DERIVATIVE_SYMBOL", DEFAULT_DERIVATIVE_SYMBOL),
                borrow_symbol: or_default("BORROW_SYMBOL", DEFAULT_BORROW_SYMBOL),
                supply_symbol: or_default("SUPPLY_SYMBOL", DEFAULT_SUPPLY_SYMBOL),
            },
            collateral_ratio,
            days_to_redeem,
            request_timeout: Duration::from_secs(timeout_secs),
            log_dir: PathBuf::from(or_default("LOG_DIR", DEFAULT_LOG_DIR)),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> CarryResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| CarryError::Config {
            message: format!("{}: {}", key, e),
        }),
    }
}
