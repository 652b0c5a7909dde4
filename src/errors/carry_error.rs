//! Custom error types for the carry calculator

use thiserror::Error;
use crate::types::QuoteProvider;

#[derive(Error, Debug)]
pub enum CarryError {
    #[error("Quote unavailable from {provider}: {reason}")]
    QuoteUnavailable {
        provider: QuoteProvider,
        reason: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Malformed quote from {provider}: {reason}")]
    MalformedQuote {
        provider: QuoteProvider,
        reason: String,
    },

    #[error("Invalid arbitrage ratio: {reason}")]
    InvalidArbRatio {
        reason: String,
    },

    #[error("Invalid collateral ratio: {ratio} (must be positive and finite)")]
    InvalidCollateralRatio {
        ratio: f64,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

impl CarryError {
    pub(crate) fn unavailable(provider: QuoteProvider, reason: impl Into<String>) -> Self {
        CarryError::QuoteUnavailable {
            provider,
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn malformed(provider: QuoteProvider, reason: impl Into<String>) -> Self {
        CarryError::MalformedQuote {
            provider,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_arb(reason: impl Into<String>) -> Self {
        CarryError::InvalidArbRatio {
            reason: reason.into(),
        }
    }
}

pub type CarryResult<T> = Result<T, CarryError>;
