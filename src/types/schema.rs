//! Response record schemas for the quote providers
//!
//! Every provider answers with a JSON array of per-asset records. Numeric
//! fields arrive as strings and are parsed after the matching record is found.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Any provider record, held loosely until its symbol has been matched so a
/// bad record for another asset cannot fail the lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub symbol: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    /// Strictly decodes this record into a provider-specific schema.
    pub fn decode<T>(&self) -> serde_json::Result<T>
    where
        T: DeserializeOwned,
    {
        let mut object = self.fields.clone();
        object.insert("symbol".to_string(), Value::String(self.symbol.clone()));
        serde_json::from_value(Value::Object(object))
    }
}

/// `[{ "symbol": "stkd-SCRT", "price": "0.9871" }]`
#[derive(Debug, Clone, Deserialize)]
pub struct SpotPriceRecord {
    pub symbol: String,
    pub price: String,
}

/// `[{ "symbol": "stkd-SCRT", "rate": "1.0214" }]`
#[derive(Debug, Clone, Deserialize)]
pub struct RedemptionRecord {
    pub symbol: String,
    pub rate: String,
}

/// `[{ "symbol": "SCRT", "borrow_rate": "0.081", "supply_rate": "0.034" }]`
#[derive(Debug, Clone, Deserialize)]
pub struct LendingMarketRecord {
    pub symbol: String,
    pub borrow_rate: String,
    pub supply_rate: String,
}
