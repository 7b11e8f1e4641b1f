use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::CurrencyCode;

/// Minimal identity record for a cryptocurrency, as returned by the
/// `/coins/list` endpoint.
///
/// The full set of descriptors doubles as the lookup table for
/// validating caller-supplied coin ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinDescriptor {
    /// Stable slug used in API paths (e.g. "bitcoin")
    pub id: String,

    /// Ticker symbol (e.g. "btc")
    pub symbol: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,
}

/// Per-currency value maps inside a coin detail response.
///
/// Keys are vs-currency codes; values are denominated in that
/// currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoinMarketData {
    /// Current price per vs currency
    #[serde(default)]
    pub current_price: HashMap<CurrencyCode, Decimal>,

    /// Market capitalization per vs currency
    #[serde(default)]
    pub market_cap: HashMap<CurrencyCode, Decimal>,

    /// 24h trading volume per vs currency
    #[serde(default)]
    pub total_volume: HashMap<CurrencyCode, Decimal>,
}

/// Detail record for a single coin from `/coins/{id}`.
///
/// The endpoint returns far more than this; only the fields consumed
/// downstream are modeled and the rest are ignored on decode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinDetail {
    /// Stable slug used in API paths
    pub id: String,

    /// Ticker symbol
    pub symbol: String,

    /// Display name
    pub name: String,

    /// Market values per vs currency (absent for delisted coins)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<CoinMarketData>,

    /// When the API last refreshed this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
