use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a `/coins/markets` response: a coin's market values
/// denominated in the requested vs currency at request time.
///
/// Everything past the id is optional so that a sparse upstream body
/// still decodes; values pass through untransformed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Stable coin id
    pub id: String,

    /// Ticker symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current price in the requested vs currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,

    /// Market capitalization in the requested vs currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    /// Rank by market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,

    /// 24h trading volume in the requested vs currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<Decimal>,

    /// 24h high
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_24h: Option<Decimal>,

    /// 24h low
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_24h: Option<Decimal>,

    /// Absolute price change over 24h
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<Decimal>,

    /// Relative price change over 24h, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<Decimal>,

    /// When the API last refreshed this row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
