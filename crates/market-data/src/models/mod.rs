//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (CoinId, CurrencyCode)
//! - `coin` - Coin identity and detail records (CoinDescriptor, CoinDetail)
//! - `market` - Market snapshot data (MarketSnapshot)

mod coin;
mod market;
mod types;

pub use coin::{CoinDescriptor, CoinDetail, CoinMarketData};
pub use market::MarketSnapshot;
pub use types::{CoinId, CurrencyCode};
