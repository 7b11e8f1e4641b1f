//! Market data provider implementation.
//!
//! One provider is implemented: CoinGecko. It owns the HTTP client,
//! the lookup sets used for local argument validation, and the single
//! request-and-decode primitive every operation funnels through.

pub mod coingecko;

// Re-exports
pub use coingecko::{CoinGeckoConfig, CoinGeckoProvider};
