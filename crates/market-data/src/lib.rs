//! Coinlens Market Data Crate
//!
//! This crate provides cryptocurrency market data fetching for the
//! Coinlens application, backed by the CoinGecko v3 API.
//!
//! # Overview
//!
//! The crate supports:
//! - Listing the fiat currencies market values can be requested in
//! - Listing all coins known to the API
//! - Fetching market snapshots (price, market cap, volume) for a base currency
//! - Fetching detail for a single coin by its id
//!
//! All operations go through [`CoinGeckoProvider`], which funnels every
//! call into one request-and-decode primitive. The provider caches the
//! supported-currency and coin lookup sets once at construction and uses
//! them to validate caller-supplied arguments before touching the
//! network; refreshing those sets means constructing a fresh provider.
//!
//! # Core Types
//!
//! - [`CoinGeckoProvider`] - The provider all operations hang off
//! - [`CoinGeckoConfig`] - API key, base URL, and base currency
//! - [`CoinDescriptor`] - Minimal coin identity (id, symbol, name)
//! - [`CoinDetail`] - Single-coin detail with per-currency value maps
//! - [`MarketSnapshot`] - Per-coin market values in a base currency
//! - [`MarketDataError`] - Failure taxonomy for every operation
//!
//! # Type Aliases
//!
//! - [`CoinId`] - Stable coin slug (e.g. "bitcoin")
//! - [`CurrencyCode`] - Lowercase fiat currency code (e.g. "usd")

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{CoinDescriptor, CoinDetail, CoinId, CoinMarketData, CurrencyCode, MarketSnapshot};

// Re-export error types
pub use errors::MarketDataError;

// Re-export provider types
pub use provider::{CoinGeckoConfig, CoinGeckoProvider};
