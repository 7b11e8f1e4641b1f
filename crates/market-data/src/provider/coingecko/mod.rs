//! CoinGecko market data provider implementation.
//!
//! This module provides cryptocurrency market data from the CoinGecko
//! v3 API:
//! - Supported vs currencies via /simple/supported_vs_currencies
//! - Known coins via /coins/list
//! - Market snapshots via /coins/markets
//! - Single-coin detail via /coins/{id}
//!
//! Anonymous callers are subject to the public rate limits; a demo API
//! key sent as a request header raises them.
//! API documentation: https://docs.coingecko.com/reference/introduction

use std::env;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{CoinDescriptor, CoinDetail, CurrencyCode, MarketSnapshot};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

/// Header carrying the demo API key
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Environment variable consulted by [`CoinGeckoConfig::from_env`]
const API_KEY_ENV: &str = "COINGECKO_API_KEY";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`CoinGeckoProvider`].
///
/// The API key is an explicit field rather than ambient process-wide
/// state; [`CoinGeckoConfig::from_env`] is the only place the
/// environment is consulted, and a missing key just means
/// unauthenticated requests.
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// Demo API key, sent as a request header when present
    pub api_key: Option<String>,

    /// API root. Overridable so tests can point at a stub server.
    pub base_url: String,

    /// Currency market values are expressed in when the caller does
    /// not name one
    pub base_currency: CurrencyCode,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: BASE_URL.to_string(),
            base_currency: "usd".to_string(),
        }
    }
}

impl CoinGeckoConfig {
    /// Build a default config with the API key taken from
    /// `COINGECKO_API_KEY`, if set.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }
}

/// CoinGecko market data provider.
///
/// Holds the lookup sets used to validate caller-supplied currency
/// codes and coin ids. Both sets are fetched once at construction and
/// never refreshed in place; construct a fresh provider to pick up
/// newly listed coins or currencies.
///
/// # Example
///
/// ```ignore
/// use coinlens_market_data::{CoinGeckoConfig, CoinGeckoProvider};
///
/// let provider = CoinGeckoProvider::new(CoinGeckoConfig::from_env()).await;
/// let markets = provider.markets().await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    base_currency: CurrencyCode,
    /// Supported vs currencies at construction time; empty when the
    /// warm-up fetch failed
    currency_set: Vec<CurrencyCode>,
    /// Known coins at construction time; empty when the warm-up fetch
    /// failed, in which case every id is rejected as invalid
    coin_set: Vec<CoinDescriptor>,
}

impl CoinGeckoProvider {
    /// Create a new provider and warm its validation lookup sets.
    ///
    /// Warm-up failures are logged and swallowed: the provider is
    /// always usable afterwards, but with an empty coin set local
    /// validation rejects every id until a fresh provider is
    /// constructed.
    pub async fn new(config: CoinGeckoConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut provider = Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            base_currency: config.base_currency,
            currency_set: Vec::new(),
            coin_set: Vec::new(),
        };

        match provider.supported_currencies().await {
            Ok(currencies) => provider.currency_set = currencies,
            Err(e) => warn!(
                "{}: failed to fetch supported currencies, currency validation disabled: {}",
                PROVIDER_ID, e
            ),
        }
        match provider.coins().await {
            Ok(coins) => provider.coin_set = coins,
            Err(e) => warn!(
                "{}: failed to fetch coin list, all coin ids will be rejected: {}",
                PROVIDER_ID, e
            ),
        }

        provider
    }

    /// The configured base currency.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Fetch the vs currencies market values can be requested in, in
    /// upstream order.
    ///
    /// Always issues a fresh request; the set cached inside the
    /// provider is used only for validation.
    pub async fn supported_currencies(&self) -> Result<Vec<CurrencyCode>, MarketDataError> {
        self.request("/simple/supported_vs_currencies", &[]).await
    }

    /// Fetch the full list of coins known to the API.
    pub async fn coins(&self) -> Result<Vec<CoinDescriptor>, MarketDataError> {
        self.request("/coins/list", &[]).await
    }

    /// Fetch market snapshots for all coins, priced in the configured
    /// base currency.
    pub async fn markets(&self) -> Result<Vec<MarketSnapshot>, MarketDataError> {
        self.markets_in(self.base_currency.as_str()).await
    }

    /// Fetch market snapshots priced in `vs_currency`.
    ///
    /// When the currency set was fetched at construction, the code is
    /// checked against it before any network I/O. With an empty set
    /// the request goes out as-is and the API rejects unsupported
    /// codes itself.
    pub async fn markets_in(
        &self,
        vs_currency: &str,
    ) -> Result<Vec<MarketSnapshot>, MarketDataError> {
        if !self.currency_set.is_empty()
            && !self.currency_set.iter().any(|c| c.as_str() == vs_currency)
        {
            return Err(MarketDataError::InvalidArgument(format!(
                "unsupported vs currency: {}",
                vs_currency
            )));
        }

        self.request("/coins/markets", &[("vs_currency", vs_currency)])
            .await
    }

    /// Fetch detail for a single coin.
    ///
    /// The id must be present in the coin set fetched at construction;
    /// unknown ids are rejected without issuing a request. The check
    /// is a point-in-time membership test and goes stale if the remote
    /// list changes.
    pub async fn coin(&self, id: &str) -> Result<CoinDetail, MarketDataError> {
        if !self.coin_set.iter().any(|c| c.id == id) {
            return Err(MarketDataError::InvalidArgument(format!(
                "unknown coin id: {}",
                id
            )));
        }

        self.request(&format!("/coins/{}", encode(id)), &[]).await
    }

    /// Issue one GET against the API and decode the JSON body.
    ///
    /// This is the single origin of transport, status, and decode
    /// failures; the operations above propagate them untouched.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        for (key, value) in query {
            request = request.query(&[(key, value)]);
        }

        debug!("{}: GET {}", PROVIDER_ID, path);

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MarketDataError::UnexpectedStatus { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
