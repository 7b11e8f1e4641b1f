/// Stable coin identifier - CoinGecko's URL slug (e.g. "bitcoin")
pub type CoinId = String;

/// Fiat currency code - short lowercase string (e.g. "usd")
pub type CurrencyCode = String;
