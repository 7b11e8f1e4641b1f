//! Error types for the market data crate.
//!
//! This module provides [`MarketDataError`], the single error enum
//! returned by every market data operation.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// The variants mirror the places a call can fail: on the wire
/// ([`Network`](Self::Network)), at the HTTP layer
/// ([`UnexpectedStatus`](Self::UnexpectedStatus)), while decoding the
/// body ([`Decode`](Self::Decode)), or locally before any request is
/// issued ([`InvalidArgument`](Self::InvalidArgument)).
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a usable response: connection
    /// failure, timeout, or an error while reading the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    /// The body text is kept for diagnostics.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the API
        status: reqwest::StatusCode,
        /// Response body as received
        body: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A caller-supplied currency code or coin id failed validation
    /// against the lookup sets cached at provider construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MarketDataError {
    /// Returns `true` when the failure originated locally (argument
    /// validation) rather than from the transport or the remote API.
    ///
    /// Useful for callers that report remote trouble differently from
    /// their own bad input.
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
