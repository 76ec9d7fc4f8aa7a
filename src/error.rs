//! Error types for the Bitfinex client library.

use thiserror::Error;

/// The main error type for all Bitfinex client operations.
#[derive(Error, Debug)]
pub enum BitfinexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx HTTP response that did not carry a Bitfinex error array
    #[error("HTTP code {status} {text}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Status text or response body excerpt
        text: String,
    },

    /// Bitfinex API returned an error
    #[error("Bitfinex API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Symbol does not start with the `t` (trading) or `f` (funding) prefix
    #[error("Unknown symbol prefix: {0}")]
    UnknownSymbol(String),

    /// Missing required credentials
    #[error("missing api key or secret")]
    MissingCredentials,
}

/// Bitfinex API error codes and messages.
///
/// Bitfinex reports errors in the response body as a positional array
/// `["error", CODE, "MESSAGE"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Numeric error code (e.g., 10114 for an invalid nonce)
    pub code: i64,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Parse an API error from Bitfinex's positional error array.
    ///
    /// Returns `None` when the value is not of the form `["error", CODE, "MESSAGE"]`.
    pub fn from_error_array(value: &serde_json::Value) -> Option<Self> {
        let arr = value.as_array()?;
        if arr.first()?.as_str()? != "error" {
            return None;
        }
        let code = arr.get(1)?.as_i64()?;
        let message = arr.get(2).and_then(|m| m.as_str()).unwrap_or_default();
        Some(Self::new(code, message))
    }

    /// Check if this is an invalid nonce error.
    ///
    /// The server rejects a signed request whose nonce is not greater than the
    /// last accepted one for the same credentials. The consumed nonce is never
    /// reused, so the caller may simply retry with a fresh signature.
    pub fn is_invalid_nonce(&self) -> bool {
        self.code == error_codes::INVALID_NONCE
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_api_key(&self) -> bool {
        self.code == error_codes::INVALID_API_KEY
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::RATE_LIMIT
    }
}

/// Known Bitfinex error codes for pattern matching.
pub mod error_codes {
    /// Generic error
    pub const GENERIC: i64 = 10000;
    /// Unknown event
    pub const UNKNOWN_EVENT: i64 = 10001;
    /// apikey: invalid
    pub const INVALID_API_KEY: i64 = 10100;
    /// nonce: small (nonce not greater than the last accepted one)
    pub const INVALID_NONCE: i64 = 10114;
    /// Ratelimit reached
    pub const RATE_LIMIT: i64 = 11010;
}
