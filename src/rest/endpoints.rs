//! Bitfinex REST API endpoint constants and path builders.

/// Base URL for the Bitfinex REST API.
pub const BITFINEX_BASE_URL: &str = "https://api.bitfinex.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Public endpoints (no authentication required).
///
/// Bitfinex embeds the symbol and precision in the path, so most of these
/// are builders rather than constants.
pub mod public {
    use crate::types::Precision;

    /// Get platform operational status.
    pub const PLATFORM_STATUS: &str = "/platform/status";
    /// Get tickers for multiple symbols.
    pub const TICKERS: &str = "/tickers";
    /// Get historical ticker snapshots.
    pub const TICKERS_HISTORY: &str = "/tickers/hist";

    /// Get the ticker for a single symbol.
    pub fn ticker(symbol: &str) -> String {
        format!("/ticker/{symbol}")
    }

    /// Get historical trades for a symbol.
    pub fn trades(symbol: &str) -> String {
        format!("/trades/{symbol}/hist")
    }

    /// Get the order book for a symbol at a precision.
    pub fn book(symbol: &str, precision: Precision) -> String {
        format!("/book/{symbol}/{precision}")
    }

    /// Get historical candles for a timeframe and symbol.
    pub fn candles_hist(timeframe: &str, symbol: &str) -> String {
        format!("/candles/trade:{timeframe}:{symbol}/hist")
    }

    /// Get the most recent candle for a timeframe and symbol.
    pub fn candles_last(timeframe: &str, symbol: &str) -> String {
        format!("/candles/trade:{timeframe}:{symbol}/last")
    }
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account wallets.
    pub const WALLETS: &str = "/auth/r/wallets";
}
