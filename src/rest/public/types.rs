//! Types for public REST API endpoints.
//!
//! Bitfinex v2 responses are positional arrays; each type here carries the
//! fixed index-to-field table for one row shape as a tuple `Deserialize`.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::comma_separated;

/// Ticker for a single symbol, shaped by the symbol class.
#[derive(Debug, Clone)]
pub enum Ticker {
    /// Ticker for a `t` symbol.
    Trading(TradingTicker),
    /// Ticker for an `f` symbol.
    Funding(FundingTicker),
}

impl Ticker {
    /// Best bid price (trading) or rate (funding).
    pub fn bid(&self) -> Decimal {
        match self {
            Ticker::Trading(t) => t.bid,
            Ticker::Funding(f) => f.bid,
        }
    }

    /// Best ask price (trading) or rate (funding).
    pub fn ask(&self) -> Decimal {
        match self {
            Ticker::Trading(t) => t.ask,
            Ticker::Funding(f) => f.ask,
        }
    }

    /// Price (or rate) of the most recent trade.
    pub fn last_price(&self) -> Decimal {
        match self {
            Ticker::Trading(t) => t.last_price,
            Ticker::Funding(f) => f.last_price,
        }
    }
}

/// Ticker for a trading pair.
/// Format: [bid, bid_size, ask, ask_size, daily_change, daily_change_perc,
/// last_price, volume, high, low]
#[derive(Debug, Clone)]
pub struct TradingTicker {
    /// Best bid price.
    pub bid: Decimal,
    /// Total size of the best bid level.
    pub bid_size: Decimal,
    /// Best ask price.
    pub ask: Decimal,
    /// Total size of the best ask level.
    pub ask_size: Decimal,
    /// Price change over the last 24 hours.
    pub daily_change: Decimal,
    /// Relative price change over the last 24 hours.
    pub daily_change_perc: Decimal,
    /// Price of the most recent trade.
    pub last_price: Decimal,
    /// Volume over the last 24 hours.
    pub volume: Decimal,
    /// Daily high.
    pub high: Decimal,
    /// Daily low.
    pub low: Decimal,
}

impl<'de> Deserialize<'de> for TradingTicker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(TradingTicker {
            bid: arr.0,
            bid_size: arr.1,
            ask: arr.2,
            ask_size: arr.3,
            daily_change: arr.4,
            daily_change_perc: arr.5,
            last_price: arr.6,
            volume: arr.7,
            high: arr.8,
            low: arr.9,
        })
    }
}

/// Ticker for a funding currency.
/// Format: [frr, bid, bid_period, bid_size, ask, ask_period, ask_size,
/// daily_change, daily_change_perc, last_price, volume, high, low,
/// _placeholder, _placeholder, frr_amount_available]
///
/// Slots 13 and 14 are undocumented placeholders and are ignored.
#[derive(Debug, Clone)]
pub struct FundingTicker {
    /// Flash return rate.
    pub frr: Decimal,
    /// Best bid rate.
    pub bid: Decimal,
    /// Period of the best bid, in days.
    pub bid_period: i64,
    /// Total size of the best bid level.
    pub bid_size: Decimal,
    /// Best ask rate.
    pub ask: Decimal,
    /// Period of the best ask, in days.
    pub ask_period: i64,
    /// Total size of the best ask level.
    pub ask_size: Decimal,
    /// Rate change over the last 24 hours.
    pub daily_change: Decimal,
    /// Relative rate change over the last 24 hours.
    pub daily_change_perc: Decimal,
    /// Rate of the most recent trade.
    pub last_price: Decimal,
    /// Volume over the last 24 hours.
    pub volume: Decimal,
    /// Daily high.
    pub high: Decimal,
    /// Daily low.
    pub low: Decimal,
    /// Amount available at the flash return rate.
    pub frr_amount_available: Decimal,
}

impl<'de> Deserialize<'de> for FundingTicker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (
            Decimal,
            Decimal,
            i64,
            Decimal,
            Decimal,
            i64,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            IgnoredAny,
            IgnoredAny,
            Decimal,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(FundingTicker {
            frr: arr.0,
            bid: arr.1,
            bid_period: arr.2,
            bid_size: arr.3,
            ask: arr.4,
            ask_period: arr.5,
            ask_size: arr.6,
            daily_change: arr.7,
            daily_change_perc: arr.8,
            last_price: arr.9,
            volume: arr.10,
            high: arr.11,
            low: arr.12,
            frr_amount_available: arr.15,
        })
    }
}

/// Request parameters for the multi-symbol tickers endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickersRequest {
    /// Symbols to fetch, comma-joined in the query string.
    #[serde(with = "comma_separated")]
    pub symbols: Vec<String>,
}

impl TickersRequest {
    /// Request specific symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Request every symbol on the platform.
    pub fn all() -> Self {
        Self::new(["ALL"])
    }
}

/// One row of the multi-symbol tickers response.
///
/// The row leads with the symbol; the remaining slots are dispatched on the
/// symbol prefix into the trading or funding layout.
#[derive(Debug, Clone)]
pub struct SymbolTicker {
    /// Symbol with class prefix.
    pub symbol: String,
    /// Per-class ticker fields.
    pub ticker: Ticker,
}

impl<'de> Deserialize<'de> for SymbolTicker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut row: Vec<serde_json::Value> = Deserialize::deserialize(deserializer)?;
        if row.is_empty() {
            return Err(serde::de::Error::invalid_length(0, &"a non-empty ticker row"));
        }
        let symbol: String =
            serde_json::from_value(row.remove(0)).map_err(serde::de::Error::custom)?;
        let rest = serde_json::Value::Array(row);
        let ticker = match symbol.as_bytes().first() {
            Some(b't') => Ticker::Trading(
                serde_json::from_value(rest).map_err(serde::de::Error::custom)?,
            ),
            Some(b'f') => Ticker::Funding(
                serde_json::from_value(rest).map_err(serde::de::Error::custom)?,
            ),
            _ => {
                return Err(serde::de::Error::custom(format!(
                    "unknown symbol prefix in {symbol}"
                )));
            }
        };
        Ok(SymbolTicker { symbol, ticker })
    }
}

/// Request parameters for historical ticker snapshots.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickersHistoryRequest {
    /// Symbols to fetch, comma-joined in the query string.
    #[serde(with = "comma_separated")]
    pub symbols: Vec<String>,
    /// Maximum number of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only rows at or after this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Only rows at or before this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl TickersHistoryRequest {
    /// Request history for specific symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            limit: None,
            start: None,
            end: None,
        }
    }

    /// Request history for every symbol.
    pub fn all() -> Self {
        Self::new(["ALL"])
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start timestamp (milliseconds).
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end timestamp (milliseconds).
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }
}

/// Historical ticker snapshot.
/// Format: [symbol, bid, _placeholder, ask, 8 placeholder slots, mts]
///
/// Only slots 0, 1, 3 and 12 are populated; the rest are placeholders.
#[derive(Debug, Clone)]
pub struct TickerHistory {
    /// Symbol with class prefix.
    pub symbol: String,
    /// Best bid price at snapshot time.
    pub bid: Decimal,
    /// Best ask price at snapshot time.
    pub ask: Decimal,
    /// Snapshot timestamp in milliseconds.
    pub mts: i64,
}

impl<'de> Deserialize<'de> for TickerHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row: Vec<serde_json::Value> = Deserialize::deserialize(deserializer)?;
        if row.len() < 13 {
            return Err(serde::de::Error::invalid_length(
                row.len(),
                &"a tickers-history row of at least 13 slots",
            ));
        }
        let slot = |i: usize| row[i].clone();
        Ok(TickerHistory {
            symbol: serde_json::from_value(slot(0)).map_err(serde::de::Error::custom)?,
            bid: serde_json::from_value(slot(1)).map_err(serde::de::Error::custom)?,
            ask: serde_json::from_value(slot(3)).map_err(serde::de::Error::custom)?,
            mts: serde_json::from_value(slot(12)).map_err(serde::de::Error::custom)?,
        })
    }
}

/// Request parameters for historical trades.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradesRequest {
    /// Maximum number of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only trades at or after this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Only trades at or before this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Sort direction: +1 ascending by timestamp, -1 descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i8>,
}

impl TradesRequest {
    /// Create an empty request (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start timestamp (milliseconds).
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end timestamp (milliseconds).
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the sort direction (+1 ascending, -1 descending).
    pub fn sort(mut self, sort: i8) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Historical trades, shaped by the symbol class of the request.
#[derive(Debug, Clone)]
pub enum Trades {
    /// Trades on a trading pair.
    Trading(Vec<TradingTrade>),
    /// Funding trades on a currency.
    Funding(Vec<FundingTrade>),
}

/// Single executed trade on a trading pair.
/// Format: [id, mts, amount, price]
#[derive(Debug, Clone)]
pub struct TradingTrade {
    /// Trade id.
    pub id: i64,
    /// Execution timestamp in milliseconds.
    pub mts: i64,
    /// Signed amount: positive for buys, negative for sells.
    pub amount: Decimal,
    /// Execution price.
    pub price: Decimal,
}

impl<'de> Deserialize<'de> for TradingTrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, i64, Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(TradingTrade {
            id: arr.0,
            mts: arr.1,
            amount: arr.2,
            price: arr.3,
        })
    }
}

/// Single executed funding trade.
/// Format: [id, mts, amount, rate, period]
#[derive(Debug, Clone)]
pub struct FundingTrade {
    /// Trade id.
    pub id: i64,
    /// Execution timestamp in milliseconds.
    pub mts: i64,
    /// Signed funding amount.
    pub amount: Decimal,
    /// Funding rate.
    pub rate: Decimal,
    /// Funding period in days.
    pub period: i64,
}

impl<'de> Deserialize<'de> for FundingTrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, i64, Decimal, Decimal, i64) = Deserialize::deserialize(deserializer)?;
        Ok(FundingTrade {
            id: arr.0,
            mts: arr.1,
            amount: arr.2,
            rate: arr.3,
            period: arr.4,
        })
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookRequest {
    /// Number of levels per side (1, 25, 100 or 250; raw books also 500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u16>,
}

impl BookRequest {
    /// Create an empty request (server default depth).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of levels per side.
    pub fn len(mut self, len: u16) -> Self {
        self.len = Some(len);
        self
    }
}

/// Order book, shaped by symbol class and precision.
#[derive(Debug, Clone)]
pub enum Book {
    /// Aggregated price levels for a trading pair.
    Trading(Vec<TradingLevel>),
    /// Aggregated rate levels for a funding currency.
    Funding(Vec<FundingLevel>),
    /// Raw per-order book for a trading pair.
    RawTrading(Vec<TradingOrder>),
    /// Raw per-offer book for a funding currency.
    RawFunding(Vec<FundingOffer>),
}

/// Aggregated trading book level.
/// Format: [price, count, amount]
#[derive(Debug, Clone)]
pub struct TradingLevel {
    /// Price level.
    pub price: Decimal,
    /// Number of orders at this level.
    pub count: i64,
    /// Total amount: positive for bids, negative for asks.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for TradingLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (Decimal, i64, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(TradingLevel {
            price: arr.0,
            count: arr.1,
            amount: arr.2,
        })
    }
}

/// Aggregated funding book level.
/// Format: [rate, period, count, amount]
#[derive(Debug, Clone)]
pub struct FundingLevel {
    /// Funding rate.
    pub rate: Decimal,
    /// Funding period in days.
    pub period: i64,
    /// Number of offers at this level.
    pub count: i64,
    /// Total amount at this level.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for FundingLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (Decimal, i64, i64, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(FundingLevel {
            rate: arr.0,
            period: arr.1,
            count: arr.2,
            amount: arr.3,
        })
    }
}

/// Raw trading book entry.
/// Format: [order_id, price, amount]
#[derive(Debug, Clone)]
pub struct TradingOrder {
    /// Order id.
    pub order_id: i64,
    /// Order price.
    pub price: Decimal,
    /// Signed order amount.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for TradingOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(TradingOrder {
            order_id: arr.0,
            price: arr.1,
            amount: arr.2,
        })
    }
}

/// Raw funding book entry.
/// Format: [offer_id, period, rate, amount]
#[derive(Debug, Clone)]
pub struct FundingOffer {
    /// Offer id.
    pub offer_id: i64,
    /// Funding period in days.
    pub period: i64,
    /// Offer rate.
    pub rate: Decimal,
    /// Signed offer amount.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for FundingOffer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, i64, Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(FundingOffer {
            offer_id: arr.0,
            period: arr.1,
            rate: arr.2,
            amount: arr.3,
        })
    }
}

/// Request parameters for historical candles.
#[derive(Debug, Clone, Serialize)]
pub struct CandlesRequest {
    /// Candle timeframe (e.g., "1m", "1h", "1D"); part of the path.
    #[serde(skip)]
    pub timeframe: String,
    /// Symbol with class prefix; part of the path.
    #[serde(skip)]
    pub symbol: String,
    /// Maximum number of candles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only candles at or after this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Only candles at or before this millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Sort direction: +1 ascending by timestamp, -1 descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i8>,
}

impl CandlesRequest {
    /// Create a new candles request for a timeframe and symbol.
    pub fn new(timeframe: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            timeframe: timeframe.into(),
            symbol: symbol.into(),
            limit: None,
            start: None,
            end: None,
            sort: None,
        }
    }

    /// Set the candle limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start timestamp (milliseconds).
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end timestamp (milliseconds).
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the sort direction (+1 ascending, -1 descending).
    pub fn sort(mut self, sort: i8) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Single candle.
/// Format: [mts, open, close, high, low, volume]
#[derive(Debug, Clone)]
pub struct Candle {
    /// Candle start timestamp in milliseconds.
    pub mts: i64,
    /// First execution price in the period.
    pub open: Decimal,
    /// Last execution price in the period.
    pub close: Decimal,
    /// Highest execution price in the period.
    pub high: Decimal,
    /// Lowest execution price in the period.
    pub low: Decimal,
    /// Volume in the period.
    pub volume: Decimal,
}

impl<'de> Deserialize<'de> for Candle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, Decimal, Decimal, Decimal, Decimal, Decimal) =
            Deserialize::deserialize(deserializer)?;
        Ok(Candle {
            mts: arr.0,
            open: arr.1,
            close: arr.2,
            high: arr.3,
            low: arr.4,
            volume: arr.5,
        })
    }
}
