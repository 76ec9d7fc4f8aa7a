//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BitfinexError;
use crate::rest::BitfinexRestClient;
use crate::rest::endpoints::public;
use crate::types::{PlatformStatus, Precision, SymbolKind};

impl BitfinexRestClient {
    /// Get the platform operational status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitfinex_api_client::rest::BitfinexRestClient;
    /// use bitfinex_api_client::types::PlatformStatus;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitfinexRestClient::new();
    ///     if client.get_platform_status().await? == PlatformStatus::Maintenance {
    ///         println!("Platform is down for maintenance");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_platform_status(&self) -> Result<PlatformStatus, BitfinexError> {
        self.public_get(public::PLATFORM_STATUS).await
    }

    /// Get the ticker for a single symbol.
    ///
    /// The response layout is selected by the symbol prefix: `t` symbols
    /// decode as [`TradingTicker`], `f` symbols as [`FundingTicker`].
    ///
    /// # Arguments
    ///
    /// * `symbol` - Symbol with class prefix (e.g., "tBTCUSD", "fUSD").
    pub async fn get_ticker(&self, symbol: &str) -> Result<Ticker, BitfinexError> {
        let kind = SymbolKind::from_symbol(symbol)?;
        let endpoint = public::ticker(symbol);
        match kind {
            SymbolKind::Trading => Ok(Ticker::Trading(self.public_get(&endpoint).await?)),
            SymbolKind::Funding => Ok(Ticker::Funding(self.public_get(&endpoint).await?)),
        }
    }

    /// Get tickers for multiple symbols.
    ///
    /// Each row carries its symbol, and the per-row layout is dispatched on
    /// the symbol prefix.
    pub async fn get_tickers(
        &self,
        request: &TickersRequest,
    ) -> Result<Vec<SymbolTicker>, BitfinexError> {
        self.public_get_with_params(public::TICKERS, request).await
    }

    /// Get historical ticker snapshots.
    pub async fn get_tickers_history(
        &self,
        request: &TickersHistoryRequest,
    ) -> Result<Vec<TickerHistory>, BitfinexError> {
        self.public_get_with_params(public::TICKERS_HISTORY, request)
            .await
    }

    /// Get historical trades for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Symbol with class prefix (e.g., "tBTCUSD", "fUSD").
    /// * `request` - Paging and sorting parameters.
    pub async fn get_trades(
        &self,
        symbol: &str,
        request: &TradesRequest,
    ) -> Result<Trades, BitfinexError> {
        let kind = SymbolKind::from_symbol(symbol)?;
        let endpoint = public::trades(symbol);
        match kind {
            SymbolKind::Trading => Ok(Trades::Trading(
                self.public_get_with_params(&endpoint, request).await?,
            )),
            SymbolKind::Funding => Ok(Trades::Funding(
                self.public_get_with_params(&endpoint, request).await?,
            )),
        }
    }

    /// Get the order book for a symbol.
    ///
    /// The row layout is selected by the symbol prefix and the precision:
    /// `P0`-`P3` return aggregated price levels, `R0` the raw per-order book.
    pub async fn get_book(
        &self,
        symbol: &str,
        precision: Precision,
        request: &BookRequest,
    ) -> Result<Book, BitfinexError> {
        let kind = SymbolKind::from_symbol(symbol)?;
        let endpoint = public::book(symbol, precision);
        let book = match (kind, precision.is_raw()) {
            (SymbolKind::Trading, false) => {
                Book::Trading(self.public_get_with_params(&endpoint, request).await?)
            }
            (SymbolKind::Funding, false) => {
                Book::Funding(self.public_get_with_params(&endpoint, request).await?)
            }
            (SymbolKind::Trading, true) => {
                Book::RawTrading(self.public_get_with_params(&endpoint, request).await?)
            }
            (SymbolKind::Funding, true) => {
                Book::RawFunding(self.public_get_with_params(&endpoint, request).await?)
            }
        };
        Ok(book)
    }

    /// Get historical candles.
    pub async fn get_candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, BitfinexError> {
        let endpoint = public::candles_hist(&request.timeframe, &request.symbol);
        self.public_get_with_params(&endpoint, request).await
    }

    /// Get the most recent candle for a timeframe and symbol.
    ///
    /// # Arguments
    ///
    /// * `timeframe` - Candle timeframe (e.g., "1m", "1h", "1D").
    /// * `symbol` - Symbol with class prefix (e.g., "tBTCUSD").
    pub async fn get_last_candle(
        &self,
        timeframe: &str,
        symbol: &str,
    ) -> Result<Candle, BitfinexError> {
        self.public_get(&public::candles_last(timeframe, symbol))
            .await
    }
}
