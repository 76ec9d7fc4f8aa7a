//! # Bitfinex Client
//!
//! An async Rust client library for the Bitfinex exchange REST v2 API.
//!
//! ## Features
//!
//! - Public market data: platform status, tickers, trades, order books, candles
//! - Authenticated private endpoints with HMAC-SHA384 request signing
//! - Process-wide strictly increasing nonces, safe across client instances
//! - Strong typing for positional response payloads
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitfinex_api_client::rest::BitfinexRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitfinexRestClient::new();
//!     let ticker = client.get_ticker("tBTCUSD").await?;
//!     println!("Last price: {}", ticker.last_price());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BitfinexError;
pub use types::common::{PlatformStatus, Precision, SymbolKind};

/// Result type alias using BitfinexError
pub type Result<T> = std::result::Result<T, BitfinexError>;
