//! Bitfinex REST v2 API client.
//!
//! Provides the public market-data endpoints and the authenticated (signed)
//! private endpoints.

mod client;
mod endpoints;
pub mod private;
pub mod public;

pub use client::{BitfinexRestClient, BitfinexRestClientBuilder};
pub use endpoints::*;
