//! Common domain types for the Bitfinex API.

use serde::{Deserialize, Serialize};

use crate::error::BitfinexError;

/// Operational status of the platform.
///
/// Reported by `/v2/platform/status` as a one-element array: `[1]` when
/// operative, `[0]` during maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformStatus {
    /// Platform is in maintenance mode.
    Maintenance,
    /// Platform is operating normally.
    Operative,
}

impl<'de> Deserialize<'de> for PlatformStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (status,): (u8,) = Deserialize::deserialize(deserializer)?;
        match status {
            0 => Ok(PlatformStatus::Maintenance),
            1 => Ok(PlatformStatus::Operative),
            other => Err(serde::de::Error::custom(format!(
                "unknown platform status {other}"
            ))),
        }
    }
}

impl std::fmt::Display for PlatformStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformStatus::Maintenance => write!(f, "maintenance"),
            PlatformStatus::Operative => write!(f, "operative"),
        }
    }
}

/// Instrument class, derived from the symbol prefix.
///
/// Trading pairs are prefixed with `t` (e.g., `tBTCUSD`), funding currencies
/// with `f` (e.g., `fUSD`). The two classes have distinct response layouts
/// for tickers, trades and books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Trading pair (`t` prefix).
    Trading,
    /// Funding currency (`f` prefix).
    Funding,
}

impl SymbolKind {
    /// Classify a symbol by its prefix.
    ///
    /// Fails with [`BitfinexError::UnknownSymbol`] for any other prefix,
    /// before a request is attempted.
    pub fn from_symbol(symbol: &str) -> Result<Self, BitfinexError> {
        match symbol.as_bytes().first() {
            Some(b't') => Ok(SymbolKind::Trading),
            Some(b'f') => Ok(SymbolKind::Funding),
            _ => Err(BitfinexError::UnknownSymbol(symbol.to_string())),
        }
    }
}

/// Order book aggregation level.
///
/// `P0` through `P3` request price-aggregated levels with increasing
/// granularity; `R0` requests the raw per-order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// Aggregated, highest precision.
    P0,
    /// Aggregated.
    P1,
    /// Aggregated.
    P2,
    /// Aggregated, lowest precision.
    P3,
    /// Raw order-level book.
    R0,
}

impl Precision {
    /// Whether this precision selects the raw per-order book shape.
    pub fn is_raw(&self) -> bool {
        matches!(self, Precision::R0)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Precision::P0 => "P0",
            Precision::P1 => "P1",
            Precision::P2 => "P2",
            Precision::P3 => "P3",
            Precision::R0 => "R0",
        };
        write!(f, "{}", s)
    }
}
