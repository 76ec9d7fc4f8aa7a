//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One account wallet.
/// Format: [wallet_type, currency, balance, unsettled_interest,
/// available_balance, last_change, trade_details]
///
/// The trailing slots are null until the server has computed them.
#[derive(Debug, Clone)]
pub struct Wallet {
    /// Wallet type: "exchange", "margin" or "funding".
    pub wallet_type: String,
    /// Currency code (e.g., "USD", "BTC").
    pub currency: String,
    /// Current balance.
    pub balance: Decimal,
    /// Interest accrued but not yet settled.
    pub unsettled_interest: Decimal,
    /// Balance available for orders, withdrawal or transfer.
    pub available_balance: Option<Decimal>,
    /// Description of the most recent balance change.
    pub last_change: Option<String>,
    /// Details of the trade behind the most recent change.
    pub trade_details: Option<serde_json::Value>,
}

impl<'de> Deserialize<'de> for Wallet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (
            String,
            String,
            Decimal,
            Decimal,
            Option<Decimal>,
            Option<String>,
            Option<serde_json::Value>,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(Wallet {
            wallet_type: arr.0,
            currency: arr.1,
            balance: arr.2,
            unsettled_interest: arr.3,
            available_balance: arr.4,
            last_change: arr.5,
            trade_details: arr.6,
        })
    }
}
