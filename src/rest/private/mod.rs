//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::BitfinexError;
use crate::rest::BitfinexRestClient;
use crate::rest::endpoints::private;

impl BitfinexRestClient {
    /// Perform a signed POST request against an arbitrary private endpoint.
    ///
    /// This is the generic primitive behind the typed private methods; use it
    /// for endpoints that have no typed wrapper yet. An empty body serializes
    /// to `{}` and the transmitted bytes are exactly the serialization that
    /// was signed.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitfinex_api_client::rest::BitfinexRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitfinexRestClient::builder()
    ///         .api_key("api_key")
    ///         .api_secret("api_secret")
    ///         .build();
    ///
    ///     let response: serde_json::Value = client
    ///         .auth_request("/auth/r/alerts", &serde_json::json!({"type": "price"}))
    ///         .await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn auth_request<T, P>(&self, path: &str, body: &P) -> Result<T, BitfinexError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        self.private_post(path, body).await
    }

    /// Get the account's wallets.
    pub async fn get_wallets(&self) -> Result<Vec<Wallet>, BitfinexError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::WALLETS, &Empty {}).await
    }
}
