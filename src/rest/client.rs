//! Bitfinex REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::ExposeSecret;

use crate::auth::{Credentials, IncreasingNonce, NonceProvider, sign_request};
use crate::error::{ApiError, BitfinexError};
use crate::rest::endpoints::{BITFINEX_BASE_URL, DEFAULT_TIMEOUT_MS};

/// The Bitfinex REST API client.
///
/// This client provides access to the Bitfinex v2 public market-data
/// endpoints and authenticated (signed) private endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use bitfinex_api_client::rest::BitfinexRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BitfinexRestClient::new();
///
///     let status = client.get_platform_status().await?;
///     println!("Platform status: {}", status);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
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
///     let wallets = client.get_wallets().await?;
///     println!("Wallets: {:?}", wallets);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitfinexRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Credentials>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitfinexRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitfinexRestClient::builder()`] to configure credentials for
    /// private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitfinexRestClientBuilder {
        BitfinexRestClientBuilder::new()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, BitfinexError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/v2{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BitfinexError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitfinexError::InvalidResponse(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}/v2{}", self.base_url, endpoint)
        } else {
            format!("{}/v2{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request.
    ///
    /// Fails with [`BitfinexError::MissingCredentials`] before any network
    /// activity when the client has neither a key pair nor a token. With a
    /// token configured, signing is skipped entirely.
    pub(crate) async fn private_post<T, P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<T, BitfinexError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BitfinexError::MissingCredentials)?;

        // The transmitted body must be byte-identical to the serialization
        // embedded in the signed payload, so serialize exactly once.
        let body_json = serde_json::to_string(params)?;
        let nonce = self.nonce_provider.next_nonce();

        let url = format!("{}/v2{}", self.base_url, endpoint);
        let request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("bfx-nonce", nonce.to_string());

        let request = match credentials {
            Credentials::Token(token) => request.header("bfx-token", token.expose_secret()),
            Credentials::KeyPair {
                api_key,
                api_secret,
            } => {
                let signature =
                    sign_request(api_secret.expose_secret(), endpoint, nonce, &body_json)?;
                request
                    .header("bfx-apikey", api_key)
                    .header("bfx-signature", signature.sig)
            }
        };

        let response = request.body(body_json).send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Bitfinex API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BitfinexError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Bitfinex reports API errors as ["error", CODE, "MESSAGE"].
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                if let Some(api_error) = ApiError::from_error_array(&value) {
                    tracing::debug!("Bitfinex API error: {}", api_error);
                    return Err(BitfinexError::Api(api_error));
                }
            }
            return Err(BitfinexError::Transport {
                status: status.as_u16(),
                text: status
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            BitfinexError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e, body
            ))
        })
    }
}

impl Default for BitfinexRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitfinexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BitfinexRestClient`].
///
/// Every option is copied into the built client; builders and clients never
/// share configuration by reference.
pub struct BitfinexRestClientBuilder {
    base_url: String,
    api_key: String,
    api_secret: String,
    auth_token: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    proxy: Option<reqwest::Proxy>,
    user_agent: Option<String>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
}

impl BitfinexRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITFINEX_BASE_URL.to_string(),
            api_key: String::new(),
            api_secret: String::new(),
            auth_token: String::new(),
            credentials: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            proxy: None,
            user_agent: None,
            nonce_provider: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for key-pair signing.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the API secret for key-pair signing.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = api_secret.into();
        self
    }

    /// Set a session token.
    ///
    /// A token takes precedence over a key pair: with both configured, the
    /// client sends `bfx-token` and never computes a signature.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = token.into();
        self
    }

    /// Set credentials directly, overriding the key/secret/token fields.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout (default 15 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Route requests through a proxy.
    ///
    /// The proxy handle is passed through to the transport unmodified.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Defaults to the process-wide shared provider, so multiple clients
    /// never emit a retrograde nonce relative to each other.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> BitfinexRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitfinex-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitfinex-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let mut client_builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);
        if let Some(proxy) = self.proxy {
            client_builder = client_builder.proxy(proxy);
        }
        let reqwest_client = client_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let credentials = self.credentials.or_else(|| {
            Credentials::from_parts(&self.api_key, &self.api_secret, &self.auth_token)
        });

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| IncreasingNonce::shared());

        BitfinexRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials,
            nonce_provider,
        }
    }
}

impl Default for BitfinexRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_token_precedence() {
        let client = BitfinexRestClient::builder()
            .api_key("key")
            .api_secret("secret")
            .auth_token("tok")
            .build();
        assert!(matches!(client.credentials, Some(Credentials::Token(_))));
    }

    #[test]
    fn test_builder_incomplete_key_pair_is_unauthenticated() {
        let client = BitfinexRestClient::builder().api_key("key").build();
        assert!(client.credentials.is_none());
    }

    #[test]
    fn test_builder_explicit_credentials_override_fields() {
        let client = BitfinexRestClient::builder()
            .auth_token("tok")
            .credentials(Credentials::key_pair("key", "secret"))
            .build();
        assert!(matches!(
            client.credentials,
            Some(Credentials::KeyPair { .. })
        ));
    }
}
