//! Credential management for Bitfinex API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Credentials for authenticated endpoints.
///
/// A client holds at most one of these: a key pair for HMAC signing or a
/// session token that replaces signing entirely.
#[derive(Clone)]
pub enum Credentials {
    /// API key and secret used for HMAC-SHA384 request signing.
    KeyPair {
        /// The API key (public identifier).
        api_key: String,
        /// The API secret (private, used for signing).
        api_secret: SecretString,
    },
    /// Session token sent in place of a signature.
    Token(SecretString),
}

impl Credentials {
    /// Create key-pair credentials from an API key and secret.
    pub fn key_pair(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::KeyPair {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create token credentials from a session token.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(SecretString::from(token.into()))
    }

    /// Select credentials from the raw configuration fields.
    ///
    /// A non-empty token takes precedence over a key pair. An incomplete key
    /// pair (either half empty) counts as absent, so a client configured this
    /// way fails before it can send an unsigned private request.
    pub fn from_parts(api_key: &str, api_secret: &str, token: &str) -> Option<Self> {
        if !token.is_empty() {
            return Some(Self::token(token));
        }
        if !api_key.is_empty() && !api_secret.is_empty() {
            return Some(Self::key_pair(api_key, api_secret));
        }
        None
    }

    /// Read key-pair credentials from `BFX_API_KEY` and `BFX_API_SECRET`.
    ///
    /// Returns `None` if either variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("BFX_API_KEY").ok()?;
        let api_secret = std::env::var("BFX_API_SECRET").ok()?;
        Self::from_parts(&api_key, &api_secret, "")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyPair { api_key, .. } => f
                .debug_struct("KeyPair")
                .field("api_key", api_key)
                .field("api_secret", &"[REDACTED]")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
        }
    }
}

impl Credentials {
    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully. Returns `None` for
    /// token credentials, which are never signed with.
    pub fn signing_secret(&self) -> Option<&str> {
        match self {
            Self::KeyPair { api_secret, .. } => Some(api_secret.expose_secret()),
            Self::Token(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::key_pair("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));

        let token = Credentials::token("session_token");
        let debug_str = format!("{:?}", token);
        assert!(!debug_str.contains("session_token"));
    }

    #[test]
    fn test_token_takes_precedence() {
        let creds = Credentials::from_parts("key", "secret", "tok").unwrap();
        assert!(matches!(creds, Credentials::Token(_)));
    }

    #[test]
    fn test_incomplete_key_pair_is_absent() {
        assert!(Credentials::from_parts("key", "", "").is_none());
        assert!(Credentials::from_parts("", "secret", "").is_none());
        assert!(Credentials::from_parts("", "", "").is_none());
    }

    #[test]
    fn test_key_pair_selected_without_token() {
        let creds = Credentials::from_parts("key", "secret", "").unwrap();
        assert_eq!(creds.signing_secret(), Some("secret"));
    }
}
