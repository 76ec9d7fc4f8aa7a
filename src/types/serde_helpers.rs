//! Custom serde helpers for Bitfinex's query-string formats.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a `Vec<T>` as a comma-separated string.
///
/// Bitfinex list parameters (e.g. the `symbols` query on `/tickers`) are
/// comma-joined in the order given.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use bitfinex_api_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Request {
///     #[serde(with = "comma_separated")]
///     symbols: Vec<String>,
/// }
///
/// let request = Request {
///     symbols: vec!["tBTCUSD".to_string(), "fUSD".to_string()],
/// };
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"symbols":"tBTCUSD,fUSD"}"#);
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a Vec as a comma-separated string.
    pub fn serialize<T, S>(list: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        let s = list
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&s)
    }

    /// Deserialize a comma-separated string into a Vec.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Vec::new());
        }
        s.split(',')
            .map(|part| part.trim().parse().map_err(de::Error::custom))
            .collect()
    }
}

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// Useful for placeholder slots in positional payloads whose content is
/// undocumented and occasionally changes type.
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(T::deserialize(deserializer).ok())
    }
}
