//! Authentication module for the Bitfinex API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA384 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::Credentials;
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::{AuthSignature, sign_handshake, sign_request};
