//! Common types used across the Bitfinex client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
