//! Fault types
//!
//! These describe failures of the validator's collaborators, not rule
//! violations. Rule violations are returned as `ValidationError` values.

use thiserror::Error;

/// Failure while reading from a UTXO source
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("UTXO pool lock poisoned")]
    Poisoned,

    #[error("UTXO storage error: {0}")]
    Storage(String),
}

/// Failure that prevents a transaction from being validated at all
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error(transparent)]
    Lookup(#[from] PoolError),

    #[error("failed to encode signing payload: {0}")]
    Payload(#[from] serde_json::Error),
}
