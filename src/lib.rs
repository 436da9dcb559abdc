//! This crate validates proposed UTXO transactions before they are admitted
//! into a ledger. It checks every input against a pool of unspent outputs and
//! a signature verifier, every output for a positive amount, and the balance
//! between the two, reporting all violations found rather than the first.

pub mod types; // Transactions, UTXOs and validation results.
pub mod error; // Collaborator faults, as opposed to rule violations.
pub mod crypto; // Signature verification and payload signing.
pub mod pool; // UTXO lookup capability and the in-memory pool.
pub mod validation; // The transaction validator and the signing payload.
pub mod api; // JSON-RPC wrapper around the validator.
pub mod config; // Defines and loads service configuration.

// Re-export commonly used types for easier access.
pub use types::*;
pub use error::{PoolError, ValidatorError};
pub use config::Config;
pub use validation::Validator;
