//! Transaction Validation Module
//!
//! This module validates transactions against the UTXO pool before they are
//! admitted. Performs existence, signature, double-spend, output amount and
//! balance checks, reporting every violation instead of stopping at the first.

mod payload;
mod validator;

pub use payload::{PayloadVersion, signing_payload};
pub use validator::Validator;
