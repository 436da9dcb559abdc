//! Signature Module
//!
//! This module provides the signature check consumed by the validator and
//! the matching signing helper for transaction creators.

mod verifier;

pub use verifier::{EcdsaVerifier, SignatureVerifier, sign_payload};
