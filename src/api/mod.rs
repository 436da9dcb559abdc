//! API Module
//!
//! This module exposes the validator over JSON-RPC so that clients outside
//! the process can check transactions before submitting them elsewhere.

mod server;
pub use server::Server;
