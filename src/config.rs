//! Configuration Module
//!
//! This module defines all configuration structures for the validator service.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::{Utxo, validation::PayloadVersion};
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Loaded from a TOML file (e.g., config/default.toml). Only `[api]` is
/// required; the other sections fall back to their defaults.
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "127.0.0.1"
/// port = 8545
///
/// [validation]
/// payload_version = "v1"
///
/// [[pool.utxos]]
/// amount = 50
/// owner = "0x1111111111111111111111111111111111111111"
/// utxoId = { txId = "genesis", outputIndex = 0 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub pool: PoolConfig,
}

/// JSON-RPC endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Validator settings
///
/// `payload_version` must match the encoding signers used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub payload_version: PayloadVersion,
}

/// Outputs the in-memory pool starts with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoolConfig {
    #[serde(default)]
    pub utxos: Vec<Utxo>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
