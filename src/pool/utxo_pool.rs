//! In-memory UTXO Pool
//!
//! Stores unspent outputs keyed by their `UtxoId`.

use super::UtxoLookup;
use crate::{PoolError, Utxo, UtxoId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared in-memory set of unspent outputs
///
/// Cloning the pool clones the handle, not the contents, so the API server
/// and the validator observe the same outputs. Protected by RwLock so that
/// concurrent validations only take read locks.
#[derive(Clone, Default)]
pub struct UtxoPool {
    utxos: Arc<RwLock<HashMap<UtxoId, Utxo>>>,
}

impl UtxoPool {
    /// Creates an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool seeded with `utxos`
    ///
    /// Later records replace earlier ones with the same `UtxoId`.
    pub fn from_utxos(utxos: impl IntoIterator<Item = Utxo>) -> Self {
        let utxos = utxos
            .into_iter()
            .map(|utxo| (utxo.utxo_id.clone(), utxo))
            .collect();

        Self {
            utxos: Arc::new(RwLock::new(utxos)),
        }
    }

    /// Add an unspent output, returning the record it replaced
    pub fn insert(&self, utxo: Utxo) -> Result<Option<Utxo>, PoolError> {
        let mut utxos = self.utxos.write().map_err(|_| PoolError::Poisoned)?;
        Ok(utxos.insert(utxo.utxo_id.clone(), utxo))
    }

    /// Spend an output by removing it from the pool
    pub fn remove(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError> {
        let mut utxos = self.utxos.write().map_err(|_| PoolError::Poisoned)?;
        Ok(utxos.remove(utxo_id))
    }

    pub fn get(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError> {
        let utxos = self.utxos.read().map_err(|_| PoolError::Poisoned)?;
        Ok(utxos.get(utxo_id).cloned())
    }

    pub fn contains(&self, utxo_id: &UtxoId) -> Result<bool, PoolError> {
        let utxos = self.utxos.read().map_err(|_| PoolError::Poisoned)?;
        Ok(utxos.contains_key(utxo_id))
    }

    pub fn len(&self) -> Result<usize, PoolError> {
        let utxos = self.utxos.read().map_err(|_| PoolError::Poisoned)?;
        Ok(utxos.len())
    }

    pub fn is_empty(&self) -> Result<bool, PoolError> {
        Ok(self.len()? == 0)
    }
}

impl UtxoLookup for UtxoPool {
    fn get_utxo(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError> {
        self.get(utxo_id)
    }
}
