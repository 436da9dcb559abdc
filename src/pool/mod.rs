//! UTXO Pool Module
//!
//! This module defines the read capability the validator consumes and an
//! in-memory pool implementing it. The validator only ever reads through
//! `UtxoLookup`; spending and creating outputs is left to the pool owner.

mod utxo_pool;

pub use utxo_pool::UtxoPool;

use crate::{PoolError, Utxo, UtxoId};

/// Read access to the current set of unspent outputs
///
/// `Ok(None)` means the output does not exist (or was already spent).
/// `Err` is reserved for the source itself failing.
pub trait UtxoLookup {
    fn get_utxo(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError>;
}

impl<T: UtxoLookup + ?Sized> UtxoLookup for &T {
    fn get_utxo(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError> {
        (**self).get_utxo(utxo_id)
    }
}

impl<T: UtxoLookup + ?Sized> UtxoLookup for std::sync::Arc<T> {
    fn get_utxo(&self, utxo_id: &UtxoId) -> Result<Option<Utxo>, PoolError> {
        (**self).get_utxo(utxo_id)
    }
}
