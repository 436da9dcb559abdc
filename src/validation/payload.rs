//! Canonical signing payload
//!
//! Every input signature covers the same bytes: the transaction with all
//! signatures stripped. Signers and the validator must agree on these bytes
//! exactly, so the encoding is versioned and changes only by adding a new
//! version.

use crate::{Transaction, TransactionOutput, UtxoId};
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Encoding of the unsigned transaction that signatures are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadVersion {
    /// Compact JSON of `{id, inputs: [{utxoId, owner}], outputs, timestamp}`
    /// in that key order
    #[default]
    V1,
}

#[derive(Serialize)]
struct UnsignedTransaction<'a> {
    id: &'a str,
    inputs: Vec<UnsignedInput<'a>>,
    outputs: &'a [TransactionOutput],
    timestamp: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnsignedInput<'a> {
    utxo_id: &'a UtxoId,
    owner: &'a Address,
}

impl PayloadVersion {
    pub fn encode(self, tx: &Transaction) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            PayloadVersion::V1 => {
                let unsigned = UnsignedTransaction {
                    id: &tx.id,
                    inputs: tx
                        .inputs
                        .iter()
                        .map(|input| UnsignedInput {
                            utxo_id: &input.utxo_id,
                            owner: &input.owner,
                        })
                        .collect(),
                    outputs: &tx.outputs,
                    timestamp: tx.timestamp,
                };
                serde_json::to_vec(&unsigned)
            }
        }
    }
}

/// Payload for the current default version
pub fn signing_payload(tx: &Transaction) -> Result<Vec<u8>, serde_json::Error> {
    PayloadVersion::default().encode(tx)
}
