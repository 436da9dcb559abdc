use super::PayloadVersion;
use crate::{
    Transaction, TransactionInput, TransactionOutput, UtxoId, ValidationError, ValidationResult,
    ValidatorError,
    crypto::{EcdsaVerifier, SignatureVerifier},
    pool::UtxoLookup,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Checks a transaction against the current UTXO view
///
/// Holds no state of its own between calls; everything it reads goes
/// through the injected `UtxoLookup` and `SignatureVerifier`.
pub struct Validator<L, V = EcdsaVerifier> {
    lookup: L,
    verifier: V,
    payload_version: PayloadVersion,
}

impl<L: UtxoLookup> Validator<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_verifier(lookup, EcdsaVerifier)
    }
}

impl<L: UtxoLookup, V: SignatureVerifier> Validator<L, V> {
    pub fn with_verifier(lookup: L, verifier: V) -> Self {
        Self {
            lookup,
            verifier,
            payload_version: PayloadVersion::default(),
        }
    }

    pub fn with_payload_version(mut self, version: PayloadVersion) -> Self {
        self.payload_version = version;
        self
    }

    pub fn payload_version(&self) -> PayloadVersion {
        self.payload_version
    }

    /// Validate a transaction, collecting every violated rule
    ///
    /// Rule violations never produce `Err`; they are listed in the returned
    /// result in the order they were found. `Err` means a collaborator
    /// failed and the transaction could not be judged.
    pub fn validate_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<ValidationResult, ValidatorError> {
        debug!(
            "Validating transaction {} ({} inputs, {} outputs)",
            tx.id,
            tx.inputs.len(),
            tx.outputs.len()
        );

        // Signatures never cover themselves, so one payload serves every input.
        let payload = self.payload_version.encode(tx)?;

        let mut errors = Vec::new();
        let mut seen: HashSet<&UtxoId> = HashSet::new();
        let mut total_input: i128 = 0;
        let mut total_output: i128 = 0;

        for input in &tx.inputs {
            total_input += self.check_input(input, &payload, &mut seen, &mut errors)?;
        }

        for output in &tx.outputs {
            total_output += i128::from(output.amount);
            self.check_output(output, &mut errors);
        }

        if total_input != total_output {
            warn!(
                "Transaction {}: input amount {} does not match output amount {}",
                tx.id, total_input, total_output
            );
            errors.push(ValidationError::amount_mismatch(total_input, total_output));
        }

        let result = ValidationResult::from_errors(errors);
        if result.valid {
            debug!("Transaction {} validation successful", tx.id);
        } else {
            debug!(
                "Transaction {} rejected with {} error(s)",
                tx.id,
                result.errors.len()
            );
        }
        Ok(result)
    }

    /// Run the per-input checks and return the amount the input contributes
    ///
    /// Missing UTXOs contribute 0.
    fn check_input<'t>(
        &self,
        input: &'t TransactionInput,
        payload: &[u8],
        seen: &mut HashSet<&'t UtxoId>,
        errors: &mut Vec<ValidationError>,
    ) -> Result<i128, ValidatorError> {
        let utxo_id = &input.utxo_id;

        let amount = match self.lookup.get_utxo(utxo_id)? {
            Some(utxo) => i128::from(utxo.amount),
            None => {
                warn!("UTXO not found: {}", utxo_id);
                errors.push(ValidationError::utxo_not_found(utxo_id));
                0
            }
        };

        if !self.verifier.verify(payload, &input.signature, &input.owner) {
            warn!("Signature verification failed for input {}", utxo_id);
            errors.push(ValidationError::invalid_signature(utxo_id));
        }

        if !seen.insert(utxo_id) {
            warn!("UTXO {} referenced more than once", utxo_id);
            errors.push(ValidationError::double_spending(utxo_id));
        }

        Ok(amount)
    }

    /// Zero counts as non-positive.
    fn check_output(&self, output: &TransactionOutput, errors: &mut Vec<ValidationError>) {
        if output.amount <= 0 {
            warn!("Output to {:?} has non-positive amount {}", output.owner, output.amount);
            errors.push(ValidationError::negative_amount(output));
        }
    }
}
