use ethers::types::{Address, Signature};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to one output of a prior transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoId {
    pub tx_id: String,
    pub output_index: u32,
}

impl UtxoId {
    pub fn new(tx_id: impl Into<String>, output_index: u32) -> Self {
        Self {
            tx_id: tx_id.into(),
            output_index,
        }
    }
}

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_id, self.output_index)
    }
}

/// Unspent output record held by the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    pub utxo_id: UtxoId,
    pub amount: u64,
    pub owner: Address,
}

/// Input spending a UTXO, signed by its claimed owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub utxo_id: UtxoId,
    pub owner: Address,
    pub signature: Signature,
}

/// Output creating a new UTXO for `owner`
///
/// The amount is signed so that malformed submissions can be represented
/// and reported instead of being rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub amount: i64,
    pub owner: Address,
}

/// Transaction submitted for validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub timestamp: u64,
}

/// Rule violated by a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    UtxoNotFound,
    InvalidSignature,
    DoubleSpending,
    NegativeAmount,
    AmountMismatch,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::UtxoNotFound => "UTXO_NOT_FOUND",
            ValidationErrorKind::InvalidSignature => "INVALID_SIGNATURE",
            ValidationErrorKind::DoubleSpending => "DOUBLE_SPENDING",
            ValidationErrorKind::NegativeAmount => "NEGATIVE_AMOUNT",
            ValidationErrorKind::AmountMismatch => "AMOUNT_MISMATCH",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a violation points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorContext {
    UtxoId(UtxoId),
    Output(TransactionOutput),
    #[serde(rename_all = "camelCase")]
    Amounts { total_input: i128, total_output: i128 },
}

/// A single rule violation found while validating a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ValidationError {
    pub fn utxo_not_found(utxo_id: &UtxoId) -> Self {
        Self {
            kind: ValidationErrorKind::UtxoNotFound,
            message: format!("UTXO not found: {}", utxo_id),
            context: ErrorContext::UtxoId(utxo_id.clone()),
        }
    }

    pub fn invalid_signature(utxo_id: &UtxoId) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidSignature,
            message: format!("Invalid signature for input: {}", utxo_id),
            context: ErrorContext::UtxoId(utxo_id.clone()),
        }
    }

    pub fn double_spending(utxo_id: &UtxoId) -> Self {
        Self {
            kind: ValidationErrorKind::DoubleSpending,
            message: format!("UTXO referenced multiple times in transaction: {}", utxo_id),
            context: ErrorContext::UtxoId(utxo_id.clone()),
        }
    }

    pub fn negative_amount(output: &TransactionOutput) -> Self {
        Self {
            kind: ValidationErrorKind::NegativeAmount,
            message: format!("Output amount is not positive: {}", output.amount),
            context: ErrorContext::Output(output.clone()),
        }
    }

    pub fn amount_mismatch(total_input: i128, total_output: i128) -> Self {
        Self {
            kind: ValidationErrorKind::AmountMismatch,
            message: format!(
                "Input amount ({}) does not match output amount ({})",
                total_input, total_output
            ),
            context: ErrorContext::Amounts {
                total_input,
                total_output,
            },
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Outcome of validating one transaction
///
/// `valid` is true iff `errors` is empty; errors keep the order in which
/// the checks found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn count_of(&self, kind: ValidationErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }

    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}
