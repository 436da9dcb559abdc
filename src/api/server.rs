//! API Server Module
//!
//! This module implements a JSON-RPC server in front of the validator.
//! It accepts transactions, runs them through validation and returns the
//! full list of violations. It never spends or creates UTXOs.

use crate::{
    Transaction, UtxoId, ValidationResult,
    config::Config,
    pool::UtxoPool,
    validation::Validator,
};
use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Standard JSON-RPC error codes
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

/// Shared application state that is accessible across all request handlers
#[derive(Clone)]
pub struct AppState {
    validator: Arc<Validator<UtxoPool>>,
    pool: UtxoPool,
}

/// The main API server struct
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server validating against `pool`
    pub fn new(config: Config, pool: UtxoPool) -> Self {
        let validator = Validator::new(pool.clone())
            .with_payload_version(config.validation.payload_version);

        let state = AppState {
            validator: Arc::new(validator),
            pool,
        };

        Self { config, state }
    }

    /// Router with the single JSON-RPC endpoint at "/"
    pub fn router(self) -> Router {
        Router::new()
            .route("/", post(handle_rpc))
            .with_state(self.state)
    }

    /// Binds to the configured address and serves requests until shutdown
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        let app = self.router();
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` is populated, never both. `result` keeps its
/// concrete type so it is written straight to the response body; amount
/// totals are `i128` and do not always fit a `serde_json::Value` number.
#[derive(Debug, Serialize)]
struct JsonRpcResponse<T> {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

/// Returned by `validateTransaction`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    tx_id: String,
    result: ValidationResult,
    checked_at: u64,
}

fn success<T: Serialize>(id: Value, result: T) -> Response {
    Json(JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        result: Some(result),
        error: None,
        id,
    })
    .into_response()
}

fn failure(id: Value, code: i32, message: String) -> Response {
    Json(JsonRpcResponse::<()> {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(JsonRpcError { code, message }),
        id,
    })
    .into_response()
}

/// Main RPC request handler, dispatching on the method name
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    info!("Received RPC request: {}", request.method);

    match request.method.as_str() {
        "validateTransaction" => handle_validate_transaction(state, request),
        "getUtxo" => handle_get_utxo(state, request),
        "signingPayload" => handle_signing_payload(state, request),
        _ => failure(request.id, METHOD_NOT_FOUND, "Method not found".to_string()),
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(request: &JsonRpcRequest) -> Result<T, Response> {
    serde_json::from_value(request.params.clone()).map_err(|e| {
        warn!("Invalid params for {}: {}", request.method, e);
        failure(
            request.id.clone(),
            INVALID_PARAMS,
            format!("Invalid params: {}", e),
        )
    })
}

/// Handles "validateTransaction": params are a full signed transaction
fn handle_validate_transaction(state: AppState, request: JsonRpcRequest) -> Response {
    let tx: Transaction = match parse_params(&request) {
        Ok(tx) => tx,
        Err(response) => return response,
    };

    match state.validator.validate_transaction(&tx) {
        Ok(result) => {
            if result.valid {
                info!("Transaction {} is admissible", tx.id);
            } else {
                let kinds: Vec<&str> = result.errors.iter().map(|e| e.kind.as_str()).collect();
                warn!("Transaction {} rejected: {:?}", tx.id, kinds);
            }

            let report = ValidationReport {
                tx_id: tx.id,
                result,
                checked_at: chrono::Utc::now().timestamp() as u64,
            };
            success(request.id, report)
        }
        Err(fault) => {
            error!("Validation of transaction {} failed: {}", tx.id, fault);
            failure(request.id, INTERNAL_ERROR, fault.to_string())
        }
    }
}

/// Handles "getUtxo": params are a UtxoId, result is the record or null
fn handle_get_utxo(state: AppState, request: JsonRpcRequest) -> Response {
    let utxo_id: UtxoId = match parse_params(&request) {
        Ok(utxo_id) => utxo_id,
        Err(response) => return response,
    };

    match state.pool.get(&utxo_id) {
        Ok(utxo) => success(request.id, utxo),
        Err(fault) => {
            error!("UTXO lookup for {} failed: {}", utxo_id, fault);
            failure(request.id, INTERNAL_ERROR, fault.to_string())
        }
    }
}

/// Handles "signingPayload": returns the bytes each input must sign
fn handle_signing_payload(state: AppState, request: JsonRpcRequest) -> Response {
    let tx: Transaction = match parse_params(&request) {
        Ok(tx) => tx,
        Err(response) => return response,
    };

    let encoded = state
        .validator
        .payload_version()
        .encode(&tx)
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

    match encoded {
        Ok(payload) => success(request.id, payload),
        Err(message) => failure(request.id, INTERNAL_ERROR, message),
    }
}
