use tracing::info;
use utxo_validator::{api::Server, config::Config, pool::UtxoPool};

/// The main entry point for the validator service.
///
/// Initializes logging, loads the configuration, seeds the in-memory UTXO
/// pool and serves the JSON-RPC API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());
    let config = Config::load(&path)?;
    info!("Validator starting with config from {}: {:?}", path, config.api);

    let pool = UtxoPool::from_utxos(config.pool.utxos.clone());
    info!("UTXO pool seeded with {} outputs", pool.len()?);

    let server = Server::new(config, pool);
    server.start().await?;

    Ok(())
}
