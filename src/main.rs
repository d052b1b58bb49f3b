//! Faucet service entry point.
//!
//! Startup order: config → wallet (from env) → chain client → cooldown
//! store → HTTP listener. The signing key is read from
//! `FAUCET_PRIVATE_KEY` and never appears in the config file or logs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use sepolia_faucet::blockchain::{BlockchainClient, TxSender, Wallet};
use sepolia_faucet::config::loader::load_config;
use sepolia_faucet::faucet::Faucet;
use sepolia_faucet::http::HttpServer;
use sepolia_faucet::lifecycle::Shutdown;
use sepolia_faucet::observability::{logging, metrics};
use sepolia_faucet::ratelimit;

#[derive(Debug, Parser)]
#[command(name = "sepolia-faucet", about = "Sepolia testnet ETH faucet")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        chain_id = config.blockchain.chain_id,
        amount_wei = config.faucet.amount_wei,
        cooldown_hours = config.faucet.cooldown_hours,
        "sepolia-faucet v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let wallet = Wallet::from_env(config.blockchain.chain_id)?;
    let client = BlockchainClient::new(config.blockchain.clone()).await?;
    let sender = TxSender::new(client.clone(), wallet);
    let store = ratelimit::connect(&config.store).await?;

    let faucet = Arc::new(Faucet::new(
        client,
        sender,
        store,
        config.faucet.clone(),
    ));

    tracing::info!(faucet_address = %faucet.address(), "Faucet account ready");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, faucet);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
