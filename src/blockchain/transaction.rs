//! Transaction building, signing, and broadcast.
//!
//! The faucet signs exactly one transaction shape: a native transfer of a
//! fixed amount with the standard 21k gas limit, priced with the node's
//! current gas price (legacy, not EIP-1559) and the configured chain ID.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;

/// Gas for a native transfer.
pub const TRANSFER_GAS: u64 = 21_000;

/// Signs and broadcasts faucet transfers.
pub struct TxSender {
    client: BlockchainClient,
    wallet: Wallet,
}

impl TxSender {
    /// Create a new transaction sender.
    pub fn new(client: BlockchainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build, sign, and broadcast a transfer of `value` wei to `to`.
    ///
    /// The nonce is read from the chain for every transfer; concurrent
    /// dispensations may collide on it and are left to the node's mempool
    /// handling.
    pub async fn send_transfer(
        &self,
        to: Address,
        value: U256,
        gas_price: u128,
    ) -> BlockchainResult<TxHash> {
        let nonce = self
            .client
            .get_transaction_count(self.wallet.address())
            .await?;

        let tx = transfer_request(
            self.wallet.address(),
            to,
            value,
            gas_price,
            nonce,
            self.wallet.chain_id(),
        );

        let envelope = tx
            .build(&self.wallet.network_wallet())
            .await
            .map_err(|e| BlockchainError::Signing(e.to_string()))?;

        let tx_hash = self
            .client
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;

        tracing::info!(
            tx_hash = %tx_hash,
            to = %to,
            value_wei = %value,
            nonce = nonce,
            "Transfer broadcast"
        );

        Ok(tx_hash)
    }

    /// Get the faucet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}

/// Build the fixed-shape transfer request.
fn transfer_request(
    from: Address,
    to: Address,
    value: U256,
    gas_price: u128,
    nonce: u64,
    chain_id: u64,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(value)
        .with_nonce(nonce)
        .with_gas_price(gas_price)
        .with_chain_id(chain_id)
        .with_gas_limit(TRANSFER_GAS)
}
