//! RPC client wrapper and submission pipeline

use crate::config::Config;
use crate::error::{MintError, MintResult};
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    program_pack::Pack,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use spl_token::state::Mint;
use std::sync::Arc;
use std::time::Duration;

/// Interval between confirmation polls
const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Client for the mint pipeline
///
/// Holds the one RPC connection reused for every call and the payer
/// keypair that funds and signs the mint transaction.
pub struct MintClient {
    /// RPC connection handle
    pub rpc: RpcClient,

    /// Payer keypair for transactions
    pub payer: Arc<Keypair>,
}

impl MintClient {
    /// Create a new client instance
    pub fn new(config: &Config, payer: Keypair) -> Self {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
        Self {
            rpc,
            payer: Arc::new(payer),
        }
    }

    /// Current lamport balance of the payer
    pub async fn payer_balance(&self) -> MintResult<u64> {
        Ok(self.rpc.get_balance(&self.payer.pubkey()).await?)
    }

    /// Minimum lamport balance for a rent-exempt mint account.
    ///
    /// Queried per run; the amount tracks current ledger parameters and
    /// must never be hard-coded.
    pub async fn rent_exempt_mint_balance(&self) -> MintResult<u64> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(Mint::LEN)
            .await?)
    }

    /// Sign and submit the transaction, then wait for confirmation.
    ///
    /// Fetches a finalized blockhash immediately before signing so the
    /// validity window starts now. The mint keypair co-signs because it is
    /// creating and initializing its own account. Polls the signature
    /// status until the transaction confirms, fails on-chain, or its
    /// blockhash expires; no automatic retry — a resilient caller
    /// re-fetches a blockhash and resubmits.
    pub async fn submit(&self, mut tx: Transaction, mint: &Keypair) -> MintResult<Signature> {
        let (blockhash, last_valid_block_height) = self
            .rpc
            .get_latest_blockhash_with_commitment(CommitmentConfig::finalized())
            .await?;

        tx.try_sign(&[self.payer.as_ref(), mint], blockhash)
            .map_err(|e| MintError::Submission(format!("signing failed: {}", e)))?;

        let signature = self
            .rpc
            .send_transaction(&tx)
            .await
            .map_err(classify_client_error)?;

        loop {
            // A landed transaction carries a status even when it failed;
            // only a missing status means still pending.
            match self
                .rpc
                .get_signature_status_with_commitment(&signature, self.rpc.commitment())
                .await?
            {
                Some(Ok(())) => return Ok(signature),
                Some(Err(tx_err)) => {
                    return Err(MintError::TransactionRejected(tx_err.to_string()))
                }
                None => {}
            }

            let block_height = self.rpc.get_block_height().await?;
            if block_height > last_valid_block_height {
                return Err(MintError::Expired {
                    last_valid_block_height,
                });
            }

            tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await;
        }
    }
}

/// Split ledger-level rejection from transport failure
fn classify_client_error(err: ClientError) -> MintError {
    match err.get_transaction_error() {
        Some(tx_err) => MintError::TransactionRejected(tx_err.to_string()),
        None => MintError::Submission(err.to_string()),
    }
}
