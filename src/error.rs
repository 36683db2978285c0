//! Pipeline error types

use thiserror::Error;

/// Error type for the mint pipeline
#[derive(Error, Debug)]
pub enum MintError {
    /// Signer secret could not be decoded into a keypair
    #[error("Invalid signer secret: {0}")]
    InvalidSecret(String),

    /// Metadata upload to the storage gateway failed
    #[error("Metadata upload failed: {0}")]
    Upload(String),

    /// Read-side RPC failure (rent query, blockhash, balance)
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transport failure while submitting the transaction
    #[error("Submission error: {0}")]
    Submission(String),

    /// The ledger rejected the transaction during validation
    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    /// The blockhash validity window elapsed before confirmation
    #[error("Transaction expired: not confirmed before block height {last_valid_block_height}")]
    Expired { last_valid_block_height: u64 },

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Serialization error
    #[error("Failed to serialize data: {0}")]
    Serialization(String),
}

impl From<solana_client::client_error::ClientError> for MintError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        MintError::Rpc(err.to_string())
    }
}

impl From<serde_json::Error> for MintError {
    fn from(err: serde_json::Error) -> Self {
        MintError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for MintError {
    fn from(err: reqwest::Error) -> Self {
        MintError::Upload(err.to_string())
    }
}

pub type MintResult<T> = Result<T, MintError>;
