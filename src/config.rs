//! Typed configuration for the mint pipeline

use crate::error::{MintError, MintResult};
use solana_sdk::commitment_config::CommitmentConfig;
use std::env;

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEVNET_STORAGE_URL: &str = "https://devnet.bundlr.network";

/// Connection configuration for the mint pipeline
///
/// The signer secret is held here as an opaque string and is only ever
/// consumed by the wallet loader; `Debug` is deliberately not derived.
#[derive(Clone)]
pub struct Config {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Metadata storage gateway URL
    pub storage_url: String,

    /// Transaction commitment level
    pub commitment: CommitmentConfig,

    /// Base58-encoded signer secret
    pub secret: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// `PRIVATE_KEY` is required; `RPC_URL` and `STORAGE_URL` fall back to
    /// devnet defaults.
    pub fn from_env() -> MintResult<Self> {
        let secret = env::var("PRIVATE_KEY").map_err(|_| {
            MintError::InvalidSecret("PRIVATE_KEY environment variable is not set".to_string())
        })?;

        Ok(Self {
            rpc_url: env::var("RPC_URL").unwrap_or_else(|_| DEVNET_RPC_URL.to_string()),
            storage_url: env::var("STORAGE_URL")
                .unwrap_or_else(|_| DEVNET_STORAGE_URL.to_string()),
            commitment: CommitmentConfig::confirmed(),
            secret,
        })
    }

    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = url;
        self
    }

    pub fn with_storage_url(mut self, url: String) -> Self {
        self.storage_url = url;
        self
    }
}

/// Immutable mint parameters, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintConfig {
    /// Decimal precision of the new mint
    pub decimals: u8,

    /// Total supply in whole tokens
    pub supply: u64,
}

impl MintConfig {
    /// Total supply scaled to base units (`supply * 10^decimals`)
    pub fn base_units(&self) -> MintResult<u64> {
        let scale = 10u64.checked_pow(self.decimals as u32).ok_or_else(|| {
            MintError::InvalidParameters(format!("decimals {} overflows u64 scaling", self.decimals))
        })?;
        self.supply.checked_mul(scale).ok_or_else(|| {
            MintError::InvalidParameters(format!(
                "supply {} with {} decimals overflows u64",
                self.supply, self.decimals
            ))
        })
    }
}
