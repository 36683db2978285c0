//! SPL token mint pipeline
//!
//! A small client library for minting a new fungible SPL token on Solana:
//! - Wallet loading from a base58-encoded secret
//! - Token metadata upload to a storage gateway
//! - Atomic five-instruction mint transaction assembly
//! - Submission with blockhash-expiry-bounded confirmation
pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod metadata;
pub mod wallet;

pub use client::*;
pub use config::*;
pub use error::*;
pub use instructions::*;
pub use metadata::*;
