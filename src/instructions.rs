//! Mint transaction assembly
//!
//! Builds the single atomic transaction that creates, initializes, and
//! funds a new token mint. Instruction order matters: each step references
//! an account established by the one before it, and the ledger rejects any
//! other ordering.

use crate::config::MintConfig;
use crate::error::{MintError, MintResult};
use mpl_token_metadata::instructions::{
    CreateMetadataAccountV3, CreateMetadataAccountV3InstructionArgs,
};
use mpl_token_metadata::types::DataV2;
use solana_sdk::{
    program_pack::Pack, pubkey::Pubkey, system_instruction, system_program,
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::Mint;

/// Derive the metadata PDA for a mint
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}

/// Inputs for assembling the mint transaction
pub struct MintTransactionParams<'a> {
    /// Fee payer and funder of the new accounts
    pub payer: Pubkey,

    /// Address of the new mint account (its keypair must later co-sign)
    pub mint: Pubkey,

    /// Wallet receiving the minted supply
    pub destination_wallet: Pubkey,

    /// Authority allowed to mint further supply
    pub mint_authority: Pubkey,

    /// Authority allowed to freeze token accounts
    pub freeze_authority: Pubkey,

    /// Rent-exempt balance for a mint-sized account, fetched from the
    /// cluster for this run
    pub rent_exempt_lamports: u64,

    /// Decimals and total supply
    pub mint_config: &'a MintConfig,

    /// On-chain metadata with the storage URI already populated
    pub data: DataV2,

    /// Whether the metadata account stays updatable after creation
    pub is_mutable: bool,
}

/// Assemble the unsigned five-instruction mint transaction.
///
/// Pure assembly: performs no network I/O. The caller supplies the
/// rent-exempt balance and later stamps a fresh blockhash at submission.
pub fn build_mint_transaction(params: MintTransactionParams) -> MintResult<Transaction> {
    let amount = params.mint_config.base_units()?;
    let token_ata = get_associated_token_address(&params.destination_wallet, &params.mint);
    let (metadata_account, _) = find_metadata_address(&params.mint);

    // 1. Fund and allocate the mint account, owned by the token program
    let create_account_ix = system_instruction::create_account(
        &params.payer,
        &params.mint,
        params.rent_exempt_lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );

    // 2. Initialize it as a mint with the configured precision
    let init_mint_ix = spl_token::instruction::initialize_mint(
        &spl_token::id(),
        &params.mint,
        &params.mint_authority,
        Some(&params.freeze_authority),
        params.mint_config.decimals,
    )
    .map_err(|e| MintError::InvalidParameters(e.to_string()))?;

    // 3. Create the destination wallet's associated token account
    let create_ata_ix = spl_associated_token_account::instruction::create_associated_token_account(
        &params.payer,
        &params.destination_wallet,
        &params.mint,
        &spl_token::id(),
    );

    // 4. Mint the full supply into it
    let mint_to_ix = spl_token::instruction::mint_to(
        &spl_token::id(),
        &params.mint,
        &token_ata,
        &params.mint_authority,
        &[],
        amount,
    )
    .map_err(|e| MintError::InvalidParameters(e.to_string()))?;

    // 5. Attach the metadata account at its PDA
    let metadata_ix = CreateMetadataAccountV3 {
        metadata: metadata_account,
        mint: params.mint,
        mint_authority: params.mint_authority,
        payer: params.payer,
        update_authority: (params.mint_authority, true),
        system_program: system_program::ID,
        rent: None,
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data: params.data,
        is_mutable: params.is_mutable,
        collection_details: None,
    });

    Ok(Transaction::new_with_payer(
        &[
            create_account_ix,
            init_mint_ix,
            create_ata_ix,
            mint_to_ix,
            metadata_ix,
        ],
        Some(&params.payer),
    ))
}
