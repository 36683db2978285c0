use clap::Parser;
use solana_sdk::signature::{Keypair, Signer};
use token_minter::{
    build_mint_transaction, upload_metadata, Config, MintClient, MintConfig,
    MintTransactionParams, TokenMetadata,
};

#[derive(Parser, Debug)]
#[command(name = "token-minter")]
#[command(about = "Mint a new SPL token with on-chain metadata in one transaction")]
struct Args {
    /// Token name (32 bytes max)
    #[arg(long)]
    name: String,

    /// Token symbol (10 bytes max)
    #[arg(long, default_value = "")]
    symbol: String,

    /// Token description
    #[arg(long, default_value = "")]
    description: String,

    /// Public URL of the token image
    #[arg(long, default_value = "")]
    image: String,

    /// Decimal precision of the new mint
    #[arg(long, default_value = "6")]
    decimals: u8,

    /// Total supply in whole tokens
    #[arg(long, default_value = "1000000")]
    supply: u64,

    /// Create the metadata account as immutable
    #[arg(long)]
    immutable: bool,

    /// RPC URL for the Solana cluster (overrides RPC_URL)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Metadata storage gateway URL (overrides STORAGE_URL)
    #[arg(long)]
    storage_url: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    let token_metadata = TokenMetadata {
        name: args.name,
        symbol: args.symbol,
        description: args.description,
        image: args.image,
    };
    token_metadata.validate()?;

    let mint_config = MintConfig {
        decimals: args.decimals,
        supply: args.supply,
    };

    let mut config = Config::from_env()?;
    if let Some(url) = args.rpc_url {
        config = config.with_rpc_url(url);
    }
    if let Some(url) = args.storage_url {
        config = config.with_storage_url(url);
    }

    let payer = token_minter::wallet::load_keypair(&config.secret)?;
    log::info!("Payer: {}", payer.pubkey());

    let client = MintClient::new(&config, payer);
    log::info!("RPC URL: {}", config.rpc_url);
    log::debug!("Payer balance: {} lamports", client.payer_balance().await?);

    log::info!("Step 1: uploading metadata");
    let http = reqwest::Client::new();
    let uri = upload_metadata(&http, &config.storage_url, &token_metadata).await?;
    log::info!("Metadata stored at {}", uri);

    log::info!("Step 2: building mint transaction");
    let mint_keypair = Keypair::new();
    log::info!("New mint address: {}", mint_keypair.pubkey());

    let rent_exempt_lamports = client.rent_exempt_mint_balance().await?;
    let payer_pubkey = client.payer.pubkey();
    let tx = build_mint_transaction(MintTransactionParams {
        payer: payer_pubkey,
        mint: mint_keypair.pubkey(),
        destination_wallet: payer_pubkey,
        mint_authority: payer_pubkey,
        freeze_authority: payer_pubkey,
        rent_exempt_lamports,
        mint_config: &mint_config,
        data: token_metadata.to_data_v2(uri),
        is_mutable: !args.immutable,
    })?;

    log::info!("Step 3: submitting mint transaction");
    let signature = client.submit(tx, &mint_keypair).await?;

    let cluster = explorer_cluster_suffix(&config.rpc_url);
    println!(
        "Minted {} {} to {}",
        mint_config.supply, token_metadata.symbol, payer_pubkey
    );
    println!("Transaction: https://explorer.solana.com/tx/{}{}", signature, cluster);
    println!(
        "Token mint:  https://explorer.solana.com/address/{}{}",
        mint_keypair.pubkey(),
        cluster
    );

    Ok(())
}

/// Explorer query suffix for non-mainnet clusters
fn explorer_cluster_suffix(rpc_url: &str) -> &'static str {
    if rpc_url.contains("devnet") {
        "?cluster=devnet"
    } else if rpc_url.contains("testnet") {
        "?cluster=testnet"
    } else {
        ""
    }
}
