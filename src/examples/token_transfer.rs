//! Token Transfer Example
//!
//! This example moves a fungible token without any smart contract:
//! - A direct transfer from the treasury to Bob
//! - A native token allowance granted by the treasury to Alice
//! - Alice spending that allowance to pay Bob, signing as the spender
//!
//! Run with: `cargo run --example token_transfer`

use clap::Parser;
use hedera::{Hbar, PrivateKey};
use hedera_allowance::{account::create_account, queries, solidity, token, Config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Direct token transfers and native token allowances")]
struct Args {
    /// Initial balance of each new account, in hbar
    #[arg(long, default_value_t = 50)]
    initial_balance: i64,

    #[arg(long, default_value = "popsicleCoin")]
    token_name: String,

    #[arg(long, default_value = "POP")]
    token_symbol: String,

    #[arg(long, default_value_t = 100)]
    initial_supply: u64,

    /// Units sent directly from the treasury to Bob
    #[arg(long, default_value_t = 10)]
    send_amount: u64,

    /// Allowance granted to Alice
    #[arg(long, default_value_t = 20)]
    allowance: u64,

    /// Units Alice moves from the treasury to Bob
    #[arg(long, default_value_t = 7)]
    approved_amount: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hedera_allowance=info,token_transfer=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = config.client();
    let network = config.network;

    // =========================================================================
    // 1. SETUP: accounts and token
    // =========================================================================
    println!("\n=== Setup ===");

    let initial_balance = Hbar::new(args.initial_balance);
    let (treasury_id, treasury_key) = create_account(&client, initial_balance).await?;
    let (alice_id, alice_key) = create_account(&client, initial_balance).await?;
    let (bob_id, bob_key) = create_account(&client, initial_balance).await?;

    println!("Treasury: {}", network.hashscan_url("account", &treasury_id));
    println!("Alice:    {}", network.hashscan_url("account", &alice_id));
    println!("Bob:      {}", network.hashscan_url("account", &bob_id));

    let supply_key = PrivateKey::generate_ed25519();
    let created = token::create_fungible_token(
        &client,
        &token::FungibleToken::new(
            &args.token_name,
            &args.token_symbol,
            args.initial_supply,
            treasury_id.clone(),
            &treasury_key,
            &supply_key,
        ),
    )
    .await?;
    let token_id = created.token_id;
    println!(
        "Token {} ({})",
        token_id,
        solidity::to_solidity_hex(&created.solidity_address)
    );

    let info = queries::token_info_query(&client, token_id).await?;
    println!("Initial token supply: {}", info.total_supply);

    token::associate_token(&client, token_id, bob_id.clone(), &bob_key).await?;

    // =========================================================================
    // 2. DIRECT TRANSFER
    // =========================================================================
    println!("\n=== Direct Transfer ===");

    let receipt = token::send_token(
        &client,
        token_id,
        treasury_id.clone(),
        bob_id.clone(),
        args.send_amount,
        &treasury_key,
    )
    .await?;
    println!("Sent {} to Bob: {:?}", args.send_amount, receipt.status);

    queries::check_account_balance(&client, &treasury_id, token_id).await?;
    queries::check_account_balance(&client, &bob_id, token_id).await?;

    // =========================================================================
    // 3. NATIVE ALLOWANCE
    // =========================================================================
    println!("\n=== Native Allowance ===");

    let receipt = token::approve_token_allowance(
        &client,
        token_id,
        treasury_id.clone(),
        alice_id.clone(),
        args.allowance,
        &treasury_key,
    )
    .await?;
    println!("Alice may spend {}: {:?}", args.allowance, receipt.status);

    // =========================================================================
    // 4. SPEND ALLOWANCE (Alice pays and signs)
    // =========================================================================
    println!("\n=== Approved Transfer ===");

    let receipt = token::send_approved_token(
        &client,
        token_id,
        treasury_id.clone(),
        bob_id.clone(),
        args.approved_amount,
        alice_id.clone(),
        &alice_key,
    )
    .await?;
    println!("Alice sent {} to Bob: {:?}", args.approved_amount, receipt.status);

    let treasury = queries::check_account_balance(&client, &treasury_id, token_id).await?;
    let bob = queries::check_account_balance(&client, &bob_id, token_id).await?;
    println!("Treasury holds {} unit(s), Bob holds {}", treasury.tokens, bob.tokens);

    println!("\n=== Done ===");
    Ok(())
}
