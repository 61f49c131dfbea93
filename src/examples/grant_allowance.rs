//! Grant Allowance Example
//!
//! This example creates a treasury account plus two users, Alice and Bob,
//! mints a fungible token into the treasury and deploys the allowance
//! contract. The treasury then grants Alice an allowance through standard
//! ERC calls, Alice spends part of it by moving tokens to Bob, and finally
//! the treasury revokes what is left.
//!
//! Run with: `cargo run --example grant_allowance`

use std::path::PathBuf;

use alloy_primitives::U256;
use clap::Parser;
use hedera::{AccountId, Client, ContractFunctionResult, Hbar, PrivateKey, TokenId};
use hedera_allowance::{abi, account::create_account, contract, queries, solidity, token, Config};
use tracing_subscriber::EnvFilter;

const DEPLOY_GAS: u64 = 1_000_000;
const CALL_GAS: u64 = 4_000_000;

#[derive(Debug, Parser)]
#[command(about = "Approve, check and spend an ERC-20 style allowance through a contract")]
struct Args {
    /// Compiled allowance contract (hex output of solc --bin)
    #[arg(long, default_value = "binaries/contracts_ERC20FungibleToken_sol_ERC20FungibleToken.bin")]
    bytecode: PathBuf,

    /// Initial balance of each new account, in hbar
    #[arg(long, default_value_t = 100)]
    initial_balance: i64,

    #[arg(long, default_value = "HBAR ROCKS")]
    token_name: String,

    #[arg(long, default_value = "HROCK")]
    token_symbol: String,

    #[arg(long, default_value_t = 100)]
    initial_supply: u64,

    /// Allowance granted to Alice
    #[arg(long, default_value_t = 50)]
    allowance: u64,

    /// Amount Alice moves from the treasury to Bob
    #[arg(long, default_value_t = 30)]
    transfer_amount: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hedera_allowance=info,grant_allowance=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = config.client();
    let network = config.network;

    // =========================================================================
    // 1. CREATE ACCOUNTS
    // =========================================================================
    println!("\n=== Creating Accounts ===");

    let initial_balance = Hbar::new(args.initial_balance);

    let (treasury_id, treasury_key) = create_account(&client, initial_balance).await?;
    println!("Treasury's account: {}", network.hashscan_url("account", &treasury_id));

    let (alice_id, alice_key) = create_account(&client, initial_balance).await?;
    println!("Alice's account: {}", network.hashscan_url("account", &alice_id));

    let (bob_id, bob_key) = create_account(&client, initial_balance).await?;
    println!("Bob's account: {}", network.hashscan_url("account", &bob_id));

    let treasury_address = solidity::account_address(&treasury_id)?;
    let alice_address = solidity::account_address(&alice_id)?;
    let bob_address = solidity::account_address(&bob_id)?;
    println!(
        "Alice, the spender, address in solidity format: {}",
        solidity::to_solidity_hex(&alice_address)
    );

    // =========================================================================
    // 2. CREATE TOKEN
    // =========================================================================
    println!("\n=== Creating Fungible Token ===");

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
    let token_address = created.solidity_address;

    println!("Token: {}", network.hashscan_url("token", &token_id));
    println!("Token Id in Solidity format: {}", solidity::to_solidity_hex(&token_address));

    let info = queries::token_info_query(&client, token_id).await?;
    println!("Initial token supply: {}", info.total_supply);

    // Bob must associate to receive the token
    token::associate_token(&client, token_id, bob_id.clone(), &bob_key).await?;
    println!("Bob associated with {}", token_id);

    // =========================================================================
    // 3. DEPLOY CONTRACT
    // =========================================================================
    println!("\n=== Deploying Contract ===");

    // Compile the contract with solc or Remix and point --bytecode at the .bin output
    let bytecode = contract::load_bytecode(&args.bytecode)?;
    let deployed = contract::deploy_contract(&client, bytecode, DEPLOY_GAS).await?;
    let contract_id = deployed.contract_id;

    println!("Contract: {}", network.hashscan_url("contract", &contract_id));
    println!(
        "Contract Id in Solidity format: {}",
        solidity::to_solidity_hex(&deployed.solidity_address)
    );

    // =========================================================================
    // 4. APPROVE (treasury is the caller)
    // =========================================================================
    println!("\n=== Start Approval ===");

    client.set_operator(treasury_id.clone(), treasury_key.clone());

    let approve = abi::approve(token_address, alice_address, U256::from(args.allowance));
    contract::execute_contract_function(&client, contract_id, CALL_GAS, &approve, &treasury_key).await?;

    let check = abi::check_allowance(token_address, treasury_address, alice_address);
    let result = contract::execute_contract_function(&client, contract_id, CALL_GAS, &check, &treasury_key).await?;
    print_allowance(result.as_ref())?;

    // =========================================================================
    // 5. BALANCES BEFORE TRANSFER
    // =========================================================================
    println!("\n=== Balances Before Transfer ===");

    config.restore_operator(&client);
    print_balances(&client, &[("Treasury", &treasury_id), ("Bob", &bob_id)], token_id).await?;

    // =========================================================================
    // 6. TRANSFER FROM (Alice is the caller)
    // =========================================================================
    println!("\n=== Start Transfer ===");

    client.set_operator(alice_id.clone(), alice_key.clone());

    let transfer = abi::transfer_from(
        token_address,
        treasury_address,
        bob_address,
        U256::from(args.transfer_amount),
    );
    contract::execute_contract_function(&client, contract_id, CALL_GAS, &transfer, &alice_key).await?;

    config.restore_operator(&client);
    print_balances(&client, &[("Treasury", &treasury_id), ("Bob", &bob_id)], token_id).await?;

    // =========================================================================
    // 7. REMOVE ALLOWANCE (treasury is the caller)
    // =========================================================================
    println!("\n=== Removing Allowance ===");

    client.set_operator(treasury_id.clone(), treasury_key.clone());

    let revoke = abi::approve(token_address, alice_address, U256::ZERO);
    contract::execute_contract_function(&client, contract_id, CALL_GAS, &revoke, &treasury_key).await?;

    // Reading the allowance does not change state, so a local call query is enough
    let result = contract::call_contract_function(&client, contract_id, CALL_GAS, &check).await?;
    print_allowance(Some(&result))?;

    config.restore_operator(&client);

    println!("\n=== Done ===");
    Ok(())
}

fn print_allowance(result: Option<&ContractFunctionResult>) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Some(result) => {
            let allowance = abi::decode_allowance(&result.bytes)?;
            println!("Alice has an allowance of {}", allowance);
        }
        None => println!("No function result in the record"),
    }
    Ok(())
}

async fn print_balances(
    client: &Client,
    holders: &[(&str, &AccountId)],
    token_id: TokenId,
) -> Result<(), Box<dyn std::error::Error>> {
    for (label, id) in holders {
        let balance = queries::check_account_balance(client, id, token_id).await?;
        println!("{}: {} + {} unit(s)", label, balance.hbars, balance.tokens);
    }
    Ok(())
}
