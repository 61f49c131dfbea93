//! Hedera Allowance Examples
//!
//! This crate contains standalone examples demonstrating token allowances on
//! Hedera. Each example can be run independently with
//! `cargo run --example <name>`.
//!
//! Available examples:
//!
//! - `grant_allowance`: Create accounts and a token, deploy the allowance
//!   contract, then approve, check and spend an allowance through it
//! - `token_transfer`: Direct token transfers and native (non-contract) allowances
//!
//! Both examples read `OPERATOR_ACCOUNT_ID` and `OPERATOR_PRIVATE_KEY` from the
//! environment or a `.env` file.
//!
//! # Quick Start
//!
//! ```bash
//! # Run the contract allowance example
//! cargo run --example grant_allowance
//!
//! # Run the native transfer example
//! cargo run --example token_transfer
//! ```

fn main() {
    println!("Hedera Allowance Examples");
    println!("=========================");
    println!();
    println!("Available examples:");
    println!();
    println!("  cargo run --example grant_allowance");
    println!("    Approve, check and spend an ERC-20 style allowance through a contract");
    println!();
    println!("  cargo run --example token_transfer");
    println!("    Direct token transfers and native token allowances");
    println!();
    println!("Set OPERATOR_ACCOUNT_ID and OPERATOR_PRIVATE_KEY (or a .env file) first.");
}
