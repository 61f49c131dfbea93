//! Service helpers shared by the Hedera allowance examples.
//!
//! Each module is a thin layer over the `hedera` SDK: build a request, sign
//! it, submit it and read back the receipt or record.
//!
//! - [`account`]: create funded accounts
//! - [`token`]: create fungible tokens, associate, transfer, native allowances
//! - [`contract`]: deploy bytecode and call contract functions
//! - [`queries`]: balances, token info and transaction records
//!
//! [`abi`] and [`solidity`] marshal Hedera ids and amounts into the EVM
//! calling convention the allowance contract expects.

pub mod abi;
pub mod account;
pub mod config;
pub mod contract;
pub mod error;
pub mod queries;
pub mod solidity;
pub mod token;

pub use config::{Config, Network};
pub use error::{Error, Result};
