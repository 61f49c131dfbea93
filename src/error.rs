//! Error type shared by the service modules.

use thiserror::Error;

/// Errors that can occur while driving the Hedera SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The SDK rejected a request or the network returned a failure.
    #[error("hedera error: {0}")]
    Sdk(#[from] hedera::Error),

    /// A required environment variable is unset or empty.
    #[error("environment variable {0} is missing or empty")]
    MissingEnv(&'static str),

    /// A configuration value could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// A receipt came back without the entity the transaction should have created.
    #[error("receipt is missing {0}")]
    MissingReceiptField(&'static str),

    /// Reading a bytecode file failed.
    #[error("failed to read bytecode: {0}")]
    Io(#[from] std::io::Error),

    /// The bytecode file is not valid hex.
    #[error("bytecode is not valid hex: {0}")]
    Bytecode(#[from] hex::FromHexError),

    /// The bytecode file contains no code.
    #[error("bytecode is empty")]
    EmptyBytecode,

    /// A token amount does not fit the signed transfer range.
    #[error("token amount {0} is too large for a transfer")]
    AmountOutOfRange(u64),

    /// An entity id has no Solidity address form.
    #[error("entity {0} cannot be expressed as a solidity address")]
    EntityOutOfRange(String),

    /// A contract function result could not be decoded.
    #[error("abi decode error: {0}")]
    Abi(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;
