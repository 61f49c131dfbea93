//! Solidity addresses for Hedera entities.
//!
//! An entity id `shard.realm.num` maps to a 20 byte "long-zero" address:
//! 4 bytes of shard, 8 bytes of realm and 8 bytes of num, all big-endian.

use alloy_primitives::Address;
use hedera::{AccountId, ContractId, TokenId};

use crate::error::{Error, Result};

/// Build the long-zero address for `shard.realm.num`.
///
/// Fails when `shard` does not fit the 4 byte shard field.
pub fn entity_address(shard: u64, realm: u64, num: u64) -> Result<Address> {
    let shard = u32::try_from(shard)
        .map_err(|_| Error::EntityOutOfRange(format!("{shard}.{realm}.{num}")))?;

    let mut bytes = [0u8; 20];
    bytes[..4].copy_from_slice(&shard.to_be_bytes());
    bytes[4..12].copy_from_slice(&realm.to_be_bytes());
    bytes[12..].copy_from_slice(&num.to_be_bytes());
    Ok(Address::from(bytes))
}

pub fn account_address(id: &AccountId) -> Result<Address> {
    entity_address(id.shard, id.realm, id.num)
}

pub fn token_address(id: &TokenId) -> Result<Address> {
    entity_address(id.shard, id.realm, id.num)
}

pub fn contract_address(id: &ContractId) -> Result<Address> {
    entity_address(id.shard, id.realm, id.num)
}

/// Lowercase hex without the `0x` prefix, the form explorers and the SDKs print.
pub fn to_solidity_hex(address: &Address) -> String {
    hex::encode(address.as_slice())
}
