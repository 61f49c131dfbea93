//! Smart contract deployment and invocation.

use std::fmt;
use std::path::Path;

use alloy_primitives::Address;
use hedera::{
    Client, ContractCallQuery, ContractCreateFlow, ContractExecuteTransaction, ContractFunctionResult, ContractId,
    PrivateKey,
};

use crate::abi::ContractCall;
use crate::error::{Error, Result};
use crate::queries::transaction_record_query;
use crate::solidity::{contract_address, to_solidity_hex};

/// A contract deployed on the network.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub contract_id: ContractId,
    pub solidity_address: Address,
}

/// Read the hex output of `solc --bin` (or Remix) into raw bytecode.
pub fn load_bytecode(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_bytecode(&text)
}

fn parse_bytecode(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    if text.is_empty() {
        return Err(Error::EmptyBytecode);
    }
    Ok(hex::decode(text)?)
}

/// Store the bytecode and create the contract.
///
/// `ContractCreateFlow` covers the file create, file append and contract
/// create transactions in one call.
pub async fn deploy_contract(client: &Client, bytecode: Vec<u8>, gas: u64) -> Result<DeployedContract> {
    tracing::info!(bytes = bytecode.len(), gas, "Deploying smart contract");

    let receipt = ContractCreateFlow::new()
        .bytecode(bytecode)
        .gas(gas)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    let contract_id = receipt
        .contract_id
        .ok_or(Error::MissingReceiptField("contract_id"))?;
    let solidity_address = contract_address(&contract_id)?;

    tracing::info!(
        contract_id = %contract_id,
        solidity_address = %to_solidity_hex(&solidity_address),
        "Smart contract deployed"
    );

    Ok(DeployedContract {
        contract_id,
        solidity_address,
    })
}

/// Execute a state-changing contract function as the client's operator.
///
/// Returns the function result from the transaction record, if the network
/// reported one.
pub async fn execute_contract_function(
    client: &Client,
    contract_id: ContractId,
    gas: u64,
    call: &ContractCall,
    signer_key: &PrivateKey,
) -> Result<Option<ContractFunctionResult>> {
    let mut tx = ContractExecuteTransaction::new();
    tx.contract_id(contract_id)
        .gas(gas)
        .function_parameters(call.data.clone());

    let record = tx
        .freeze_with(client)?
        .sign(signer_key.clone())
        .execute(client)
        .await?
        .get_record(client)
        .await?;

    let full_record = transaction_record_query(client, record.transaction_id).await?;

    tracing::info!(
        "{}",
        call_summary(call.function, &full_record.receipt.status, &full_record.transaction_id)
    );

    Ok(record.contract_function_result)
}

fn call_summary(function: &str, status: &impl fmt::Debug, transaction_id: &impl fmt::Display) -> String {
    format!("Contract call for FT {function} (check in Hashscan) was a: {status:?} transaction id: {transaction_id}")
}

/// Run a read-only contract function locally on a node.
pub async fn call_contract_function(
    client: &Client,
    contract_id: ContractId,
    gas: u64,
    call: &ContractCall,
) -> Result<ContractFunctionResult> {
    let result = ContractCallQuery::new()
        .contract_id(contract_id)
        .gas(gas)
        .function_parameters(call.data.clone())
        .execute(client)
        .await?;

    tracing::debug!(
        function = call.function,
        gas_used = result.gas_used,
        "Contract call query"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bytecode() {
        assert_eq!(parse_bytecode("6080604052").unwrap(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(parse_bytecode("0x6080\n").unwrap(), vec![0x60, 0x80]);
        assert_eq!(parse_bytecode("  60FF  \r\n").unwrap(), vec![0x60, 0xff]);
    }

    #[test]
    fn test_parse_bytecode_rejects_bad_input() {
        assert!(matches!(parse_bytecode(""), Err(Error::EmptyBytecode)));
        assert!(matches!(parse_bytecode("0x\n"), Err(Error::EmptyBytecode)));
        assert!(matches!(parse_bytecode("60zz"), Err(Error::Bytecode(_))));
        assert!(matches!(parse_bytecode("608"), Err(Error::Bytecode(_))));
    }

    #[test]
    fn test_call_summary() {
        let summary = call_summary("approve", &hedera::Status::Success, &"0.0.1001@1700000000.000000001");
        assert_eq!(
            summary,
            "Contract call for FT approve (check in Hashscan) was a: Success transaction id: 0.0.1001@1700000000.000000001"
        );
    }

    #[test]
    fn test_load_bytecode_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "608060405234801561001057600080fd5b50").unwrap();

        let bytecode = load_bytecode(file.path()).unwrap();

        assert_eq!(bytecode.len(), 18);
        assert_eq!(&bytecode[..2], &[0x60, 0x80]);
    }

    #[test]
    fn test_load_bytecode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");
        assert!(matches!(load_bytecode(path), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_bytecode_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(load_bytecode(file.path()), Err(Error::EmptyBytecode)));
    }
}
