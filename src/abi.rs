//! ABI of the allowance contract.
//!
//! The contract forwards to the Hedera Token Service precompile, so every
//! function takes the token's Solidity address as its first argument.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use crate::error::{Error, Result};

sol! {
    /// Grant `spender` an allowance of `amount` units of `token` from the caller.
    function approve(address token, address spender, uint256 amount) external;

    /// Remaining allowance `owner` has granted to `spender`.
    function checkAllowance(address token, address owner, address spender) external returns (uint256);

    /// Move `amount` units of `token` from `from` to `to` using the caller's allowance.
    function transferFrom(address token, address from, address to, uint256 amount) external;
}

/// A contract function name together with its encoded calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub function: &'static str,
    /// Selector followed by the ABI-encoded arguments.
    pub data: Vec<u8>,
}

impl ContractCall {
    fn new<C: SolCall>(name: &'static str, call: C) -> Self {
        Self {
            function: name,
            data: call.abi_encode(),
        }
    }
}

pub fn approve(token: Address, spender: Address, amount: U256) -> ContractCall {
    ContractCall::new(
        "approve",
        approveCall {
            token,
            spender,
            amount,
        },
    )
}

pub fn check_allowance(token: Address, owner: Address, spender: Address) -> ContractCall {
    ContractCall::new(
        "checkAllowance",
        checkAllowanceCall {
            token,
            owner,
            spender,
        },
    )
}

pub fn transfer_from(token: Address, from: Address, to: Address, amount: U256) -> ContractCall {
    ContractCall::new(
        "transferFrom",
        transferFromCall {
            token,
            from,
            to,
            amount,
        },
    )
}

/// Decode the result of a `checkAllowance` call.
pub fn decode_allowance(bytes: &[u8]) -> Result<U256> {
    checkAllowanceCall::abi_decode_returns(bytes).map_err(|e| Error::Abi(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;

    use crate::solidity::entity_address;

    fn selector(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature.as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    #[test]
    fn test_approve_calldata() {
        let token = entity_address(0, 0, 1001).unwrap();
        let spender = entity_address(0, 0, 1002).unwrap();
        let call = approve(token, spender, U256::from(50u64));

        assert_eq!(call.function, "approve");
        assert_eq!(call.data.len(), 4 + 3 * 32);
        assert_eq!(&call.data[..4], &selector("approve(address,address,uint256)"));

        // Addresses are left padded to a full word.
        assert_eq!(&call.data[4..16], &[0u8; 12]);
        assert_eq!(&call.data[16..36], token.as_slice());
        assert_eq!(&call.data[48..68], spender.as_slice());
        assert_eq!(U256::from_be_slice(&call.data[68..100]), U256::from(50u64));
    }

    #[test]
    fn test_check_allowance_calldata() {
        let call = check_allowance(
            entity_address(0, 0, 1).unwrap(),
            entity_address(0, 0, 2).unwrap(),
            entity_address(0, 0, 3).unwrap(),
        );

        assert_eq!(call.function, "checkAllowance");
        assert_eq!(call.data.len(), 4 + 3 * 32);
        assert_eq!(
            &call.data[..4],
            &selector("checkAllowance(address,address,address)")
        );
        assert_eq!(call.data[4 + 31], 1);
        assert_eq!(call.data[4 + 63], 2);
        assert_eq!(call.data[4 + 95], 3);
    }

    #[test]
    fn test_transfer_from_calldata() {
        let call = transfer_from(
            entity_address(0, 0, 10).unwrap(),
            entity_address(0, 0, 11).unwrap(),
            entity_address(0, 0, 12).unwrap(),
            U256::from(30u64),
        );

        assert_eq!(call.function, "transferFrom");
        assert_eq!(call.data.len(), 4 + 4 * 32);
        assert_eq!(
            &call.data[..4],
            &selector("transferFrom(address,address,address,uint256)")
        );
        assert_eq!(U256::from_be_slice(&call.data[100..132]), U256::from(30u64));
    }

    #[test]
    fn test_decode_allowance() {
        let mut bytes = vec![0u8; 32];
        bytes[31] = 50;
        assert_eq!(decode_allowance(&bytes).unwrap(), U256::from(50u64));

        bytes[30] = 1;
        assert_eq!(decode_allowance(&bytes).unwrap(), U256::from(306u64));
    }

    #[test]
    fn test_decode_allowance_short_result() {
        assert!(matches!(decode_allowance(&[]), Err(Error::Abi(_))));
        assert!(matches!(decode_allowance(&[0u8; 31]), Err(Error::Abi(_))));
    }
}
