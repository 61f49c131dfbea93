//! Read-only queries against the network.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use hedera::{
    AccountBalanceQuery, AccountId, Client, ContractId, Hbar, TokenId, TokenInfo, TokenInfoQuery,
    TransactionId, TransactionRecord, TransactionRecordQuery,
};

use crate::error::Result;

/// Which kind of entity a balance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOwner {
    Account,
    Contract,
}

impl fmt::Display for BalanceOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceOwner::Account => f.write_str("account"),
            BalanceOwner::Contract => f.write_str("contract"),
        }
    }
}

/// Hbar balance plus the balance of one token.
#[derive(Debug, Clone)]
pub struct AccountTokenBalance {
    pub owner: BalanceOwner,
    pub hbars: Hbar,
    /// Units of the requested token; zero when the entity holds none.
    pub tokens: u64,
}

/// Fetch a transaction record, including child records.
pub async fn transaction_record_query(client: &Client, transaction_id: TransactionId) -> Result<TransactionRecord> {
    let record = TransactionRecordQuery::new()
        .transaction_id(transaction_id)
        .include_children(true)
        .execute(client)
        .await?;
    Ok(record)
}

pub async fn token_info_query(client: &Client, token_id: TokenId) -> Result<TokenInfo> {
    let info = TokenInfoQuery::new().token_id(token_id).execute(client).await?;
    Ok(info)
}

/// Hbar and `token_id` balance of `id`.
///
/// `id` is first queried as an account; if the network rejects that, the same
/// entity number is queried as a contract.
pub async fn check_account_balance(client: &Client, id: &AccountId, token_id: TokenId) -> Result<AccountTokenBalance> {
    let (owner, balance) = match AccountBalanceQuery::new().account_id(id.clone()).execute(client).await {
        Ok(balance) => (BalanceOwner::Account, balance),
        Err(err) => {
            tracing::debug!(id = %id, error = %err, "Account balance query failed, retrying as contract");
            let contract_id = ContractId::from_str(&id.to_string())?;
            let balance = AccountBalanceQuery::new()
                .contract_id(contract_id)
                .execute(client)
                .await?;
            (BalanceOwner::Contract, balance)
        }
    };

    #[allow(deprecated)]
    let tokens = token_units(&balance.tokens, &token_id);

    let balance = AccountTokenBalance {
        owner,
        hbars: balance.hbars,
        tokens,
    };

    tracing::info!(
        "Balance of {} {}: {} + {} unit(s) of token {}",
        balance.owner,
        id,
        balance.hbars,
        balance.tokens,
        token_id
    );

    Ok(balance)
}

fn token_units(tokens: &HashMap<TokenId, u64>, token_id: &TokenId) -> u64 {
    tokens.get(token_id).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_owner_display() {
        assert_eq!(BalanceOwner::Account.to_string(), "account");
        assert_eq!(BalanceOwner::Contract.to_string(), "contract");
    }

    #[test]
    fn test_token_units_present() {
        let token = TokenId::from_str("0.0.5005").unwrap();
        let other = TokenId::from_str("0.0.6006").unwrap();
        let tokens = HashMap::from([(token.clone(), 70u64), (other.clone(), 3u64)]);

        assert_eq!(token_units(&tokens, &token), 70);
        assert_eq!(token_units(&tokens, &other), 3);
    }

    #[test]
    fn test_token_units_absent_is_zero() {
        let held = TokenId::from_str("0.0.5005").unwrap();
        let missing = TokenId::from_str("0.0.7007").unwrap();

        assert_eq!(token_units(&HashMap::new(), &missing), 0);
        assert_eq!(token_units(&HashMap::from([(held, 100u64)]), &missing), 0);
    }
}
