//! Account creation.

use hedera::{AccountCreateTransaction, AccountId, Client, Hbar, PrivateKey};

use crate::error::{Error, Result};

/// Create a new account funded by the current operator.
///
/// Returns the new account id together with its freshly generated ED25519 key.
pub async fn create_account(client: &Client, initial_balance: Hbar) -> Result<(AccountId, PrivateKey)> {
    let private_key = PrivateKey::generate_ed25519();

    let receipt = AccountCreateTransaction::new()
        .key(private_key.public_key())
        .initial_balance(initial_balance)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    let account_id = receipt
        .account_id
        .ok_or(Error::MissingReceiptField("account_id"))?;

    tracing::info!(
        account_id = %account_id,
        initial_balance = %initial_balance,
        status = ?receipt.status,
        "Account created"
    );

    Ok((account_id, private_key))
}
