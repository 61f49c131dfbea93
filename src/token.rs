//! Hedera Token Service operations.

use alloy_primitives::Address;
use hedera::{
    AccountAllowanceApproveTransaction, AccountId, Client, Hbar, PrivateKey, TokenAssociateTransaction,
    TokenCreateTransaction, TokenId, TokenType, TransactionId, TransactionReceipt, TransferTransaction,
};

use crate::error::{Error, Result};
use crate::solidity::{to_solidity_hex, token_address};

/// Parameters for a new fungible token.
#[derive(Debug, Clone)]
pub struct FungibleToken<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub initial_supply: u64,
    pub treasury_account_id: AccountId,
    /// Signs the creation together with the operator.
    pub treasury_key: &'a PrivateKey,
    pub supply_key: &'a PrivateKey,
    pub max_transaction_fee: Hbar,
}

impl<'a> FungibleToken<'a> {
    pub fn new(
        name: &'a str,
        symbol: &'a str,
        initial_supply: u64,
        treasury_account_id: AccountId,
        treasury_key: &'a PrivateKey,
        supply_key: &'a PrivateKey,
    ) -> Self {
        Self {
            name,
            symbol,
            initial_supply,
            treasury_account_id,
            treasury_key,
            supply_key,
            max_transaction_fee: Hbar::new(30),
        }
    }
}

/// A token created on the network.
#[derive(Debug, Clone)]
pub struct CreatedToken {
    pub token_id: TokenId,
    pub solidity_address: Address,
}

pub async fn create_fungible_token(client: &Client, token: &FungibleToken<'_>) -> Result<CreatedToken> {
    let mut tx = TokenCreateTransaction::new();
    tx.name(token.name)
        .symbol(token.symbol)
        .token_type(TokenType::FungibleCommon)
        .initial_supply(token.initial_supply)
        .treasury_account_id(token.treasury_account_id.clone())
        .supply_key(token.supply_key.public_key())
        .max_transaction_fee(token.max_transaction_fee);

    let receipt = tx
        .freeze_with(client)?
        .sign(token.treasury_key.clone())
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    let token_id = receipt.token_id.ok_or(Error::MissingReceiptField("token_id"))?;
    let solidity_address = token_address(&token_id)?;

    tracing::info!(
        status = ?receipt.status,
        token_id = %token_id,
        solidity_address = %to_solidity_hex(&solidity_address),
        name = token.name,
        symbol = token.symbol,
        "Fungible token created"
    );

    Ok(CreatedToken {
        token_id,
        solidity_address,
    })
}

/// Associate `account_id` with `token_id` so it can hold the token.
pub async fn associate_token(
    client: &Client,
    token_id: TokenId,
    account_id: AccountId,
    account_key: &PrivateKey,
) -> Result<TransactionReceipt> {
    let mut tx = TokenAssociateTransaction::new();
    tx.account_id(account_id.clone()).token_ids([token_id]);

    let receipt = tx
        .freeze_with(client)?
        .sign(account_key.clone())
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    tracing::info!(
        account_id = %account_id,
        token_id = %token_id,
        status = ?receipt.status,
        "Associated with token"
    );

    Ok(receipt)
}

/// Transfer `amount` units straight from `owner` to `receiver`.
pub async fn send_token(
    client: &Client,
    token_id: TokenId,
    owner: AccountId,
    receiver: AccountId,
    amount: u64,
    owner_key: &PrivateKey,
) -> Result<TransactionReceipt> {
    let units = signed_amount(amount)?;

    let mut tx = TransferTransaction::new();
    tx.token_transfer(token_id, owner, -units)
        .token_transfer(token_id, receiver.clone(), units);

    let receipt = tx
        .freeze_with(client)?
        .sign(owner_key.clone())
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    tracing::info!(
        token_id = %token_id,
        receiver = %receiver,
        amount,
        status = ?receipt.status,
        "Sent token"
    );

    Ok(receipt)
}

/// Grant `spender` a native token allowance on `owner`'s balance.
pub async fn approve_token_allowance(
    client: &Client,
    token_id: TokenId,
    owner: AccountId,
    spender: AccountId,
    amount: u64,
    owner_key: &PrivateKey,
) -> Result<TransactionReceipt> {
    let mut tx = AccountAllowanceApproveTransaction::new();
    tx.approve_token_allowance(token_id, owner.clone(), spender.clone(), amount);

    let receipt = tx
        .freeze_with(client)?
        .sign(owner_key.clone())
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    tracing::info!(
        token_id = %token_id,
        owner = %owner,
        spender = %spender,
        amount,
        status = ?receipt.status,
        "Token allowance approved"
    );

    Ok(receipt)
}

/// Spend an allowance: move `amount` from `owner` to `receiver` on behalf of `spender`.
///
/// The transaction id is generated for the spender, so the spender pays the
/// fee and must sign even when it is not the client's operator.
pub async fn send_approved_token(
    client: &Client,
    token_id: TokenId,
    owner: AccountId,
    receiver: AccountId,
    amount: u64,
    spender: AccountId,
    spender_key: &PrivateKey,
) -> Result<TransactionReceipt> {
    let units = signed_amount(amount)?;

    let mut tx = TransferTransaction::new();
    tx.approved_token_transfer(token_id, owner, -units)
        .token_transfer(token_id, receiver.clone(), units)
        .transaction_id(TransactionId::generate(spender));

    let receipt = tx
        .freeze_with(client)?
        .sign(spender_key.clone())
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    tracing::info!(
        token_id = %token_id,
        receiver = %receiver,
        amount,
        status = ?receipt.status,
        "Sent approved token"
    );

    Ok(receipt)
}

/// Transfer lists carry signed amounts; the debit is the negated credit.
fn signed_amount(amount: u64) -> Result<i64> {
    i64::try_from(amount).map_err(|_| Error::AmountOutOfRange(amount))
}
