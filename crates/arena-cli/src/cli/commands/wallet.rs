//! Wallet command handlers.

use anyhow::{Context, Result};
use comfy_table::Table;

use arena_core::config::Config;
use arena_core::format::{format_amount, format_timestamp};
use arena_core::session::SessionStore;
use arena_types::{DepositRequest, TransactionKind, WithdrawRequest};

use super::client;

pub async fn show(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let wallet = api.wallet().await.context("load wallet")?;
    println!("Balance: ৳{}", format_amount(wallet.balance));
    Ok(())
}

pub async fn transactions(
    config: &Config,
    store: &SessionStore,
    kind: Option<&str>,
) -> Result<()> {
    let api = client(config, store)?;
    let transactions = api
        .transactions(config.per_page, kind)
        .await
        .context("load transactions")?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Description", "Amount", "Status", "Date"]);
    for tx in &transactions {
        let amount = match tx.kind_parsed() {
            TransactionKind::Credit => format!("+৳{}", format_amount(tx.amount)),
            _ => format!("-৳{}", format_amount(tx.amount.abs())),
        };
        table.add_row(vec![
            tx.display_description(),
            amount,
            tx.status.clone().unwrap_or_else(|| "completed".to_string()),
            format_timestamp(tx.created_at.as_deref()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn deposit(
    config: &Config,
    store: &SessionStore,
    amount: f64,
    method: &str,
) -> Result<()> {
    let api = client(config, store)?;
    let message = api
        .initiate_deposit(&DepositRequest {
            amount,
            method: method.to_string(),
        })
        .await
        .context("initiate deposit")?;
    println!("{}", non_empty(message, "Deposit initiated."));
    Ok(())
}

pub async fn withdraw(
    config: &Config,
    store: &SessionStore,
    amount: f64,
    method: &str,
    account: &str,
) -> Result<()> {
    let api = client(config, store)?;
    let message = api
        .request_withdraw(&WithdrawRequest {
            amount,
            method: method.to_string(),
            account: account.to_string(),
        })
        .await
        .context("request withdraw")?;
    println!("{}", non_empty(message, "Withdraw request submitted."));
    Ok(())
}

pub async fn withdraw_requests(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let requests = api.withdraw_requests().await.context("load withdraw requests")?;
    println!("{}", serde_json::to_string_pretty(&requests)?);
    Ok(())
}

pub async fn cancel_withdraw(config: &Config, store: &SessionStore, id: &str) -> Result<()> {
    let api = client(config, store)?;
    let message = api
        .cancel_withdraw_request(id)
        .await
        .context("cancel withdraw request")?;
    println!("{}", non_empty(message, "Withdraw request cancelled."));
    Ok(())
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
