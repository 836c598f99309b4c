//! Account listings and detail views

use std::fmt::Write;

use crate::config::Settings;
use crate::models::Account;

/// Table of accounts followed by a total row
pub fn format_account_list(accounts: &[Account], settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let balances: Vec<String> = accounts
        .iter()
        .map(|a| settings.format_amount(a.balance))
        .collect();
    let total = settings.format_amount(accounts.iter().map(|a| a.balance).sum());

    let name_w = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .chain(["Account".len(), "Total".len()])
        .max()
        .unwrap_or(0);
    let balance_w = balances
        .iter()
        .map(|b| b.chars().count())
        .chain([total.chars().count(), "Balance".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_w$}  {:<12}  {:>balance_w$}", "Account", "ID", "Balance");
    for (account, balance) in accounts.iter().zip(&balances) {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<12}  {:>balance_w$}",
            account.name,
            account.id.to_string(),
            balance
        );
    }
    let _ = writeln!(out, "{:<name_w$}  {:<12}  {:>balance_w$}", "Total", "", total);

    out
}

pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let stamp = "%Y-%m-%d %H:%M:%S UTC";
    format!(
        "{}\n  ID:      {}\n  Balance: {}\n  Opened:  {}\n  Changed: {}\n",
        account.name,
        account.id.as_uuid(),
        settings.format_amount(account.balance),
        account.created_at.format(stamp),
        account.updated_at.format(stamp),
    )
}
