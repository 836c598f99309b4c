//! `fundcheck history`

use clap::Args;

use crate::config::Settings;
use crate::display::format_history;
use crate::error::{FundcheckError, FundcheckResult};
use crate::history::HistoryLog;
use crate::storage::AccountStore;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only show changes to this account (name or ID)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Number of most recent entries to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

pub fn handle_history_command(
    store: &AccountStore,
    history: &HistoryLog,
    settings: &Settings,
    args: &HistoryArgs,
) -> FundcheckResult<()> {
    // Deleted accounts are no longer in the store, so their history can only
    // be reached unfiltered
    let account_id = match &args.account {
        Some(identifier) => Some(
            store
                .find(identifier)
                .ok_or_else(|| FundcheckError::AccountNotFound(identifier.trim().to_string()))?
                .id,
        ),
        None => None,
    };

    let entries = history.recent(account_id, args.limit)?;
    print!("{}", format_history(&entries, settings));
    Ok(())
}
