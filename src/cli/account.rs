//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::FundcheckResult;
use crate::history::HistoryLog;
use crate::models::parse_amount;
use crate::services::AccountService;
use crate::storage::AccountStore;

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        name: String,
        /// Opening balance (e.g., "1000.00" or "$1,000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with their balances
    List,
    /// Show one account
    Show {
        /// Account name or ID
        account: String,
    },
    /// Rename an account
    Rename {
        /// Account name or ID
        account: String,
        new_name: String,
    },
    /// Record an account's current balance
    SetBalance {
        /// Account name or ID
        account: String,
        #[arg(allow_hyphen_values = true)]
        balance: String,
    },
    /// Delete an account
    Delete {
        /// Account name or ID
        account: String,
    },
}

pub fn handle_account_command(
    store: &mut AccountStore,
    history: &HistoryLog,
    settings: &Settings,
    cmd: AccountCommands,
) -> FundcheckResult<()> {
    let mut service = AccountService::new(store, history);

    match cmd {
        AccountCommands::Create { name, balance } => {
            let account = service.create(&name, parse_amount(&balance)?)?;
            println!("Created account: {}", account.name);
            println!("  Balance: {}", settings.format_amount(account.balance));
            println!("  ID:      {}", account.id);
        }

        AccountCommands::List => {
            print!("{}", format_account_list(service.list(), settings));
        }

        AccountCommands::Show { account } => {
            print!("{}", format_account_details(service.find(&account)?, settings));
        }

        AccountCommands::Rename { account, new_name } => {
            let (before, after) = service.rename(&account, &new_name)?;
            println!("Renamed account: {} -> {}", before.name, after.name);
        }

        AccountCommands::SetBalance { account, balance } => {
            let (before, after) = service.set_balance(&account, parse_amount(&balance)?)?;
            println!(
                "Updated balance of {}: {} -> {}",
                after.name,
                settings.format_amount(before.balance),
                settings.format_amount(after.balance)
            );
        }

        AccountCommands::Delete { account } => {
            let deleted = service.delete(&account)?;
            println!("Deleted account: {}", deleted.name);
        }
    }

    Ok(())
}
