//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod account;
pub mod check;
pub mod history;

pub use account::{handle_account_command, AccountCommands};
pub use check::{handle_check_command, CheckArgs, CheckOutcome, OutputFormat};
pub use history::{handle_history_command, HistoryArgs};
