//! Display formatting for terminal output

pub mod account;
pub mod check;
pub mod history;

pub use account::{format_account_details, format_account_list};
pub use check::format_check_report;
pub use history::format_history;
