//! Service layer for fundcheck
//!
//! The balance checker is the core decision. The other services sit on top
//! of the account store: one runs checks against it, the other manages
//! accounts and records their history.

pub mod account;
pub mod balance_checker;
pub mod transfer_check;

pub use account::AccountService;
pub use balance_checker::BalanceChecker;
pub use transfer_check::{TransferCheck, TransferCheckService};
