//! Core data models for fundcheck
//!
//! This module contains the funds-source capability, the outcome of a
//! transfer check, and the account model persisted by the storage layer.

pub mod account;
pub mod amount;
pub mod check;
pub mod funds;
pub mod ids;

pub use account::Account;
pub use amount::{format_amount, parse_amount};
pub use check::TransferCheckResult;
pub use funds::{FixedBalance, FundsSource};
pub use ids::AccountId;
