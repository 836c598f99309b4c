//! fundcheck - transfer balance checks
//!
//! The heart of this crate is [`BalanceChecker`]: given a requested transfer
//! amount and anything implementing [`FundsSource`], it answers with a
//! [`TransferCheckResult`], either `Sufficient` or `Insufficient` with the
//! exact shortfall. Amounts that are not strictly positive are refused with
//! [`FundcheckError::InvalidArgument`].
//!
//! Around it sits a small account store used by the `fundcheck` binary:
//!
//! - `config`: data directory resolution and user settings
//! - `models`: funds sources, check results, accounts, amount parsing
//! - `storage`: the JSON account store with atomic writes
//! - `history`: append-only record of account changes
//! - `services`: the balance checker plus account and check services
//! - `display` / `cli`: terminal output and command handlers
//!
//! # Example
//!
//! ```
//! use fundcheck::{BalanceChecker, FixedBalance, TransferCheckResult};
//!
//! let checker = BalanceChecker::new();
//! let result = checker.check(100.0, &FixedBalance(40.0)).unwrap();
//! assert_eq!(result, TransferCheckResult::Insufficient { missing_amount: 60.0 });
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FundcheckError, FundcheckResult};
pub use models::{FixedBalance, FundsSource, TransferCheckResult};
pub use services::BalanceChecker;
