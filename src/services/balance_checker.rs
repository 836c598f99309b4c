//! Balance checking
//!
//! Decides whether a funds source can cover a proposed transfer.

use crate::error::{FundcheckError, FundcheckResult};
use crate::models::{FundsSource, TransferCheckResult};

/// Compares a requested transfer amount against a funds source's balance.
///
/// The checker holds no state. It never mutates the source, never persists
/// anything and never logs, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceChecker;

impl BalanceChecker {
    pub const fn new() -> Self {
        Self
    }

    /// Reject amounts that are not strictly positive (including NaN)
    pub fn validate_amount(requested_amount: f64) -> FundcheckResult<()> {
        if requested_amount > 0.0 {
            Ok(())
        } else {
            Err(FundcheckError::InvalidArgument(format!(
                "transfer amount must be greater than zero, got {}",
                requested_amount
            )))
        }
    }

    /// Check whether `source` holds at least `requested_amount`.
    ///
    /// The source's balance is read exactly once, and only after the amount
    /// has been validated. Equal amounts count as sufficient.
    ///
    /// # Errors
    ///
    /// Returns [`FundcheckError::InvalidArgument`] if `requested_amount` is
    /// not greater than zero.
    pub fn check<S>(&self, requested_amount: f64, source: &S) -> FundcheckResult<TransferCheckResult>
    where
        S: FundsSource + ?Sized,
    {
        Self::validate_amount(requested_amount)?;

        let current_balance = source.current_balance();

        if current_balance >= requested_amount {
            Ok(TransferCheckResult::Sufficient)
        } else {
            Ok(TransferCheckResult::Insufficient {
                missing_amount: requested_amount - current_balance,
            })
        }
    }
}
