//! Transfer checks against stored accounts or literal balances

use serde::{Deserialize, Serialize};

use crate::error::{FundcheckError, FundcheckResult};
use crate::models::{AccountId, FixedBalance, FundsSource, TransferCheckResult};
use crate::storage::AccountStore;

use super::balance_checker::BalanceChecker;

/// Report of a single transfer check, suitable for display or serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferCheck {
    /// Account that was checked, if the balance came from storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,

    pub requested_amount: f64,

    /// Balance as read for this check
    pub current_balance: f64,

    pub result: TransferCheckResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransferCheckService {
    checker: BalanceChecker,
}

impl TransferCheckService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the account named or identified by `identifier` can
    /// cover `requested_amount`.
    ///
    /// Every stored account is eligible; there is no notion of a closed
    /// account short of deleting it. The amount is validated before the
    /// store is searched, so an invalid amount is reported even when the
    /// account does not exist.
    pub fn check_account(
        &self,
        store: &AccountStore,
        identifier: &str,
        requested_amount: f64,
    ) -> FundcheckResult<TransferCheck> {
        BalanceChecker::validate_amount(requested_amount)?;

        let account = store
            .find(identifier)
            .ok_or_else(|| FundcheckError::AccountNotFound(identifier.trim().to_string()))?;

        let mut report = self.check_source(requested_amount, account)?;
        report.account_name = Some(account.name.clone());
        report.account_id = Some(account.id);
        Ok(report)
    }

    /// Check a literal balance that does not belong to any stored account
    pub fn check_balance(&self, balance: f64, requested_amount: f64) -> FundcheckResult<TransferCheck> {
        self.check_source(requested_amount, &FixedBalance(balance))
    }

    fn check_source<S>(&self, requested_amount: f64, source: &S) -> FundcheckResult<TransferCheck>
    where
        S: FundsSource + ?Sized,
    {
        BalanceChecker::validate_amount(requested_amount)?;

        // One reading, shared by the decision and the report
        let snapshot = FixedBalance(source.current_balance());
        let result = self.checker.check(requested_amount, &snapshot)?;

        Ok(TransferCheck {
            account_name: None,
            account_id: None,
            requested_amount,
            current_balance: snapshot.0,
            result,
        })
    }
}
