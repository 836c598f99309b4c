//! Stored accounts
//!
//! An account is a named balance. It is the funds source the `check`
//! command reads when given `--account`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::funds::FundsSource;
use super::ids::AccountId;
use crate::error::{FundcheckError, FundcheckResult};

pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a new account after checking its name and balance
    pub fn open(name: &str, balance: f64) -> FundcheckResult<Self> {
        let name = checked_name(name)?;
        checked_balance(balance)?;

        let now = Utc::now();
        Ok(Self {
            id: AccountId::new(),
            name,
            balance,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_balance(&mut self, balance: f64) -> FundcheckResult<()> {
        checked_balance(balance)?;
        self.balance = balance;
        self.touch();
        Ok(())
    }

    pub fn rename(&mut self, name: &str) -> FundcheckResult<()> {
        self.name = checked_name(name)?;
        self.touch();
        Ok(())
    }

    /// Case-insensitive name comparison, the rule used for lookups and
    /// uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl FundsSource for Account {
    fn current_balance(&self) -> f64 {
        self.balance
    }
}

fn checked_name(name: &str) -> FundcheckResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FundcheckError::Validation(
            "account name cannot be empty".into(),
        ));
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(FundcheckError::Validation(format!(
            "account name is {} characters long, the limit is {}",
            len, MAX_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

// Negative balances are allowed (overdrafts); only NaN and infinities are not
fn checked_balance(balance: f64) -> FundcheckResult<()> {
    if balance.is_finite() {
        Ok(())
    } else {
        Err(FundcheckError::Validation(format!(
            "account balance must be a finite number, got {}",
            balance
        )))
    }
}
