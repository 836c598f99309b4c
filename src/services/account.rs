//! Account management
//!
//! Every change is saved to the store before it is written to the history,
//! so the history never mentions a change that did not persist.

use crate::error::{FundcheckError, FundcheckResult};
use crate::history::{Change, HistoryEntry, HistoryLog};
use crate::models::Account;
use crate::storage::AccountStore;

pub struct AccountService<'a> {
    store: &'a mut AccountStore,
    history: &'a HistoryLog,
}

impl<'a> AccountService<'a> {
    pub fn new(store: &'a mut AccountStore, history: &'a HistoryLog) -> Self {
        Self { store, history }
    }

    pub fn create(&mut self, name: &str, balance: f64) -> FundcheckResult<Account> {
        let account = Account::open(name, balance)?;
        self.store.insert(account.clone())?;
        self.store.save()?;

        self.history
            .append(&HistoryEntry::new(&account, Change::Opened { balance }))?;
        Ok(account)
    }

    /// Resolve an account by name or id
    pub fn find(&self, identifier: &str) -> FundcheckResult<&Account> {
        self.store
            .find(identifier)
            .ok_or_else(|| FundcheckError::AccountNotFound(identifier.trim().to_string()))
    }

    pub fn list(&self) -> &[Account] {
        self.store.accounts()
    }

    /// Returns the account before and after the rename
    pub fn rename(&mut self, identifier: &str, new_name: &str) -> FundcheckResult<(Account, Account)> {
        let id = self.find(identifier)?.id;
        let (before, after) = self.store.update(id, |account| account.rename(new_name))?;
        self.store.save()?;

        let change = Change::Renamed {
            from: before.name.clone(),
            to: after.name.clone(),
        };
        self.history.append(&HistoryEntry::new(&after, change))?;
        Ok((before, after))
    }

    /// Returns the account before and after the new balance was applied
    pub fn set_balance(&mut self, identifier: &str, balance: f64) -> FundcheckResult<(Account, Account)> {
        let id = self.find(identifier)?.id;
        let (before, after) = self
            .store
            .update(id, |account| account.set_balance(balance))?;
        self.store.save()?;

        let change = Change::BalanceSet {
            from: before.balance,
            to: after.balance,
        };
        self.history.append(&HistoryEntry::new(&after, change))?;
        Ok((before, after))
    }

    pub fn delete(&mut self, identifier: &str) -> FundcheckResult<Account> {
        let id = self.find(identifier)?.id;
        let account = self.store.remove(id)?;
        self.store.save()?;

        let change = Change::Deleted {
            balance: account.balance,
        };
        self.history.append(&HistoryEntry::new(&account, change))?;
        Ok(account)
    }
}
