//! Account storage
//!
//! Accounts live in a single `accounts.json` file. [`AccountStore`] loads it
//! whole, applies changes in memory and writes it back atomically on
//! [`save`](AccountStore::save).

mod atomic;

pub use atomic::write_json_atomic;

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{FundcheckPaths, Settings};
use crate::error::{FundcheckError, FundcheckResult};
use crate::models::{Account, AccountId};

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    accounts: Vec<Account>,
}

/// In-memory view of `accounts.json`, kept sorted by name
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> FundcheckResult<Self> {
        let path = path.into();

        let accounts = match File::open(&path) {
            Ok(file) => {
                let data: AccountsFile = serde_json::from_reader(BufReader::new(file))
                    .map_err(|e| FundcheckError::Corrupt {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                data.accounts
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let mut store = Self { path, accounts };
        store.sort();
        Ok(store)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look an account up by name (case-insensitive), then by id
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.has_name(identifier))
            .or_else(|| self.accounts.iter().find(|a| a.id.matches(identifier)))
    }

    pub fn insert(&mut self, account: Account) -> FundcheckResult<()> {
        self.ensure_name_free(&account.name, None)?;
        self.accounts.push(account);
        self.sort();
        Ok(())
    }

    /// Apply `change` to the account with `id`, returning the account as it
    /// was before and after. On error the stored account is left untouched.
    pub fn update<F>(&mut self, id: AccountId, change: F) -> FundcheckResult<(Account, Account)>
    where
        F: FnOnce(&mut Account) -> FundcheckResult<()>,
    {
        let index = self.index_of(id)?;
        let before = self.accounts[index].clone();

        let mut after = before.clone();
        change(&mut after)?;
        if !after.has_name(&before.name) {
            self.ensure_name_free(&after.name, Some(id))?;
        }

        self.accounts[index] = after.clone();
        self.sort();
        Ok((before, after))
    }

    pub fn remove(&mut self, id: AccountId) -> FundcheckResult<Account> {
        let index = self.index_of(id)?;
        Ok(self.accounts.remove(index))
    }

    pub fn save(&self) -> FundcheckResult<()> {
        let data = AccountsFile {
            accounts: self.accounts.clone(),
        };
        write_json_atomic(&self.path, &data)
    }

    fn index_of(&self, id: AccountId) -> FundcheckResult<usize> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| FundcheckError::AccountNotFound(id.to_string()))
    }

    fn ensure_name_free(&self, name: &str, except: Option<AccountId>) -> FundcheckResult<()> {
        let taken = self
            .accounts
            .iter()
            .any(|a| Some(a.id) != except && a.has_name(name));
        if taken {
            Err(FundcheckError::DuplicateAccount(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn sort(&mut self) {
        self.accounts.sort_by_key(|a| a.name.to_lowercase());
    }
}

/// Write default settings and an empty account file where they are missing.
///
/// Returns `true` if anything was created. Existing files are not touched.
pub fn initialize(paths: &FundcheckPaths) -> FundcheckResult<bool> {
    let mut created = false;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        created = true;
    }

    if !paths.accounts_file().exists() {
        write_json_atomic(paths.accounts_file(), &AccountsFile::default())?;
        created = true;
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store() -> (TempDir, AccountStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = AccountStore::open(temp_dir.path().join("accounts.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let (temp_dir, store) = empty_store();
        assert!(store.accounts().is_empty());
        assert!(!temp_dir.path().join("accounts.json").exists());
    }

    #[test]
    fn test_save_and_reopen() {
        let (temp_dir, mut store) = empty_store();
        let account = Account::open("Savings", 99.5).unwrap();
        let id = account.id;
        store.insert(account).unwrap();
        store.save().unwrap();

        let reopened = AccountStore::open(temp_dir.path().join("accounts.json")).unwrap();
        let found = reopened.find("savings").unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.balance, 99.5);
    }

    #[test]
    fn test_kept_sorted_by_name() {
        let (_temp_dir, mut store) = empty_store();
        for name in ["charlie", "Alpha", "bravo"] {
            store.insert(Account::open(name, 0.0).unwrap()).unwrap();
        }

        let names: Vec<_> = store.accounts().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_find_by_name_then_id() {
        let (_temp_dir, mut store) = empty_store();
        let account = Account::open("My Checking", 0.0).unwrap();
        let id = account.id;
        store.insert(account).unwrap();

        assert_eq!(store.find(" MY CHECKING ").unwrap().id, id);
        assert_eq!(store.find(&id.to_string()).unwrap().id, id);
        assert_eq!(store.find(&id.as_uuid().to_string()).unwrap().id, id);
        assert!(store.find("other").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let (_temp_dir, mut store) = empty_store();
        store.insert(Account::open("Checking", 0.0).unwrap()).unwrap();

        let err = store
            .insert(Account::open("CHECKING", 0.0).unwrap())
            .unwrap_err();
        assert!(matches!(err, FundcheckError::DuplicateAccount(_)));
    }

    #[test]
    fn test_update_checks_names_and_rolls_back() {
        let (_temp_dir, mut store) = empty_store();
        let a = Account::open("A", 1.0).unwrap();
        let a_id = a.id;
        store.insert(a).unwrap();
        store.insert(Account::open("B", 2.0).unwrap()).unwrap();

        let err = store.update(a_id, |acc| acc.rename("b")).unwrap_err();
        assert!(matches!(err, FundcheckError::DuplicateAccount(_)));
        assert_eq!(store.find("A").unwrap().id, a_id);

        // Changing only the case of its own name is fine
        let (before, after) = store.update(a_id, |acc| acc.rename("a")).unwrap();
        assert_eq!(before.name, "A");
        assert_eq!(after.name, "a");

        assert!(store
            .update(a_id, |acc| acc.set_balance(f64::NAN))
            .unwrap_err()
            .is_validation());
        assert_eq!(store.find("a").unwrap().balance, 1.0);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut store) = empty_store();
        let account = Account::open("Gone", 1.0).unwrap();
        let id = account.id;
        store.insert(account).unwrap();

        assert_eq!(store.remove(id).unwrap().name, "Gone");
        assert!(store.remove(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        std::fs::write(&path, "not json").unwrap();

        let err = AccountStore::open(&path).unwrap_err();
        assert!(matches!(err, FundcheckError::Corrupt { .. }));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FundcheckPaths::at(temp_dir.path().join("fresh"));

        assert!(initialize(&paths).unwrap());
        assert!(paths.settings_file().exists());
        assert!(AccountStore::open(paths.accounts_file())
            .unwrap()
            .accounts()
            .is_empty());

        let mut store = AccountStore::open(paths.accounts_file()).unwrap();
        store.insert(Account::open("Kept", 3.0).unwrap()).unwrap();
        store.save().unwrap();

        assert!(!initialize(&paths).unwrap());
        let reopened = AccountStore::open(paths.accounts_file()).unwrap();
        assert_eq!(reopened.accounts().len(), 1);
    }
}
