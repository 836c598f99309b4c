//! Account history
//!
//! Every change to a stored account is appended to `history.jsonl`, one
//! JSON object per line. Transfer checks are reads and are never recorded.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FundcheckError, FundcheckResult};
use crate::models::{Account, AccountId};

/// What happened to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    Opened { balance: f64 },
    BalanceSet { from: f64, to: f64 },
    Renamed { from: String, to: String },
    Deleted { balance: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub account_id: AccountId,
    /// Account name at the time of the change
    pub account: String,
    pub change: Change,
}

impl HistoryEntry {
    pub fn new(account: &Account, change: Change) -> Self {
        Self {
            at: Utc::now(),
            account_id: account.id,
            account: account.name.clone(),
            change,
        }
    }
}

/// Append-only history file
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, entry: &HistoryEntry) -> FundcheckResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// All entries, oldest first. A missing file is an empty history.
    pub fn entries(&self) -> FundcheckResult<Vec<HistoryEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| FundcheckError::Corrupt {
                path: self.path.clone(),
                message: format!("line {}: {}", index + 1, e),
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The newest `limit` entries, optionally for one account, oldest first
    pub fn recent(
        &self,
        account_id: Option<AccountId>,
        limit: usize,
    ) -> FundcheckResult<Vec<HistoryEntry>> {
        let mut entries = self.entries()?;
        if let Some(id) = account_id {
            entries.retain(|e| e.account_id == id);
        }

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }
}
