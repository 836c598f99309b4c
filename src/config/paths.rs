//! Where fundcheck keeps its files
//!
//! The data directory is, in order of preference:
//!
//! 1. `--data-dir` or the `FUNDCHECK_DATA_DIR` environment variable
//! 2. `$XDG_CONFIG_HOME/fundcheck`, then `~/.config/fundcheck` (Unix)
//! 3. `%APPDATA%\fundcheck` (Windows)
//!
//! Resolving a location never touches the filesystem. Directories are
//! created by whichever write needs them first.

use std::path::{Path, PathBuf};

use crate::error::{FundcheckError, FundcheckResult};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FUNDCHECK_DATA_DIR";

const APP_DIR: &str = "fundcheck";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundcheckPaths {
    root: PathBuf,
}

impl FundcheckPaths {
    /// Use `explicit` if given and non-empty, otherwise the platform default
    pub fn resolve(explicit: Option<PathBuf>) -> FundcheckResult<Self> {
        match explicit.filter(|p| !p.as_os_str().is_empty()) {
            Some(root) => Ok(Self { root }),
            None => platform_default().map(|root| Self { root }),
        }
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.root.join("accounts.json")
    }

    /// JSON-lines record of account changes
    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.jsonl")
    }
}

#[cfg(not(windows))]
fn platform_default() -> FundcheckResult<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR))
        .ok_or_else(|| {
            FundcheckError::Config(format!(
                "cannot locate a data directory; set HOME or {}",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(windows)]
fn platform_default() -> FundcheckResult<PathBuf> {
    std::env::var_os("APPDATA")
        .filter(|v| !v.is_empty())
        .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
        .ok_or_else(|| {
            FundcheckError::Config(format!(
                "cannot locate a data directory; set APPDATA or {}",
                DATA_DIR_ENV
            ))
        })
}
