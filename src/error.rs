//! Error type shared by the library and the binary

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundcheckError {
    /// An argument is outside the operation's domain, e.g. a transfer of zero
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// User input or a model failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A data file exists but could not be understood
    #[error("Corrupt data in {}: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FundcheckError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}

pub type FundcheckResult<T> = Result<T, FundcheckError>;
