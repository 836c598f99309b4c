//! Transfer check outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a requested transfer amount against a balance.
///
/// `Insufficient` carries a strictly positive shortfall for any finite
/// balance. A source reporting NaN yields a NaN shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransferCheckResult {
    /// The balance covers the requested amount
    Sufficient,
    /// The balance falls short by `missing_amount`
    Insufficient { missing_amount: f64 },
}

impl TransferCheckResult {
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Self::Sufficient)
    }

    /// The shortfall, if any
    pub fn missing_amount(&self) -> Option<f64> {
        match self {
            Self::Sufficient => None,
            Self::Insufficient { missing_amount } => Some(*missing_amount),
        }
    }
}

impl fmt::Display for TransferCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sufficient => write!(f, "Sufficient funds"),
            Self::Insufficient { missing_amount } => {
                write!(f, "Insufficient funds (missing {})", missing_amount)
            }
        }
    }
}
