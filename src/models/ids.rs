//! Strongly-typed account identifier
//!
//! Wrapping the UUID keeps account ids from being confused with arbitrary
//! strings or other UUIDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "acc-";

/// Unique identifier of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short prefix shown in listings, e.g. `acc-1a2b3c4d`
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether `s` names this id, either as a full UUID or the short form
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim();
        if let Ok(uuid) = Uuid::parse_str(s) {
            return uuid == self.0;
        }
        s.eq_ignore_ascii_case(&self.short())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}
