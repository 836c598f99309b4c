//! User settings
//!
//! Display preferences and the default behaviour of `fundcheck check`,
//! stored as `config.json` in the data directory.

use serde::{Deserialize, Serialize};

use super::paths::FundcheckPaths;
use crate::error::{FundcheckError, FundcheckResult};
use crate::storage::write_json_atomic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    pub currency_symbol: String,

    pub decimal_places: u8,

    /// Treat an insufficient check as a failure even without `--strict`
    pub strict_checks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            currency_symbol: "$".into(),
            decimal_places: 2,
            strict_checks: false,
        }
    }
}

impl Settings {
    /// Read `config.json`, falling back to defaults when it does not exist yet
    pub fn load(paths: &FundcheckPaths) -> FundcheckResult<Self> {
        let path = paths.settings_file();
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents)
            .map_err(|e| FundcheckError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, paths: &FundcheckPaths) -> FundcheckResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }

    pub fn format_amount(&self, value: f64) -> String {
        crate::models::format_amount(value, &self.currency_symbol, self.decimal_places)
    }
}
