//! Data directory resolution and user settings

pub mod paths;
pub mod settings;

pub use paths::{FundcheckPaths, DATA_DIR_ENV};
pub use settings::Settings;
