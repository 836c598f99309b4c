//! Transfer check CLI command

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::format_check_report;
use crate::error::{FundcheckError, FundcheckResult};
use crate::models::parse_amount;
use crate::services::{TransferCheck, TransferCheckService};
use crate::storage::AccountStore;

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON object
    Json,
    /// YAML document
    Yaml,
}

/// Arguments for `fundcheck check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Amount to transfer (e.g., "100", "100.50", "$1,250")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Account name or ID to check against
    #[arg(short, long, conflicts_with = "balance", required_unless_present = "balance")]
    pub account: Option<String>,

    /// Check against a literal balance instead of a stored account
    #[arg(short, long, allow_hyphen_values = true)]
    pub balance: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when funds are insufficient
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Only `--account` checks read the account store
    pub fn needs_store(&self) -> bool {
        self.account.is_some()
    }
}

/// Outcome of the check command, used by `main` to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Sufficient,
    Insufficient,
}

/// Run a transfer check and print the result
pub fn handle_check_command(
    store: Option<&AccountStore>,
    settings: &Settings,
    args: &CheckArgs,
) -> FundcheckResult<CheckOutcome> {
    let requested = parse_amount(&args.amount)?;
    let service = TransferCheckService::new();

    let report = match (&args.account, &args.balance, store) {
        (Some(account), _, Some(store)) => service.check_account(store, account, requested)?,
        (None, Some(balance), _) => service.check_balance(parse_amount(balance)?, requested)?,
        _ => {
            return Err(FundcheckError::InvalidArgument(
                "specify an account with --account or a balance with --balance".into(),
            ))
        }
    };

    print!("{}", render(&report, settings, args.format)?);

    Ok(if report.result.is_sufficient() {
        CheckOutcome::Sufficient
    } else {
        CheckOutcome::Insufficient
    })
}

fn render(report: &TransferCheck, settings: &Settings, format: OutputFormat) -> FundcheckResult<String> {
    Ok(match format {
        OutputFormat::Text => format_check_report(report, settings),
        OutputFormat::Json => serde_json::to_string_pretty(report)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}
