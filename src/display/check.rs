//! Transfer check output

use crate::config::Settings;
use crate::models::TransferCheckResult;
use crate::services::TransferCheck;

/// Human-readable summary of a transfer check
pub fn format_check_report(report: &TransferCheck, settings: &Settings) -> String {
    let money = |v: f64| settings.format_amount(v);

    let mut output = String::new();

    if let Some(name) = &report.account_name {
        output.push_str(&format!("Account:   {}\n", name));
    }
    output.push_str(&format!("Requested: {}\n", money(report.requested_amount)));
    output.push_str(&format!("Balance:   {}\n", money(report.current_balance)));

    match report.result {
        TransferCheckResult::Sufficient => {
            output.push_str("Result:    Sufficient funds\n");
        }
        TransferCheckResult::Insufficient { missing_amount } => {
            output.push_str(&format!(
                "Result:    Insufficient funds (missing {})\n",
                money(missing_amount)
            ));
        }
    }

    output
}
