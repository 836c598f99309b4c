//! Parsing and formatting of user-entered amounts
//!
//! Amounts are plain `f64` values. Users type them in a handful of familiar
//! shapes: "100", "100.50", "$1,250.00", "-5".

use crate::error::{FundcheckError, FundcheckResult};

/// Currency symbols accepted in front of an amount. Longer symbols first so
/// "R$" is not read as a stray "R".
const CURRENCY_SYMBOLS: &[&str] = &["US$", "R$", "$", "€", "£", "¥", "₹"];

/// Parse an amount typed by a user
///
/// At most one known currency symbol is stripped, and the sign may sit
/// before or after it. Commas and underscores are read as digit grouping.
/// Anything else that is not a plain decimal number is rejected.
pub fn parse_amount(input: &str) -> FundcheckResult<f64> {
    let invalid = || FundcheckError::Validation(format!("Invalid amount: '{}'", input.trim()));

    let s = input.trim();
    let (mut negative, s) = split_sign(s);

    let s = strip_currency(s).trim_start();
    let s = match split_sign(s) {
        (false, rest) => rest,
        (true, rest) if !negative => {
            negative = true;
            rest
        }
        (true, _) => return Err(invalid()),
    };

    let digits: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();
    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let value: f64 = digits.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(if negative { -value } else { value })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn strip_currency(s: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find_map(|symbol| s.strip_prefix(symbol))
        .unwrap_or(s)
}

/// Format an amount with a currency symbol, e.g. `$1250.00` or `-$5.00`
pub fn format_amount(value: f64, symbol: &str, decimals: u8) -> String {
    let precision = usize::from(decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{:.*}", sign, symbol, precision, value.abs())
}
