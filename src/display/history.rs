//! History output

use crate::config::Settings;
use crate::history::{Change, HistoryEntry};

/// One line per entry: `2024-05-01 10:00  Checking  balance $100.00 -> $40.00`
pub fn format_history(entries: &[HistoryEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}  {}\n",
                entry.at.format("%Y-%m-%d %H:%M"),
                entry.account,
                describe(&entry.change, settings)
            )
        })
        .collect()
}

fn describe(change: &Change, settings: &Settings) -> String {
    match change {
        Change::Opened { balance } => format!("opened with {}", settings.format_amount(*balance)),
        Change::BalanceSet { from, to } => format!(
            "balance {} -> {}",
            settings.format_amount(*from),
            settings.format_amount(*to)
        ),
        Change::Renamed { from, to } => format!("renamed from {} to {}", from, to),
        Change::Deleted { balance } => {
            format!("deleted at {}", settings.format_amount(*balance))
        }
    }
}
