//! Billing period suggestions
//!
//! Proposes candidate (from, to) reading pairs for the next bill from the
//! full reading history. Suggestions are informational only; a custom pair
//! still has to pass period validation before commit.

use chrono::{DateTime, Months, Utc};

use crate::domain::reading::Reading;

/// A suggested billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSuggestion {
    /// Stable key: "all" or "last3"
    pub key: String,
    pub label: String,
    pub from_id: i32,
    pub to_id: i32,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

/// Suggestion result, including the open readings the caller can combine
/// into a custom period.
#[derive(Debug, Clone, Default)]
pub struct PeriodSuggestions {
    pub periods: Vec<PeriodSuggestion>,
    pub unbilled: Vec<Reading>,
    /// The anchor reading suggestions start from, when one exists.
    pub from_reading: Option<Reading>,
    /// Set when no suggestion can be made, explaining why.
    pub message: Option<String>,
}

/// Build suggestions from the full reading history.
///
/// The anchor ("from") reading is the most recently billed reading, or the
/// earliest unbilled reading when nothing has ever been billed. `now` is
/// passed in so the "last 3 months" window is deterministic under test.
pub fn suggest_periods(all_readings: &[Reading], now: DateTime<Utc>) -> PeriodSuggestions {
    let mut unbilled: Vec<Reading> = all_readings
        .iter()
        .filter(|r| !r.is_billed())
        .cloned()
        .collect();
    unbilled.sort_by_key(|r| r.date);

    if unbilled.is_empty() {
        return PeriodSuggestions {
            message: Some("No open readings available.".to_string()),
            ..Default::default()
        };
    }

    let last_billed = all_readings
        .iter()
        .filter(|r| r.is_billed())
        .max_by_key(|r| r.billed_at);

    if last_billed.is_none() && unbilled.len() < 2 {
        return PeriodSuggestions {
            unbilled,
            message: Some("At least 2 readings are required.".to_string()),
            ..Default::default()
        };
    }

    let from = last_billed.unwrap_or(&unbilled[0]).clone();
    let mut periods = Vec::new();

    // "All open": anchor to the newest unbilled reading
    if let Some(to) = unbilled.last() {
        if from.date < to.date {
            let n = unbilled.len();
            periods.push(PeriodSuggestion {
                key: "all".to_string(),
                label: format!("All open ({} reading{})", n, if n > 1 { "s" } else { "" }),
                from_id: from.id,
                to_id: to.id,
                from_date: from.date,
                to_date: to.date,
            });
        }
    }

    // "Last 3 months": anchor to the newest unbilled reading in the window
    let three_months_ago = now.checked_sub_months(Months::new(3)).unwrap_or(now);
    if let Some(to) = unbilled.iter().filter(|r| r.date >= three_months_ago).next_back() {
        if from.date < to.date {
            periods.push(PeriodSuggestion {
                key: "last3".to_string(),
                label: "Last 3 months".to_string(),
                from_id: from.id,
                to_id: to.id,
                from_date: from.date,
                to_date: to.date,
            });
        }
    }

    PeriodSuggestions {
        periods,
        unbilled,
        from_reading: Some(from),
        message: None,
    }
}

// ── Tests ──────────────────────────────────────────────────────
