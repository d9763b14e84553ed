//! Meter reading domain entity

use chrono::{DateTime, Utc};

/// A meter snapshot with cumulative counters for both tariffs.
///
/// `value_ht` / `value_nt` are cumulative meter counters; consumption is
/// always the delta between two chronologically ordered readings, never
/// the absolute value.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: i32,
    pub date: DateTime<Utc>,
    /// High-tariff counter (kWh, cumulative)
    pub value_ht: f64,
    /// Low-tariff counter (kWh, cumulative)
    pub value_nt: f64,
    pub comment: Option<String>,
    /// Set when the reading was included in a committed bill period
    pub billed_at: Option<DateTime<Utc>>,
    /// Back-reference to the bill period, set together with `billed_at`
    pub bill_period_id: Option<i32>,
}

impl Reading {
    /// New unbilled reading; `id` is assigned by the store on create.
    pub fn new(
        date: DateTime<Utc>,
        value_ht: f64,
        value_nt: f64,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            date,
            value_ht,
            value_nt,
            comment,
            billed_at: None,
            bill_period_id: None,
        }
    }

    pub fn is_billed(&self) -> bool {
        self.billed_at.is_some()
    }
}

// ── Tests ──────────────────────────────────────────────────────
