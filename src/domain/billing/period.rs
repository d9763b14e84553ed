//! Committed bill period entity

use chrono::{DateTime, Utc};

/// A committed billing event spanning two boundary readings.
///
/// Date ranges of distinct bill periods never overlap. A bill period is
/// created atomically with marking its readings billed and is never
/// mutated or deleted in normal operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BillPeriod {
    pub id: i32,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub from_reading_id: i32,
    pub to_reading_id: i32,
    pub total_cost: f64,
    pub energy_cost: f64,
    pub base_fee_cost: f64,
    pub billing_months: i32,
    pub diff_ht: f64,
    pub diff_nt: f64,
    /// Commit timestamp
    pub sent_at: DateTime<Utc>,
    /// Delivery channel tag, e.g. "telegram"
    pub sent_via: String,
}

impl BillPeriod {
    /// Inclusive overlap test against a proposed `[from, to]` range.
    ///
    /// A proposed period exactly touching this period's boundary date
    /// counts as overlapping.
    pub fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.from_date <= to && self.to_date >= from
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn period(from: DateTime<Utc>, to: DateTime<Utc>) -> BillPeriod {
        BillPeriod {
            id: 1,
            from_date: from,
            to_date: to,
            from_reading_id: 1,
            to_reading_id: 2,
            total_cost: 0.0,
            energy_cost: 0.0,
            base_fee_cost: 0.0,
            billing_months: 0,
            diff_ht: 0.0,
            diff_nt: 0.0,
            sent_at: to,
            sent_via: "telegram".to_string(),
        }
    }

    #[test]
    fn crossing_ranges_overlap() {
        let p = period(date(2024, 1, 1), date(2024, 3, 1));
        assert!(p.overlaps(date(2024, 2, 1), date(2024, 4, 1)));
        assert!(p.overlaps(date(2023, 12, 1), date(2024, 1, 15)));
        assert!(p.overlaps(date(2023, 12, 1), date(2024, 4, 1)));
        assert!(p.overlaps(date(2024, 1, 15), date(2024, 2, 15)));
    }

    #[test]
    fn touching_boundaries_count_as_overlap() {
        let p = period(date(2024, 1, 1), date(2024, 3, 1));
        assert!(p.overlaps(date(2024, 3, 1), date(2024, 5, 1)));
        assert!(p.overlaps(date(2023, 11, 1), date(2024, 1, 1)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let p = period(date(2024, 1, 1), date(2024, 3, 1));
        assert!(!p.overlaps(date(2024, 3, 2), date(2024, 5, 1)));
        assert!(!p.overlaps(date(2023, 11, 1), date(2023, 12, 31)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = period(date(2024, 1, 1), date(2024, 3, 1));
        let b = period(date(2024, 2, 1), date(2024, 4, 1));
        assert_eq!(
            a.overlaps(b.from_date, b.to_date),
            b.overlaps(a.from_date, a.to_date)
        );
    }
}
