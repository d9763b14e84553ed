//! Period cost calculation
//!
//! Computes consumption and cost between two meter readings under a price
//! config. Calculation is best-effort: callers may probe with incomplete
//! data, so a missing input yields a zeroed result instead of an error.

use chrono::Datelike;

use crate::domain::price::PriceConfig;
use crate::domain::reading::Reading;

/// Result of a period cost calculation.
///
/// Monetary fields are rounded to 2 decimal places, consumption diffs to 1,
/// once at the output boundary. The applied prices are carried along so a
/// report can show what the numbers were based on.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCost {
    pub total: f64,
    pub energy_cost: f64,
    pub base_fee_cost: f64,
    pub billing_months: i32,
    pub diff_ht: f64,
    pub diff_nt: f64,
    /// Prices the calculation was based on; `None` for a zeroed result.
    pub applied: Option<AppliedPrices>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPrices {
    pub price_ht: f64,
    pub price_nt: f64,
    pub base_fee: f64,
    pub base_fee_split: f64,
}

impl PeriodCost {
    fn zeroed() -> Self {
        Self {
            total: 0.0,
            energy_cost: 0.0,
            base_fee_cost: 0.0,
            billing_months: 0,
            diff_ht: 0.0,
            diff_nt: 0.0,
            applied: None,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Whole calendar months between two dates, ignoring the day-of-month.
///
/// Jan 31 → Feb 1 counts as 1 month; any span within one calendar month
/// counts as 0. Clamped to 0 when `curr` precedes `prev`.
pub fn billing_months(prev: &Reading, curr: &Reading) -> i32 {
    let months = (curr.date.year() - prev.date.year()) * 12
        + (curr.date.month() as i32 - prev.date.month() as i32);
    months.max(0)
}

/// Compute the cost of the period between two readings.
///
/// Negative consumption deltas (meter replacement, entry errors) are not
/// rejected; they propagate arithmetically.
pub fn calculate_period_cost(
    prev: Option<&Reading>,
    curr: Option<&Reading>,
    price: Option<&PriceConfig>,
) -> PeriodCost {
    let (Some(prev), Some(curr), Some(price)) = (prev, curr, price) else {
        return PeriodCost::zeroed();
    };

    let diff_ht = curr.value_ht - prev.value_ht;
    let diff_nt = curr.value_nt - prev.value_nt;

    let months = billing_months(prev, curr);

    let split = price.split_percent();
    let base_fee_cost = price.base_fee * f64::from(months) * (split / 100.0);

    let energy_cost = diff_ht * price.price_ht + diff_nt * price.price_nt;
    let total = energy_cost + base_fee_cost;

    PeriodCost {
        total: round2(total),
        energy_cost: round2(energy_cost),
        base_fee_cost: round2(base_fee_cost),
        billing_months: months,
        diff_ht: round1(diff_ht),
        diff_nt: round1(diff_nt),
        applied: Some(AppliedPrices {
            price_ht: price.price_ht,
            price_nt: price.price_nt,
            base_fee: price.base_fee,
            base_fee_split: split,
        }),
    }
}

// ── Tests ──────────────────────────────────────────────────────
