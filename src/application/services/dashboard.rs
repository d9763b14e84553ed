//! Dashboard queries
//!
//! Aggregates the reading history into chart data and headline stats. All
//! intervals are priced at the current config; historical accuracy is the
//! job of the committed bill periods, the chart is a live trend view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DomainResult, PriceConfig, Reading, RepositoryProvider};

/// One consumption/cost interval between two consecutive readings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartPoint {
    /// Date of the interval's end reading
    pub date: DateTime<Utc>,
    /// High-tariff consumption in the interval (kWh)
    pub ht: f64,
    /// Low-tariff consumption in the interval (kWh)
    pub nt: f64,
    /// Interval cost at the current price (energy only, no base fee)
    pub cost: f64,
}

/// Headline stats plus the chart series.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardData {
    pub readings_count: usize,
    /// Cost of the most recent interval, if any
    pub last_interval_cost: Option<f64>,
    pub latest_reading_date: Option<DateTime<Utc>>,
    pub latest_value_ht: Option<f64>,
    pub latest_value_nt: Option<f64>,
    pub current_price_ht: Option<f64>,
    pub current_price_nt: Option<f64>,
    pub chart: Vec<ChartPoint>,
}

/// Service for dashboard queries
pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn overview(&self) -> DomainResult<DashboardData> {
        let readings = self.repos.readings().find_all().await?;
        let current_price = self.repos.prices().find_latest().await?;

        let chart = build_chart(&readings, current_price.as_ref());
        let last_interval_cost = chart.last().map(|p| p.cost);
        let latest = readings.last();

        Ok(DashboardData {
            readings_count: readings.len(),
            last_interval_cost,
            latest_reading_date: latest.map(|r| r.date),
            latest_value_ht: latest.map(|r| r.value_ht),
            latest_value_nt: latest.map(|r| r.value_nt),
            current_price_ht: current_price.as_ref().map(|p| p.price_ht),
            current_price_nt: current_price.as_ref().map(|p| p.price_nt),
            chart,
        })
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Per-interval deltas over consecutive reading pairs, priced at the
/// current config. Needs at least two readings and a price.
fn build_chart(readings: &[Reading], price: Option<&PriceConfig>) -> Vec<ChartPoint> {
    let Some(price) = price else {
        return Vec::new();
    };

    readings
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let delta_ht = curr.value_ht - prev.value_ht;
            let delta_nt = curr.value_nt - prev.value_nt;
            let cost = delta_ht * price.price_ht + delta_nt * price.price_nt;
            ChartPoint {
                date: curr.date,
                ht: round1(finite_or_zero(delta_ht)),
                nt: round1(finite_or_zero(delta_nt)),
                cost: round2(finite_or_zero(cost)),
            }
        })
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────
