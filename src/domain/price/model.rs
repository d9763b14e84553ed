//! Price configuration entity and date-based resolution

use chrono::{DateTime, Utc};

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// A tariff valid from a point in time onward.
///
/// Configs are immutable once created; a price change is a new row with a
/// later `valid_from`, never an edit in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceConfig {
    pub id: i32,
    /// Price per kWh, high tariff (currency units)
    pub price_ht: f64,
    /// Price per kWh, low tariff (currency units)
    pub price_nt: f64,
    /// Monthly base fee (currency units)
    pub base_fee: f64,
    /// Percentage (0–100) of the base fee attributed to this billing party.
    /// `None` means the 50/50 default.
    pub base_fee_split: Option<f64>,
    pub valid_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PriceConfig {
    pub fn split_percent(&self) -> f64 {
        self.base_fee_split.unwrap_or(50.0)
    }
}

/// Select the price config valid at `date`.
///
/// `configs` must be sorted by `valid_from` descending. Returns the first
/// config with `valid_from <= date`. A date predating every config falls
/// back to the oldest config rather than failing: a price lookup is never
/// denied while any config exists. Errs only on an empty set.
pub fn resolve_at<'a>(
    date: DateTime<Utc>,
    configs: &'a [PriceConfig],
) -> DomainResult<&'a PriceConfig> {
    if configs.is_empty() {
        return Err(DomainError::NoPriceConfigured);
    }
    Ok(configs
        .iter()
        .find(|c| c.valid_from <= date)
        .unwrap_or_else(|| &configs[configs.len() - 1]))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn config(id: i32, valid_from: DateTime<Utc>) -> PriceConfig {
        PriceConfig {
            id,
            price_ht: 0.30,
            price_nt: 0.20,
            base_fee: 12.0,
            base_fee_split: Some(50.0),
            valid_from,
            created_at: valid_from,
        }
    }

    /// Sorted descending by valid_from, as the repository returns them.
    fn configs() -> Vec<PriceConfig> {
        vec![
            config(3, date(2024, 6, 1)),
            config(2, date(2024, 1, 1)),
            config(1, date(2023, 1, 1)),
        ]
    }

    #[test]
    fn picks_config_with_greatest_valid_from_before_date() {
        let cs = configs();
        assert_eq!(resolve_at(date(2024, 3, 15), &cs).unwrap().id, 2);
        assert_eq!(resolve_at(date(2024, 7, 1), &cs).unwrap().id, 3);
        assert_eq!(resolve_at(date(2023, 5, 1), &cs).unwrap().id, 1);
    }

    #[test]
    fn valid_from_boundary_is_inclusive() {
        let cs = configs();
        assert_eq!(resolve_at(date(2024, 6, 1), &cs).unwrap().id, 3);
    }

    #[test]
    fn date_before_all_configs_falls_back_to_oldest() {
        let cs = configs();
        assert_eq!(resolve_at(date(2020, 1, 1), &cs).unwrap().id, 1);
    }

    #[test]
    fn empty_config_set_is_an_error() {
        let err = resolve_at(date(2024, 1, 1), &[]).unwrap_err();
        assert!(matches!(err, DomainError::NoPriceConfigured));
    }

    #[test]
    fn split_percent_defaults_to_fifty() {
        let mut c = config(1, date(2024, 1, 1));
        c.base_fee_split = None;
        assert_eq!(c.split_percent(), 50.0);
        c.base_fee_split = Some(30.0);
        assert_eq!(c.split_percent(), 30.0);
    }
}
