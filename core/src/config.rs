//! Run configuration.
//!
//! All parameters are plain values: the generator never reads the
//! environment or the clock. `validate()` runs before any generation and
//! rejects bad input outright; there is no partial output on failure.

use crate::error::{GenError, GenResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub num_customers: usize,
    pub num_products: usize,
    pub num_cost_centers: usize,

    /// Probability that a customer churns in any given year.
    pub annual_churn_rate: f64,
    /// Target average gross margin; products price their direct cost
    /// ratio around `1 - base_margin`.
    pub base_margin: f64,
    /// OPEX posted per month as a share of that month's revenue.
    pub opex_ratio: f64,

    /// Per-year demand multipliers (external shocks). Missing years
    /// default to 1.0.
    pub macro_shocks: HashMap<i32, f64>,
    /// Per-quarter revenue multipliers (1..=4). Missing quarters default
    /// to 1.0.
    pub revenue_seasonality: HashMap<u32, f64>,

    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
            num_customers: 3000,
            num_products: 20,
            num_cost_centers: 6,
            annual_churn_rate: 0.12,
            base_margin: 0.45,
            opex_ratio: 0.25,
            // COVID dip, recovery, inflation spike, stabilization.
            macro_shocks: HashMap::from([
                (2020, 0.80),
                (2021, 0.90),
                (2022, 1.15),
                (2023, 1.05),
                (2024, 1.02),
            ]),
            revenue_seasonality: HashMap::from([(1, 1.00), (2, 0.95), (3, 1.05), (4, 1.20)]),
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file. Absent fields fall back to the
    /// defaults above.
    pub fn load(path: &str) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on malformed parameters before any table is built.
    pub fn validate(&self) -> GenResult<()> {
        if self.start_date > self.end_date {
            return Err(GenError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        for (name, value) in [
            ("num_customers", self.num_customers),
            ("num_products", self.num_products),
            ("num_cost_centers", self.num_cost_centers),
        ] {
            if value == 0 {
                return Err(GenError::NonPositiveCount { name, value });
            }
        }
        for (name, value) in [
            ("annual_churn_rate", self.annual_churn_rate),
            ("base_margin", self.base_margin),
            ("opex_ratio", self.opex_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }

    pub fn macro_multiplier(&self, year: i32) -> f64 {
        self.macro_shocks.get(&year).copied().unwrap_or(1.0)
    }

    pub fn seasonal_multiplier(&self, quarter: u32) -> f64 {
        self.revenue_seasonality
            .get(&quarter)
            .copied()
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GeneratorConfig::default().validate().expect("default config");
    }

    #[test]
    fn reversed_dates_rejected() {
        let config = GeneratorConfig {
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn zero_counts_rejected() {
        let config = GeneratorConfig {
            num_products: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::NonPositiveCount { name: "num_products", .. })
        ));
    }

    #[test]
    fn out_of_range_rates_rejected() {
        let config = GeneratorConfig {
            opex_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::RateOutOfRange { name: "opex_ratio", .. })
        ));
    }

    #[test]
    fn missing_multiplier_keys_default_to_one() {
        let config = GeneratorConfig::default();
        assert_eq!(config.macro_multiplier(1999), 1.0);
        assert_eq!(config.seasonal_multiplier(4), 1.20);
    }
}
