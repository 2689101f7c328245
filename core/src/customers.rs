//! Customer lifecycle simulation.
//!
//! Each customer gets an acquisition date uniform over the first three
//! years of the calendar span (a fixed window regardless of total span;
//! see DESIGN.md), then a year-by-year Bernoulli churn search starting at the
//! acquisition year. A churn candidate landing on or before the acquisition
//! date is discarded rather than re-drawn: that customer never churns.
//! `is_active` is always derived from `churn_date`, never sampled.

use crate::calendar::Calendar;
use crate::config::GeneratorConfig;
use crate::rng::GeneratorRng;
use crate::types::CustomerId;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const ACQUISITION_WINDOW_MONTHS: u32 = 36;

pub const RISK_SCORE_MEAN: f64 = 600.0;
pub const RISK_SCORE_SD: f64 = 100.0;
pub const RISK_SCORE_MIN: f64 = 300.0;
pub const RISK_SCORE_MAX: f64 = 850.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Retail,
    #[serde(rename = "SME")]
    Sme,
    Corporate,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Retail => "Retail",
            Segment::Sme => "SME",
            Segment::Corporate => "Corporate",
        }
    }

    /// Baseline expected transactions per month for one customer.
    pub fn monthly_txn_rate(self) -> f64 {
        match self {
            Segment::Retail => 0.4,
            Segment::Sme => 0.8,
            Segment::Corporate => 1.2,
        }
    }

    pub fn revenue_multiplier(self) -> f64 {
        match self {
            Segment::Retail => 1.0,
            Segment::Sme => 1.2,
            Segment::Corporate => 1.5,
        }
    }

    pub fn cost_multiplier(self) -> f64 {
        match self {
            Segment::Retail => 1.00,
            Segment::Sme => 0.95,
            Segment::Corporate => 0.88,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    West,
    East,
    Central,
    International,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::West => "West",
            Region::East => "East",
            Region::Central => "Central",
            Region::International => "International",
        }
    }
}

pub const SEGMENT_WEIGHTS: &[(Segment, f64)] = &[
    (Segment::Retail, 0.6),
    (Segment::Sme, 0.3),
    (Segment::Corporate, 0.1),
];

pub const REGION_WEIGHTS: &[(Region, f64)] = &[
    (Region::North, 0.20),
    (Region::South, 0.25),
    (Region::West, 0.20),
    (Region::East, 0.15),
    (Region::Central, 0.15),
    (Region::International, 0.05),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub segment: Segment,
    pub region: Region,
    pub risk_score: f64,
    pub acquisition_date: NaiveDate,
    pub churn_date: Option<NaiveDate>,
    pub is_active: bool,
}

pub fn generate_customers(
    config: &GeneratorConfig,
    calendar: &Calendar,
    rng: &mut GeneratorRng,
) -> Vec<Customer> {
    let start = calendar.start();
    let end = calendar.end();
    let window_end = start + Months::new(ACQUISITION_WINDOW_MONTHS);
    let window_days = (window_end - start).num_days();

    let mut customers = Vec::with_capacity(config.num_customers);

    for i in 1..=config.num_customers {
        let offset = (rng.next_f64() * window_days as f64) as i64;
        let acquisition_date = start + Duration::days(offset);

        let churn_date = simulate_churn(
            acquisition_date,
            end,
            config.annual_churn_rate,
            rng,
        );

        let segment = rng.pick_weighted(SEGMENT_WEIGHTS);
        let region = rng.pick_weighted(REGION_WEIGHTS);
        let risk_score = rng
            .normal(RISK_SCORE_MEAN, RISK_SCORE_SD)
            .clamp(RISK_SCORE_MIN, RISK_SCORE_MAX);

        customers.push(Customer {
            customer_id: i as CustomerId,
            segment,
            region,
            risk_score,
            acquisition_date,
            is_active: churn_date.is_none(),
            churn_date,
        });
    }

    customers
}

/// Bounded Bernoulli-trial search over candidate years, earliest first.
/// Returns None for customers that never churn inside the window.
fn simulate_churn(
    acquisition: NaiveDate,
    end: NaiveDate,
    annual_churn_rate: f64,
    rng: &mut GeneratorRng,
) -> Option<NaiveDate> {
    let mut churn = None;

    for year in acquisition.year()..=end.year() {
        if rng.chance(annual_churn_rate) {
            let month = rng.next_u64_below(12) as u32 + 1;
            let candidate =
                NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid");
            // Candidate must fall strictly after acquisition; otherwise the
            // customer is treated as non-churned (no re-draw).
            if candidate > acquisition {
                churn = Some(candidate);
            }
            break;
        }
    }

    // Churn past the dataset end means the customer is active in-window.
    churn.filter(|&c| c <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(n: usize, churn: f64) -> GeneratorConfig {
        GeneratorConfig {
            num_customers: n,
            annual_churn_rate: churn,
            ..Default::default()
        }
    }

    fn calendar(config: &GeneratorConfig) -> Calendar {
        Calendar::build(config.start_date, config.end_date).unwrap()
    }

    #[test]
    fn acquisition_stays_in_first_three_years() {
        let config = config(500, 0.12);
        let cal = calendar(&config);
        let mut rng = GeneratorRng::new(42);
        let window_end = cal.start() + Months::new(ACQUISITION_WINDOW_MONTHS);

        for c in generate_customers(&config, &cal, &mut rng) {
            assert!(c.acquisition_date >= cal.start());
            assert!(c.acquisition_date < window_end);
        }
    }

    #[test]
    fn churn_respects_lifecycle_invariant() {
        let config = config(1000, 0.3);
        let cal = calendar(&config);
        let mut rng = GeneratorRng::new(7);

        for c in generate_customers(&config, &cal, &mut rng) {
            assert_eq!(c.is_active, c.churn_date.is_none());
            if let Some(churn) = c.churn_date {
                assert!(churn > c.acquisition_date);
                assert!(churn <= cal.end());
                assert_eq!(churn.day(), 1);
            }
        }
    }

    #[test]
    fn risk_scores_clamped_to_fico_band() {
        let config = config(2000, 0.12);
        let cal = calendar(&config);
        let mut rng = GeneratorRng::new(99);

        for c in generate_customers(&config, &cal, &mut rng) {
            assert!((RISK_SCORE_MIN..=RISK_SCORE_MAX).contains(&c.risk_score));
        }
    }
}
