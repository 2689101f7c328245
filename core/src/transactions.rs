//! Transaction sampler — the heart of the generator.
//!
//! For every customer the active window runs from the acquisition month
//! through the churn month (or the dataset-end month), inclusive, at
//! monthly granularity. Each active month draws a Poisson transaction
//! count from λ = segment base rate × customer spend tier (floored at a
//! small positive minimum), then samples each transaction's date, product,
//! quantity, price and channel.
//!
//! Transaction ids are assigned sequentially in production order, not
//! sorted by date or customer. An all-zero draw yields a valid empty
//! table, not an error.

use crate::calendar::{quarter_of_month, Calendar};
use crate::config::GeneratorConfig;
use crate::customers::Customer;
use crate::products::Product;
use crate::rng::GeneratorRng;
use crate::types::{CustomerId, DateKey, ProductId, TransactionId};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Floor for the monthly transaction rate, so low-rate segments never get
/// permanently silent months.
pub const MIN_MONTHLY_RATE: f64 = 0.05;

/// Mean of the Poisson quantity draw (floored at 1).
pub const QUANTITY_MEAN: f64 = 1.1;

/// Sigma of the log-normal price noise (mean 0).
pub const PRICE_NOISE_SIGMA: f64 = 0.15;

/// Spend tier drawn once per customer: a multiplier on both transaction
/// volume and unit price.
pub const SPEND_TIER_WEIGHTS: &[(f64, f64)] = &[
    (0.5, 0.25),
    (1.0, 0.45),
    (2.0, 0.25),
    (4.0, 0.05),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Online,
    Branch,
    Partner,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Online => "Online",
            Channel::Branch => "Branch",
            Channel::Partner => "Partner",
        }
    }
}

pub const CHANNEL_WEIGHTS: &[(Channel, f64)] = &[
    (Channel::Online, 0.60),
    (Channel::Branch, 0.25),
    (Channel::Partner, 0.15),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub date_key: DateKey,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub net_revenue: f64,
    pub direct_cost: f64,
    pub channel: Channel,
}

pub fn sample_transactions(
    customers: &[Customer],
    products: &[Product],
    calendar: &Calendar,
    config: &GeneratorConfig,
    rng: &mut GeneratorRng,
) -> Vec<Transaction> {
    // Spend tiers are drawn up front, one per customer in id order, so the
    // per-month sampling below never interleaves with them.
    let spend_tiers: Vec<f64> = customers
        .iter()
        .map(|_| rng.pick_weighted(SPEND_TIER_WEIGHTS))
        .collect();

    let mut transactions = Vec::new();

    for (customer, &tier) in customers.iter().zip(&spend_tiers) {
        let until = customer.churn_date.unwrap_or_else(|| calendar.end());

        for (year, month) in months_inclusive(customer.acquisition_date, until) {
            let Some(month_keys) = calendar.date_keys_in_month(year, month) else {
                continue;
            };

            let seasonal = config.seasonal_multiplier(quarter_of_month(month));
            let shock = config.macro_multiplier(year);

            let rate = (customer.segment.monthly_txn_rate() * tier).max(MIN_MONTHLY_RATE);
            let count = rng.poisson(rate);
            if count == 0 {
                continue;
            }

            for _ in 0..count {
                let date_key = *rng.pick(month_keys);
                let product = rng.pick(products);

                let quantity = rng.poisson(QUANTITY_MEAN).max(1) as u32;
                let noise = rng.lognormal(0.0, PRICE_NOISE_SIGMA);

                let unit_price = product.base_price
                    * customer.segment.revenue_multiplier()
                    * tier
                    * seasonal
                    * shock
                    * noise;
                let net_revenue = unit_price * quantity as f64;
                let direct_cost =
                    net_revenue * product.direct_cost_ratio * customer.segment.cost_multiplier();

                let channel = rng.pick_weighted(CHANNEL_WEIGHTS);

                transactions.push(Transaction {
                    transaction_id: transactions.len() as TransactionId + 1,
                    date_key,
                    customer_id: customer.customer_id,
                    product_id: product.product_id,
                    quantity,
                    net_revenue,
                    direct_cost,
                    channel,
                });
            }
        }
    }

    log::debug!(
        "sampled {} transactions for {} customers",
        transactions.len(),
        customers.len()
    );

    transactions
}

/// Yields (year, month) pairs from `from`'s month through `to`'s month,
/// inclusive. Empty when `to` precedes `from`'s month.
fn months_inclusive(from: chrono::NaiveDate, to: chrono::NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut year, mut month) = (from.year(), from.month());
    let last = (to.year(), to.month());

    while (year, month) <= last {
        months.push((year, month));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    months
}
