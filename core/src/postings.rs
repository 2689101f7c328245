//! Financial posting derivation — GL-style rows from the transaction table.
//!
//! Three posting families, computed independently and concatenated:
//! revenue (grouped by date and category account, positive, no cost
//! center), COGS (grouped by date on one account, negative, no cost
//! center), and monthly OPEX (posted on the month-end date, negative,
//! split across cost centers by noisy renormalized weights).
//!
//! Grouping uses ordered maps so posting ids come out in sorted-key order
//! within each family; ids are assigned over the concatenation revenue →
//! COGS → OPEX.

use crate::accounts::{
    ACCOUNT_COGS, ACCOUNT_OPEX_ADMIN, ACCOUNT_OPEX_IT, ACCOUNT_OPEX_OPERATIONS,
    ACCOUNT_OPEX_SALES_MARKETING, ACCOUNT_REVENUE_OTHER, ACCOUNT_REVENUE_SERVICE,
    ACCOUNT_REVENUE_SUBSCRIPTION,
};
use crate::calendar::Calendar;
use crate::cost_centers::CostCenter;
use crate::products::{Category, Product};
use crate::rng::GeneratorRng;
use crate::transactions::Transaction;
use crate::types::{AccountId, CostCenterId, DateKey, PostingId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const CURRENCY: &str = "EUR";

/// Base OPEX allocation weights for the six named cost centers.
pub const BASE_OPEX_WEIGHTS: [f64; 6] = [0.20, 0.15, 0.25, 0.15, 0.10, 0.15];

/// Sigma of the per-month, per-cost-center weight noise (mean 1.0).
pub const OPEX_NOISE_SIGMA: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPosting {
    pub posting_id: PostingId,
    pub date_key: DateKey,
    pub account_id: AccountId,
    pub cost_center_id: Option<CostCenterId>,
    pub amount: f64,
    pub currency: String,
}

pub fn revenue_account_for(category: Category) -> AccountId {
    match category {
        Category::Subscription => ACCOUNT_REVENUE_SUBSCRIPTION,
        Category::Service => ACCOUNT_REVENUE_SERVICE,
        _ => ACCOUNT_REVENUE_OTHER,
    }
}

pub fn opex_account_for(department: &str) -> AccountId {
    match department {
        "Sales" | "Marketing" => ACCOUNT_OPEX_SALES_MARKETING,
        "Operations" => ACCOUNT_OPEX_OPERATIONS,
        "IT" => ACCOUNT_OPEX_IT,
        _ => ACCOUNT_OPEX_ADMIN,
    }
}

pub fn derive_postings(
    transactions: &[Transaction],
    products: &[Product],
    cost_centers: &[CostCenter],
    calendar: &Calendar,
    opex_ratio: f64,
    rng: &mut GeneratorRng,
) -> Vec<FinancialPosting> {
    let category_of: HashMap<_, _> = products
        .iter()
        .map(|p| (p.product_id, p.category))
        .collect();

    // Revenue by (date, account); COGS by date.
    let mut revenue: BTreeMap<(DateKey, AccountId), f64> = BTreeMap::new();
    let mut cogs: BTreeMap<DateKey, f64> = BTreeMap::new();

    for tx in transactions {
        let category = category_of
            .get(&tx.product_id)
            .copied()
            .unwrap_or(Category::Advisory);
        let account = revenue_account_for(category);
        *revenue.entry((tx.date_key, account)).or_default() += tx.net_revenue;
        *cogs.entry(tx.date_key).or_default() += tx.direct_cost;
    }

    // Monthly revenue totals drive the OPEX allocation. The (year, month)
    // pair is read straight off the YYYYMMDD key.
    let mut monthly_revenue: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for (&(date_key, _), &amount) in &revenue {
        let year = (date_key / 10_000) as i32;
        let month = date_key / 100 % 100;
        *monthly_revenue.entry((year, month)).or_default() += amount;
    }

    // Ids count up over the concatenation, so every family appends
    // through this one helper.
    fn push(
        postings: &mut Vec<FinancialPosting>,
        date_key: DateKey,
        account_id: AccountId,
        cost_center_id: Option<CostCenterId>,
        amount: f64,
    ) {
        postings.push(FinancialPosting {
            posting_id: postings.len() as PostingId + 1,
            date_key,
            account_id,
            cost_center_id,
            amount,
            currency: CURRENCY.to_string(),
        });
    }

    let mut postings = Vec::new();

    for (&(date_key, account_id), &amount) in &revenue {
        push(&mut postings, date_key, account_id, None, amount);
    }

    for (&date_key, &cost) in &cogs {
        push(&mut postings, date_key, ACCOUNT_COGS, None, -cost);
    }

    let base_weights = opex_weights(cost_centers.len());
    let opex_accounts: Vec<AccountId> = cost_centers
        .iter()
        .map(|cc| opex_account_for(&cc.department))
        .collect();

    for (&(year, month), &month_revenue) in &monthly_revenue {
        let Some(posting_date) = calendar.month_end(year, month) else {
            // Malformed spine (month without a last day): data gap, not fatal.
            log::warn!("no month-end date for {year}-{month:02}; skipping OPEX");
            continue;
        };

        let total_opex = -(month_revenue * opex_ratio);

        let noisy: Vec<f64> = base_weights
            .iter()
            .map(|w| w * rng.normal(1.0, OPEX_NOISE_SIGMA))
            .collect();
        let noisy_sum: f64 = noisy.iter().sum();

        for (i, cc) in cost_centers.iter().enumerate() {
            let weight = noisy[i] / noisy_sum;
            push(
                &mut postings,
                posting_date,
                opex_accounts[i],
                Some(cc.cost_center_id),
                total_opex * weight,
            );
        }
    }

    log::debug!(
        "derived {} postings ({} revenue groups, {} cogs days, {} months)",
        postings.len(),
        revenue.len(),
        cogs.len(),
        monthly_revenue.len()
    );

    postings
}

/// Allocation weights sized to the cost-center count: the fixed base
/// vector truncated for fewer centers, extended uniformly for more, and
/// renormalized to sum to 1.
fn opex_weights(count: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = BASE_OPEX_WEIGHTS.iter().take(count).copied().collect();
    while weights.len() < count {
        weights.push(1.0 / count as f64);
    }
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_mappings_are_fixed() {
        assert_eq!(revenue_account_for(Category::Subscription), 4000);
        assert_eq!(revenue_account_for(Category::Service), 4001);
        assert_eq!(revenue_account_for(Category::Loan), 4002);
        assert_eq!(revenue_account_for(Category::Advisory), 4002);

        assert_eq!(opex_account_for("Sales"), 6000);
        assert_eq!(opex_account_for("Marketing"), 6000);
        assert_eq!(opex_account_for("Operations"), 6100);
        assert_eq!(opex_account_for("IT"), 6200);
        assert_eq!(opex_account_for("HR"), 6300);
        assert_eq!(opex_account_for("Dept7"), 6300);
    }

    #[test]
    fn weights_always_sum_to_one() {
        for count in [1, 3, 6, 9] {
            let w = opex_weights(count);
            assert_eq!(w.len(), count);
            let sum: f64 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "count={count} sum={sum}");
        }
    }
}
