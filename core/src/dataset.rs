//! The composition root — builds all seven tables for one run.
//!
//! GENERATION ORDER (fixed, documented, never reordered):
//!   1. Calendar
//!   2. Customers
//!   3. Products
//!   4. Chart of accounts
//!   5. Cost centers
//!   6. Transactions
//!   7. Financial postings
//!
//! RULES:
//!   - Every stage is a pure function of its inputs plus the shared RNG.
//!   - No stage mutates another stage's output.
//!   - Randomness consumption order is documented in rng.rs; two runs with
//!     the same config and seed produce identical tables.

use crate::accounts::{chart_of_accounts, Account};
use crate::calendar::Calendar;
use crate::config::GeneratorConfig;
use crate::cost_centers::{generate_cost_centers, CostCenter};
use crate::customers::{generate_customers, Customer};
use crate::error::GenResult;
use crate::postings::{derive_postings, FinancialPosting};
use crate::products::{generate_products, Product};
use crate::rng::GeneratorRng;
use crate::transactions::{sample_transactions, Transaction};

/// All output tables of one generation run, fully materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub calendar: Calendar,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub accounts: Vec<Account>,
    pub cost_centers: Vec<CostCenter>,
    pub transactions: Vec<Transaction>,
    pub postings: Vec<FinancialPosting>,
}

impl Dataset {
    /// Validate the config, then run every stage to completion.
    pub fn generate(config: &GeneratorConfig) -> GenResult<Self> {
        config.validate()?;

        let mut rng = GeneratorRng::new(config.seed);

        let calendar = Calendar::build(config.start_date, config.end_date)?;
        log::info!("calendar: {} days", calendar.days().len());

        let customers = generate_customers(config, &calendar, &mut rng);
        log::info!(
            "customers: {} ({} active at end of span)",
            customers.len(),
            customers.iter().filter(|c| c.is_active).count()
        );

        let products = generate_products(config, &mut rng);
        let accounts = chart_of_accounts();
        let cost_centers = generate_cost_centers(config.num_cost_centers);
        log::info!(
            "dimensions: {} products, {} accounts, {} cost centers",
            products.len(),
            accounts.len(),
            cost_centers.len()
        );

        let transactions = sample_transactions(&customers, &products, &calendar, config, &mut rng);
        log::info!("transactions: {}", transactions.len());

        let postings = derive_postings(
            &transactions,
            &products,
            &cost_centers,
            &calendar,
            config.opex_ratio,
            &mut rng,
        );
        log::info!("postings: {}", postings.len());

        Ok(Self {
            calendar,
            customers,
            products,
            accounts,
            cost_centers,
            transactions,
            postings,
        })
    }
}
