//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two runs, same config, same seed: every table must come out identical.
//! Any divergence means a stage consumed the random stream out of order.

use synthfin_core::{Dataset, GeneratorConfig};

fn small_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        num_customers: 200,
        num_products: 8,
        seed,
        ..Default::default()
    }
}

#[test]
fn same_seed_produces_identical_tables() {
    let config = small_config(0xDEAD_BEEF);

    let a = Dataset::generate(&config).expect("run a");
    let b = Dataset::generate(&config).expect("run b");

    assert_eq!(a.calendar, b.calendar);
    assert_eq!(a.customers, b.customers);
    assert_eq!(a.products, b.products);
    assert_eq!(a.accounts, b.accounts);
    assert_eq!(a.cost_centers, b.cost_centers);
    assert_eq!(a.transactions, b.transactions);
    assert_eq!(a.postings, b.postings);
}

#[test]
fn different_seeds_produce_different_tables() {
    let a = Dataset::generate(&small_config(42)).expect("run a");
    let b = Dataset::generate(&small_config(99)).expect("run b");

    // Reference data is seed-independent; sampled tables must diverge.
    assert_eq!(a.calendar, b.calendar);
    assert_eq!(a.accounts, b.accounts);
    assert_eq!(a.cost_centers, b.cost_centers);
    assert_ne!(
        a.customers, b.customers,
        "different seeds produced identical customers — seed is not being used"
    );
    assert_ne!(a.transactions, b.transactions);
}

/// Config validation fails fast: nothing is generated from bad input.
#[test]
fn invalid_config_is_rejected_before_generation() {
    let config = GeneratorConfig {
        annual_churn_rate: 1.5,
        ..small_config(1)
    };
    assert!(Dataset::generate(&config).is_err());
}
