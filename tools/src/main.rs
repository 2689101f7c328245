//! dataset-runner: headless generator for the synthetic financial dataset.
//!
//! Usage:
//!   dataset-runner --seed 42 --out-dir data/raw
//!   dataset-runner --config config.json --db finance.sqlite
//!   dataset-runner --customers 500 --start 2021-01-01 --end 2022-12-31

use anyhow::Result;
use chrono::NaiveDate;
use std::env;
use std::path::Path;
use synthfin_core::{export, store::DatasetStore, Dataset, GeneratorConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => GeneratorConfig::load(&w[1])?,
        None => GeneratorConfig::default(),
    };

    // CLI flags override whatever the config file (or default) supplied.
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.num_customers = parse_arg(&args, "--customers", config.num_customers);
    config.num_products = parse_arg(&args, "--products", config.num_products);
    config.num_cost_centers = parse_arg(&args, "--cost-centers", config.num_cost_centers);
    config.annual_churn_rate = parse_arg(&args, "--churn", config.annual_churn_rate);
    config.base_margin = parse_arg(&args, "--margin", config.base_margin);
    config.opex_ratio = parse_arg(&args, "--opex", config.opex_ratio);
    config.start_date = parse_arg::<NaiveDate>(&args, "--start", config.start_date);
    config.end_date = parse_arg::<NaiveDate>(&args, "--end", config.end_date);

    let out_dir = args
        .windows(2)
        .find(|w| w[0] == "--out-dir")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "data/raw".to_string());
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].clone());

    println!("synthfin — dataset-runner");
    println!("  seed:       {}", config.seed);
    println!("  span:       {} .. {}", config.start_date, config.end_date);
    println!("  customers:  {}", config.num_customers);
    println!("  products:   {}", config.num_products);
    println!("  out dir:    {out_dir}");
    if let Some(db) = &db {
        println!("  db:         {db}");
    }
    println!();

    let dataset = Dataset::generate(&config)?;

    export::write_csv_dir(&dataset, Path::new(&out_dir))?;

    if let Some(db) = &db {
        let mut store = DatasetStore::open(db)?;
        store.migrate()?;
        store.insert_run(&config)?;
        store.write_dataset(&dataset)?;
    }

    println!("=== RUN SUMMARY ===");
    println!("  dim_time:          {:>8}", dataset.calendar.days().len());
    println!("  dim_customer:      {:>8}", dataset.customers.len());
    println!("  dim_product:       {:>8}", dataset.products.len());
    println!("  dim_account:       {:>8}", dataset.accounts.len());
    println!("  dim_cost_center:   {:>8}", dataset.cost_centers.len());
    println!("  fact_transactions: {:>8}", dataset.transactions.len());
    println!("  fact_financials:   {:>8}", dataset.postings.len());

    let active = dataset.customers.iter().filter(|c| c.is_active).count();
    let total_revenue: f64 = dataset.transactions.iter().map(|t| t.net_revenue).sum();
    println!();
    println!("  active customers:  {active}");
    println!("  total revenue:     {total_revenue:.2} EUR");

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
