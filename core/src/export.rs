//! CSV export — writes the seven tables as delimited files.
//!
//! File names, column names, and column order are part of the external
//! contract. Headers are written explicitly so an empty fact table still
//! serializes with its full schema.

use crate::dataset::Dataset;
use crate::error::GenResult;
use serde::Serialize;
use std::path::Path;

const DIM_TIME_COLUMNS: &[&str] = &[
    "date_key", "date", "day", "month", "quarter", "year", "weekday", "is_month_end",
];
const DIM_CUSTOMER_COLUMNS: &[&str] = &[
    "customer_id", "segment", "region", "risk_score", "acquisition_date", "churn_date",
    "is_active",
];
const DIM_PRODUCT_COLUMNS: &[&str] = &[
    "product_id", "product_name", "category", "base_price", "direct_cost_ratio",
];
const DIM_ACCOUNT_COLUMNS: &[&str] = &[
    "account_id", "account_name", "account_type", "account_group", "reporting_line",
];
const DIM_COST_CENTER_COLUMNS: &[&str] = &["cost_center_id", "department", "country", "manager"];
const FACT_TRANSACTIONS_COLUMNS: &[&str] = &[
    "transaction_id", "date_key", "customer_id", "product_id", "quantity", "net_revenue",
    "direct_cost", "channel",
];
const FACT_FINANCIALS_COLUMNS: &[&str] = &[
    "posting_id", "date_key", "account_id", "cost_center_id", "amount", "currency",
];

/// Write all seven tables into `dir`, creating it if needed.
pub fn write_csv_dir(dataset: &Dataset, dir: &Path) -> GenResult<()> {
    std::fs::create_dir_all(dir)?;

    write_table(
        &dir.join("dim_time.csv"),
        DIM_TIME_COLUMNS,
        dataset.calendar.days(),
    )?;
    write_table(
        &dir.join("dim_customer.csv"),
        DIM_CUSTOMER_COLUMNS,
        &dataset.customers,
    )?;
    write_table(
        &dir.join("dim_product.csv"),
        DIM_PRODUCT_COLUMNS,
        &dataset.products,
    )?;
    write_table(
        &dir.join("dim_account.csv"),
        DIM_ACCOUNT_COLUMNS,
        &dataset.accounts,
    )?;
    write_table(
        &dir.join("dim_cost_center.csv"),
        DIM_COST_CENTER_COLUMNS,
        &dataset.cost_centers,
    )?;
    write_table(
        &dir.join("fact_transactions.csv"),
        FACT_TRANSACTIONS_COLUMNS,
        &dataset.transactions,
    )?;
    write_table(
        &dir.join("fact_financials.csv"),
        FACT_FINANCIALS_COLUMNS,
        &dataset.postings,
    )?;

    log::info!("wrote 7 csv files to {}", dir.display());
    Ok(())
}

fn write_table<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> GenResult<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
