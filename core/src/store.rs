//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database. The generator stages never
//! execute SQL; they hand finished tables to [`DatasetStore::write_dataset`].
//!
//! Table and column names match what the downstream BI consumer joins on:
//! dim_time, dim_customer, dim_product, dim_account, dim_cost_center,
//! fact_transactions, fact_financials.

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::error::GenResult;
use rusqlite::{params, Connection};

pub struct DatasetStore {
    conn: Connection,
}

impl DatasetStore {
    /// Open (or create) the dataset database at `path`.
    pub fn open(path: &str) -> GenResult<Self> {
        let conn = Connection::open(path)?;
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GenResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the schema migration.
    pub fn migrate(&self) -> GenResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_schema.sql"))?;
        Ok(())
    }

    /// Record the run parameters alongside the tables.
    pub fn insert_run(&self, config: &GeneratorConfig) -> GenResult<()> {
        self.conn.execute(
            "INSERT INTO run (seed, version, config_json) VALUES (?1, ?2, ?3)",
            params![
                config.seed as i64,
                env!("CARGO_PKG_VERSION"),
                serde_json::to_string(config)?
            ],
        )?;
        Ok(())
    }

    /// Write every table of a generated dataset in one transaction.
    pub fn write_dataset(&mut self, dataset: &Dataset) -> GenResult<()> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_time
                 (date_key, date, day, month, quarter, year, weekday, is_month_end)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for d in dataset.calendar.days() {
                stmt.execute(params![
                    d.date_key,
                    d.date.to_string(),
                    d.day,
                    d.month,
                    d.quarter,
                    d.year,
                    d.weekday,
                    d.is_month_end as i32,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_customer
                 (customer_id, segment, region, risk_score, acquisition_date,
                  churn_date, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for c in &dataset.customers {
                stmt.execute(params![
                    c.customer_id,
                    c.segment.as_str(),
                    c.region.as_str(),
                    c.risk_score,
                    c.acquisition_date.to_string(),
                    c.churn_date.map(|d| d.to_string()),
                    c.is_active as i32,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_product
                 (product_id, product_name, category, base_price, direct_cost_ratio)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for p in &dataset.products {
                stmt.execute(params![
                    p.product_id,
                    p.product_name,
                    p.category.as_str(),
                    p.base_price,
                    p.direct_cost_ratio,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_account
                 (account_id, account_name, account_type, account_group, reporting_line)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for a in &dataset.accounts {
                stmt.execute(params![
                    a.account_id,
                    a.account_name,
                    a.account_type.as_str(),
                    a.account_group,
                    a.reporting_line,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_cost_center
                 (cost_center_id, department, country, manager)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for cc in &dataset.cost_centers {
                stmt.execute(params![
                    cc.cost_center_id,
                    cc.department,
                    cc.country,
                    cc.manager,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO fact_transactions
                 (transaction_id, date_key, customer_id, product_id, quantity,
                  net_revenue, direct_cost, channel)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for t in &dataset.transactions {
                stmt.execute(params![
                    t.transaction_id,
                    t.date_key,
                    t.customer_id,
                    t.product_id,
                    t.quantity,
                    t.net_revenue,
                    t.direct_cost,
                    t.channel.as_str(),
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO fact_financials
                 (posting_id, date_key, account_id, cost_center_id, amount, currency)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for p in &dataset.postings {
                stmt.execute(params![
                    p.posting_id,
                    p.date_key,
                    p.account_id,
                    p.cost_center_id,
                    p.amount,
                    p.currency,
                ])?;
            }
        }

        tx.commit()?;

        log::info!(
            "wrote {} calendar days, {} customers, {} transactions, {} postings",
            dataset.calendar.days().len(),
            dataset.customers.len(),
            dataset.transactions.len(),
            dataset.postings.len()
        );

        Ok(())
    }

    /// Row count of one of the seven output tables. Test/tooling helper.
    pub fn table_count(&self, table: &str) -> GenResult<i64> {
        // Whitelist table names; this method takes no external input paths.
        let known = [
            "dim_time",
            "dim_customer",
            "dim_product",
            "dim_account",
            "dim_cost_center",
            "fact_transactions",
            "fact_financials",
        ];
        if !known.contains(&table) {
            return Err(anyhow::anyhow!("unknown table: {table}").into());
        }
        let count =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        Ok(count)
    }
}
