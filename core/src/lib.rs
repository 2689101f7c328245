//! synthfin-core — synthetic multi-year financial dataset generator.
//!
//! Builds a daily calendar spine, reference dimensions (products, chart
//! of accounts, cost centers), a customer lifecycle population, a
//! transaction fact table, and GL-style financial postings, all from one
//! seeded deterministic random stream. Same config + same seed = byte
//! identical tables.

pub mod accounts;
pub mod calendar;
pub mod config;
pub mod cost_centers;
pub mod customers;
pub mod dataset;
pub mod error;
pub mod export;
pub mod postings;
pub mod products;
pub mod rng;
pub mod store;
pub mod transactions;
pub mod types;

pub use config::GeneratorConfig;
pub use dataset::Dataset;
pub use error::{GenError, GenResult};
