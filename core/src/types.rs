//! Shared primitive types used across the entire generator.

/// Integer calendar key in YYYYMMDD form. Strictly increasing with the date.
pub type DateKey = u32;

/// Dimension identifiers. All are 1-based and gap-free within a run.
pub type CustomerId = u32;
pub type ProductId = u32;
pub type AccountId = u32;
pub type CostCenterId = u32;

/// Fact-table identifiers, assigned sequentially in production order.
pub type TransactionId = u64;
pub type PostingId = u64;
