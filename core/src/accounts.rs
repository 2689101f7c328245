//! Chart of accounts — a fixed, hardcoded reference set.
//!
//! 3 revenue accounts, 1 COGS account, 4 OPEX accounts. No parameters,
//! no randomness.

use crate::types::AccountId;
use serde::{Deserialize, Serialize};

pub const ACCOUNT_REVENUE_SUBSCRIPTION: AccountId = 4000;
pub const ACCOUNT_REVENUE_SERVICE: AccountId = 4001;
pub const ACCOUNT_REVENUE_OTHER: AccountId = 4002;
pub const ACCOUNT_COGS: AccountId = 5000;
pub const ACCOUNT_OPEX_SALES_MARKETING: AccountId = 6000;
pub const ACCOUNT_OPEX_OPERATIONS: AccountId = 6100;
pub const ACCOUNT_OPEX_IT: AccountId = 6200;
pub const ACCOUNT_OPEX_ADMIN: AccountId = 6300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Revenue,
    #[serde(rename = "COGS")]
    Cogs,
    #[serde(rename = "OPEX")]
    Opex,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Revenue => "Revenue",
            AccountType::Cogs => "COGS",
            AccountType::Opex => "OPEX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub account_name: String,
    pub account_type: AccountType,
    pub account_group: String,
    pub reporting_line: String,
}

pub fn chart_of_accounts() -> Vec<Account> {
    let rows: [(AccountId, &str, AccountType, &str, &str); 8] = [
        (
            ACCOUNT_REVENUE_SUBSCRIPTION,
            "Revenue - Subscription",
            AccountType::Revenue,
            "Operating Revenue",
            "Revenue",
        ),
        (
            ACCOUNT_REVENUE_SERVICE,
            "Revenue - Service",
            AccountType::Revenue,
            "Operating Revenue",
            "Revenue",
        ),
        (
            ACCOUNT_REVENUE_OTHER,
            "Revenue - Other",
            AccountType::Revenue,
            "Operating Revenue",
            "Revenue",
        ),
        (
            ACCOUNT_COGS,
            "Cost of Goods Sold",
            AccountType::Cogs,
            "Direct Costs",
            "Gross Profit",
        ),
        (
            ACCOUNT_OPEX_SALES_MARKETING,
            "Sales & Marketing",
            AccountType::Opex,
            "Indirect Costs",
            "Operating Profit",
        ),
        (
            ACCOUNT_OPEX_OPERATIONS,
            "Operations",
            AccountType::Opex,
            "Indirect Costs",
            "Operating Profit",
        ),
        (
            ACCOUNT_OPEX_IT,
            "IT & Infrastructure",
            AccountType::Opex,
            "Indirect Costs",
            "Operating Profit",
        ),
        (
            ACCOUNT_OPEX_ADMIN,
            "HQ & Admin",
            AccountType::Opex,
            "Indirect Costs",
            "Operating Profit",
        ),
    ];

    rows.into_iter()
        .map(
            |(account_id, name, account_type, group, line)| Account {
                account_id,
                account_name: name.to_string(),
                account_type,
                account_group: group.to_string(),
                reporting_line: line.to_string(),
            },
        )
        .collect()
}
