use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money;

/// Monetary field exactly as it arrives from intake: a plain number, a
/// formatted string (`"$455,000"`), or nothing at all. Coercion to a
/// canonical amount happens in [`money::coerce`] and never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum MoneyInput {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl From<f64> for MoneyInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MoneyInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Identity and property fields carried verbatim into the oracle prompt and
/// the rendered report. Never computed upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub property_zip: String,
}

/// Stated purpose of the requested loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    Purchase,
    Refinance,
    #[serde(rename = "HELOC")]
    Heloc,
}

impl LoanPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            LoanPurpose::Purchase => "Purchase",
            LoanPurpose::Refinance => "Refinance",
            LoanPurpose::Heloc => "HELOC",
        }
    }
}

/// Validated intake snapshot of the requested loan. `purchase_price` and
/// `down_payment` are independent inputs; upstream does not enforce
/// `down_payment <= purchase_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub annual_income: MoneyInput,
    pub purchase_price: MoneyInput,
    pub down_payment: MoneyInput,
    pub loan_purpose: LoanPurpose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_out_amount: Option<MoneyInput>,
    pub submitted_at: DateTime<Utc>,
}

/// One observed account from the bank-data aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub current_balance: MoneyInput,
    pub available_balance: MoneyInput,
    pub currency: String,
}

/// Request-scoped liquidity snapshot. Computed fresh for every decision pass
/// and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityInfo {
    pub total_balance: f64,
}

impl LiquidityInfo {
    /// Sum observed current balances across all returned accounts.
    pub fn from_accounts(accounts: &[BankAccount]) -> Self {
        let total_balance = accounts
            .iter()
            .map(|account| money::coerce(&account.current_balance))
            .sum();

        Self { total_balance }
    }
}
