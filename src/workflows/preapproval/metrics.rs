use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{LiquidityInfo, LoanRequest};
use super::money;

/// Affordability thresholds and heuristics shared by the deriver and the
/// oracle prompt. Values are policy constants, not amortization output, and
/// can be overridden without touching the derivation algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Maximum acceptable debt-to-income ratio, in percent.
    pub max_debt_to_income_pct: f64,
    /// Minimum down payment relative to purchase price, in percent.
    pub min_down_payment_pct: f64,
    /// Months of estimated payments liquid assets must cover.
    pub liquidity_coverage_months: f64,
    /// Flat monthly payment heuristic as a fraction of purchase price.
    pub payment_rate: f64,
    /// Ratio reported when monthly income is zero; high enough to fail any
    /// affordability check.
    pub dti_sentinel: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_debt_to_income_pct: 50.0,
            min_down_payment_pct: 3.0,
            liquidity_coverage_months: 1.0,
            payment_rate: 0.005,
            dti_sentinel: 999.0,
        }
    }
}

/// Canonical affordability metrics, a pure function of the request and the
/// liquidity snapshot. Re-derivable at any time from the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub monthly_income: f64,
    pub down_payment_percentage: f64,
    pub estimated_monthly_payment: f64,
    pub debt_to_income_ratio: f64,
    pub liquid_assets: f64,
}

/// Derive the canonical metric set. Total and non-throwing: every ratio with
/// a zero denominator resolves to a defined, conservative value.
pub fn derive_metrics(
    request: &LoanRequest,
    liquidity: &LiquidityInfo,
    policy: &PolicyConfig,
) -> DerivedMetrics {
    let annual_income = money::coerce(&request.annual_income);
    let purchase_price = money::coerce(&request.purchase_price);
    let down_payment = money::coerce(&request.down_payment);

    let monthly_income = if annual_income > 0.0 {
        annual_income / 12.0
    } else {
        0.0
    };

    let down_payment_percentage = if purchase_price > 0.0 {
        down_payment / purchase_price * 100.0
    } else {
        0.0
    };

    // Percentages above 100 are computed faithfully; upstream never enforces
    // down_payment <= purchase_price, so surface it as a data-quality signal.
    if down_payment_percentage > 100.0 {
        warn!(
            down_payment_percentage,
            "down payment exceeds purchase price"
        );
    }

    let estimated_monthly_payment = purchase_price * policy.payment_rate;

    let debt_to_income_ratio = if monthly_income > 0.0 {
        estimated_monthly_payment / monthly_income * 100.0
    } else {
        policy.dti_sentinel
    };

    DerivedMetrics {
        monthly_income,
        down_payment_percentage,
        estimated_monthly_payment,
        debt_to_income_ratio,
        liquid_assets: liquidity.total_balance,
    }
}
