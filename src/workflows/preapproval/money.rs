//! Total coercion of loosely-typed monetary inputs.
//!
//! Intake data mixes plain numbers with formatted strings such as
//! `"$455,000"` and occasionally garbage such as `"N/A"`. Coercion is total:
//! every input resolves to a finite, non-negative amount, with `0.0` standing
//! in for anything unparseable.

use super::domain::MoneyInput;

/// Coerce a raw monetary input to its canonical USD amount.
///
/// Already-numeric inputs pass through unchanged apart from the non-negative
/// and finite clamps, so the function is idempotent over its own output.
pub fn coerce(value: &MoneyInput) -> f64 {
    let amount = match value {
        MoneyInput::Number(n) => *n,
        MoneyInput::Text(raw) => parse_text(raw),
        MoneyInput::Missing => 0.0,
    };

    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Strip the currency symbol and thousands separators, then parse as decimal.
fn parse_text(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    cleaned.trim().parse::<f64>().unwrap_or(0.0)
}
