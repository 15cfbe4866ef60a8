use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{ApplicantProfile, LoanRequest};
use super::metrics::{DerivedMetrics, PolicyConfig};
use super::money;
use super::oracle::{DecisionOracle, OracleError};

/// The only two tokens the oracle contract allows.
pub const APPROVE_TOKEN: &str = "approve";
pub const DISAPPROVE_TOKEN: &str = "disapprove";

/// Binary verdict. Strict consumers never see a third value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Disapprove,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approve => APPROVE_TOKEN,
            Decision::Disapprove => DISAPPROVE_TOKEN,
        }
    }
}

/// Why the oracle was never successfully consulted for a given pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    MissingCredentials,
    Transport,
    MalformedResponse,
}

impl From<&OracleError> for UnavailableReason {
    fn from(error: &OracleError) -> Self {
        match error {
            OracleError::MissingCredentials => Self::MissingCredentials,
            OracleError::Transport(_) | OracleError::Runtime(_) => Self::Transport,
            OracleError::MalformedResponse(_) => Self::MalformedResponse,
        }
    }
}

/// Boundary outcome of a resolution pass: a real verdict, or a deferred state
/// integration layers may render as pending. Strict two-valued consumers
/// collapse both through [`DecisionOutcome::decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecisionOutcome {
    Decided { decision: Decision },
    Unavailable { reason: UnavailableReason },
}

impl DecisionOutcome {
    /// Conservative two-valued view: anything short of an explicit approval
    /// counts as a disapproval.
    pub fn decision(&self) -> Decision {
        match self {
            DecisionOutcome::Decided { decision } => *decision,
            DecisionOutcome::Unavailable { .. } => Decision::Disapprove,
        }
    }
}

/// Resolves a verdict from the oracle under the two-token output contract,
/// with a deterministic at-most-once fallback policy: one attempt, no
/// retries, every failure degrading silently to the conservative outcome.
pub struct DecisionResolver<O> {
    oracle: O,
    policy: PolicyConfig,
}

impl<O: DecisionOracle> DecisionResolver<O> {
    pub fn new(oracle: O, policy: PolicyConfig) -> Self {
        Self { oracle, policy }
    }

    pub fn resolve(
        &self,
        profile: &ApplicantProfile,
        request: &LoanRequest,
        metrics: &DerivedMetrics,
    ) -> DecisionOutcome {
        let prompt = build_prompt(profile, request, metrics, &self.policy);

        let raw = match self.oracle.complete(&prompt) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "decision oracle unavailable, degrading to conservative outcome");
                return DecisionOutcome::Unavailable {
                    reason: UnavailableReason::from(&error),
                };
            }
        };

        match normalize(&raw).as_str() {
            APPROVE_TOKEN => DecisionOutcome::Decided {
                decision: Decision::Approve,
            },
            DISAPPROVE_TOKEN => DecisionOutcome::Decided {
                decision: Decision::Disapprove,
            },
            other => {
                warn!(response = other, "oracle reply outside the two-token contract");
                DecisionOutcome::Decided {
                    decision: Decision::Disapprove,
                }
            }
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Fixed-structure mortgage-advisor prompt: identity fields, raw request
/// fields, derived metrics, the policy thresholds, and the one-token reply
/// instruction.
pub(crate) fn build_prompt(
    profile: &ApplicantProfile,
    request: &LoanRequest,
    metrics: &DerivedMetrics,
    policy: &PolicyConfig,
) -> String {
    let annual_income = money::coerce(&request.annual_income);
    let purchase_price = money::coerce(&request.purchase_price);
    let down_payment = money::coerce(&request.down_payment);

    format!(
        "You are a professional mortgage advisor.\n\
         Given the following applicant financial information, decide if the mortgage \
         should be approved or disapproved.\n\
         Return ONLY one word: \"{APPROVE_TOKEN}\" or \"{DISAPPROVE_TOKEN}\".\n\
         \n\
         Approval criteria:\n\
         - Debt-to-Income ratio <= {max_dti}%\n\
         - Down Payment >= {min_down}% of purchase price\n\
         - Liquid Assets sufficient to cover at least {coverage} month(s) of the estimated \
         mortgage payment (assume the payment is {payment_pct}% of the purchase price monthly)\n\
         \n\
         Applicant:\n\
         Full Name: {full_name}\n\
         Email: {email}\n\
         Phone Number: {phone}\n\
         Property Zip Code: {property_zip}\n\
         Property Address: {property_address}\n\
         Annual Income: {annual_income}\n\
         Purchase Price: {purchase_price}\n\
         Down Payment: {down_payment}\n\
         Loan Purpose: {loan_purpose}\n\
         \n\
         Financial Analysis:\n\
         Monthly Income: {monthly_income:.2}\n\
         Down Payment Percentage: {down_payment_percentage:.2}%\n\
         Estimated Monthly Payment: {estimated_monthly_payment:.2}\n\
         Debt-to-Income Ratio: {debt_to_income_ratio:.2}%\n\
         Liquid Assets: {liquid_assets:.2}\n",
        max_dti = policy.max_debt_to_income_pct,
        min_down = policy.min_down_payment_pct,
        coverage = policy.liquidity_coverage_months,
        payment_pct = policy.payment_rate * 100.0,
        full_name = profile.full_name,
        email = profile.email,
        phone = profile.phone,
        property_zip = profile.property_zip,
        property_address = profile.property_address,
        annual_income = annual_income,
        purchase_price = purchase_price,
        down_payment = down_payment,
        loan_purpose = request.loan_purpose.label(),
        monthly_income = metrics.monthly_income,
        down_payment_percentage = metrics.down_payment_percentage,
        estimated_monthly_payment = metrics.estimated_monthly_payment,
        debt_to_income_ratio = metrics.debt_to_income_ratio,
        liquid_assets = metrics.liquid_assets,
    )
}
