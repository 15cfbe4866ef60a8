use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::bank::{BankDataError, BankDataGateway, ConnectionHandle};
use super::domain::{ApplicantProfile, LiquidityInfo, LoanRequest};
use super::metrics::{derive_metrics, DerivedMetrics, PolicyConfig};
use super::oracle::DecisionOracle;
use super::report::ReportTemplate;
use super::resolver::{DecisionOutcome, DecisionResolver};

/// Service composing the bank-data gateway, metric deriver, and decision
/// resolver into the single evaluation pass downstream collaborators consume.
pub struct PreApprovalService<B, O> {
    bank: Arc<B>,
    resolver: DecisionResolver<O>,
    policy: PolicyConfig,
}

/// Everything a single evaluation pass produces: the boundary outcome, the
/// metrics it was judged on, and the report template selection.
#[derive(Debug, Clone, Serialize)]
pub struct PreApprovalReview {
    pub outcome: DecisionOutcome,
    pub metrics: DerivedMetrics,
    pub template: ReportTemplate,
}

impl<B, O> PreApprovalService<B, O>
where
    B: BankDataGateway + 'static,
    O: DecisionOracle + 'static,
{
    pub fn new(bank: Arc<B>, oracle: O, policy: PolicyConfig) -> Self {
        let resolver = DecisionResolver::new(oracle, policy.clone());

        Self {
            bank,
            resolver,
            policy,
        }
    }

    /// Sum observed balances into the request-scoped liquidity snapshot.
    /// Errors stay with the caller so the intake layer can choose a fallback.
    pub fn liquidity_for(
        &self,
        connection: &ConnectionHandle,
    ) -> Result<LiquidityInfo, BankDataError> {
        let accounts = self.bank.list_accounts(connection)?;
        Ok(LiquidityInfo::from_accounts(&accounts))
    }

    /// Run the full derivation and resolution pass. Infallible by
    /// construction: every failure inside collapses onto the conservative
    /// outcome, so the surrounding report and notification flow always
    /// completes.
    pub fn evaluate(
        &self,
        profile: &ApplicantProfile,
        request: &LoanRequest,
        liquidity: &LiquidityInfo,
    ) -> PreApprovalReview {
        let metrics = derive_metrics(request, liquidity, &self.policy);
        let outcome = self.resolver.resolve(profile, request, &metrics);
        let template = ReportTemplate::for_outcome(&outcome);

        info!(
            decision = outcome.decision().label(),
            template = template.status_label(),
            "pre-approval evaluation complete"
        );

        PreApprovalReview {
            outcome,
            metrics,
            template,
        }
    }
}
