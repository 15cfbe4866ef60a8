use serde::{Deserialize, Serialize};

use super::domain::ApplicantProfile;
use super::metrics::DerivedMetrics;
use super::resolver::{Decision, DecisionOutcome};

/// Which report the rendering collaborator should produce for an outcome.
/// `Pending` appears only when the oracle was never successfully consulted;
/// it is a rendering state, not a third verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTemplate {
    Favorable,
    Unfavorable,
    Pending,
}

impl ReportTemplate {
    pub fn for_outcome(outcome: &DecisionOutcome) -> Self {
        match outcome {
            DecisionOutcome::Decided {
                decision: Decision::Approve,
            } => ReportTemplate::Favorable,
            DecisionOutcome::Decided {
                decision: Decision::Disapprove,
            } => ReportTemplate::Unfavorable,
            DecisionOutcome::Unavailable { .. } => ReportTemplate::Pending,
        }
    }

    pub const fn status_label(self) -> &'static str {
        match self {
            ReportTemplate::Favorable => "APPROVED",
            ReportTemplate::Unfavorable => "DISAPPROVED",
            ReportTemplate::Pending => "PENDING",
        }
    }

    /// Accent color used by the report renderer for the status banner.
    pub const fn accent_color(self) -> &'static str {
        match self {
            ReportTemplate::Favorable => "#28a745",
            ReportTemplate::Unfavorable => "#dc3545",
            ReportTemplate::Pending => "#ffc107",
        }
    }
}

/// Sanitized rendering inputs handed to the report collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    pub applicant_name: String,
    pub template: ReportTemplate,
    pub status_label: &'static str,
    pub accent_color: &'static str,
    pub metrics: DerivedMetrics,
}

impl DecisionView {
    pub fn new(
        profile: &ApplicantProfile,
        outcome: &DecisionOutcome,
        metrics: &DerivedMetrics,
    ) -> Self {
        let template = ReportTemplate::for_outcome(outcome);

        Self {
            applicant_name: profile.full_name.clone(),
            template,
            status_label: template.status_label(),
            accent_color: template.accent_color(),
            metrics: metrics.clone(),
        }
    }
}
