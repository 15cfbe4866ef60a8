//! Mortgage pre-approval decisioning pipeline.
//!
//! Data flows one-directionally: raw intake and aggregator data feed the
//! metric deriver, canonical metrics feed the decision resolver, and the
//! resolved outcome selects the report template. No state survives a pass.

pub mod bank;
pub mod domain;
pub mod metrics;
pub mod money;
pub mod oracle;
pub mod report;
pub mod resolver;
pub mod service;

pub use bank::{BankDataError, BankDataGateway, ConnectionHandle};
pub use domain::{ApplicantProfile, BankAccount, LiquidityInfo, LoanPurpose, LoanRequest, MoneyInput};
pub use metrics::{derive_metrics, DerivedMetrics, PolicyConfig};
pub use oracle::{DecisionOracle, OpenAiDecisionClient, OracleError, OracleSettings};
pub use report::{DecisionView, ReportTemplate};
pub use resolver::{Decision, DecisionOutcome, DecisionResolver, UnavailableReason};
pub use service::{PreApprovalReview, PreApprovalService};

#[cfg(test)]
mod tests;
