use std::sync::Mutex;

use chrono::{TimeZone, Utc};

use crate::workflows::preapproval::bank::{BankDataError, BankDataGateway, ConnectionHandle};
use crate::workflows::preapproval::domain::{
    ApplicantProfile, BankAccount, LiquidityInfo, LoanPurpose, LoanRequest, MoneyInput,
};
use crate::workflows::preapproval::metrics::PolicyConfig;
use crate::workflows::preapproval::oracle::{DecisionOracle, OracleError};

pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        full_name: "Jordan Ellis".to_string(),
        email: "jordan.ellis@example.com".to_string(),
        phone: "515-555-0173".to_string(),
        property_address: "412 Maple Court, Des Moines, IA".to_string(),
        property_zip: "50309".to_string(),
    }
}

pub(super) fn request(
    annual_income: MoneyInput,
    purchase_price: MoneyInput,
    down_payment: MoneyInput,
) -> LoanRequest {
    LoanRequest {
        annual_income,
        purchase_price,
        down_payment,
        loan_purpose: LoanPurpose::Purchase,
        cash_out_amount: None,
        submitted_at: Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

/// The well-financed applicant: $250k income, $500k price, $50k down.
pub(super) fn strong_request() -> LoanRequest {
    request(
        MoneyInput::from("$250,000"),
        MoneyInput::from(500_000.0),
        MoneyInput::from("$50,000"),
    )
}

pub(super) fn liquidity(total_balance: f64) -> LiquidityInfo {
    LiquidityInfo { total_balance }
}

pub(super) fn policy() -> PolicyConfig {
    PolicyConfig::default()
}

pub(super) fn checking_account(id: &str, balance: f64) -> BankAccount {
    BankAccount {
        id: id.to_string(),
        name: "Everyday Checking".to_string(),
        kind: "depository".to_string(),
        subtype: "checking".to_string(),
        current_balance: MoneyInput::from(balance),
        available_balance: MoneyInput::from(balance),
        currency: "USD".to_string(),
    }
}

/// Oracle fake that records every prompt and answers with a fixed reply.
pub(super) struct ScriptedOracle {
    reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl DecisionOracle for ScriptedOracle {
    fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Oracle fake simulating a transport failure on every call.
pub(super) struct FailingOracle;

impl DecisionOracle for FailingOracle {
    fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Transport("connection refused".to_string()))
    }
}

/// Oracle fake simulating a deployment without credentials configured.
pub(super) struct CredentiallessOracle;

impl DecisionOracle for CredentiallessOracle {
    fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::MissingCredentials)
    }
}

/// Gateway fake serving a fixed account listing.
pub(super) struct StaticBankGateway {
    pub accounts: Vec<BankAccount>,
}

impl BankDataGateway for StaticBankGateway {
    fn list_accounts(
        &self,
        _connection: &ConnectionHandle,
    ) -> Result<Vec<BankAccount>, BankDataError> {
        Ok(self.accounts.clone())
    }
}

/// Gateway fake simulating an unreachable aggregator.
pub(super) struct FailingBankGateway;

impl BankDataGateway for FailingBankGateway {
    fn list_accounts(
        &self,
        _connection: &ConnectionHandle,
    ) -> Result<Vec<BankAccount>, BankDataError> {
        Err(BankDataError::Unavailable("aggregator timed out".to_string()))
    }
}
