use serde::{Deserialize, Serialize};

use super::domain::BankAccount;

/// Opaque token referencing an established aggregator connection (the
/// exchanged access token in the hosted integration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionHandle(pub String);

/// Error raised by the aggregator boundary. The intake layer decides how to
/// degrade; the decisioning core itself only consumes a finished
/// [`LiquidityInfo`](super::domain::LiquidityInfo).
#[derive(Debug, thiserror::Error)]
pub enum BankDataError {
    #[error("bank data connection not established")]
    NotConnected,
    #[error("bank data provider unavailable: {0}")]
    Unavailable(String),
}

/// Aggregator boundary so the decisioning core can be exercised in isolation.
pub trait BankDataGateway: Send + Sync {
    fn list_accounts(&self, connection: &ConnectionHandle)
        -> Result<Vec<BankAccount>, BankDataError>;
}
