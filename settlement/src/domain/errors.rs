use std::error::Error;
use std::fmt;

use crate::infrastructure::persistence::error::DbError;

/// Error type for settling a single claimed offer
#[derive(Debug)]
pub enum SettlementError {
    DbError(DbError),
    /// The settlement transaction failed and the claim was released
    TransactionError(String),
}

impl fmt::Display for SettlementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementError::DbError(e) => write!(f, "Database error: {}", e),
            SettlementError::TransactionError(msg) => {
                write!(f, "Settlement transaction error: {}", msg)
            }
        }
    }
}

impl Error for SettlementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettlementError::DbError(e) => Some(e),
            SettlementError::TransactionError(_) => None,
        }
    }
}

impl From<DbError> for SettlementError {
    fn from(error: DbError) -> Self {
        SettlementError::DbError(error)
    }
}

/// Error type for the sweep loop
#[derive(Debug)]
pub enum SweepError {
    DbError(DbError),
    SettlementError(SettlementError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::DbError(e) => write!(f, "Database error: {}", e),
            SweepError::SettlementError(e) => write!(f, "Settlement error: {}", e),
        }
    }
}

impl Error for SweepError {}

impl From<DbError> for SweepError {
    fn from(error: DbError) -> Self {
        SweepError::DbError(error)
    }
}

impl From<SettlementError> for SweepError {
    fn from(error: SettlementError) -> Self {
        SweepError::SettlementError(error)
    }
}
