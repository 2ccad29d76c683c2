use thiserror::Error;

/// Error type for expense ledger queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
