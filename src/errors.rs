use std::path::PathBuf;

use thiserror::Error;

use crate::ledger::{AmountError, RecordError};

/// Error type that captures common expense log failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Cannot read configuration at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed record: {0}")]
    Record(#[from] RecordError),
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
    #[error("Field `{field}` must not contain {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ExpenseError {
    pub(crate) fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExpenseError::Store {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
