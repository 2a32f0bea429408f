use thiserror::Error;

use crate::domain::{InvalidRangeError, MalformedEntryError};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid period range: {0}")]
    InvalidRange(#[from] InvalidRangeError),

    #[error("malformed ledger entry: {0}")]
    MalformedEntry(#[from] MalformedEntryError),
}
