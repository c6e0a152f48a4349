use ckb_replay_error::{Error, ErrorKind};
use ckb_replay_types::{
    core::OutPoint, error::VerificationError, packed::FormatMismatch, H256,
};
use thiserror::Error;

/// A record needed by the mock transaction cannot be found on chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("transaction {0} is not found")]
    TransactionNotFound(H256),
    #[error("out point {out_point} is out of bounds, the transaction has {outputs} outputs")]
    OutputIndexOutOfBounds { out_point: OutPoint, outputs: usize },
    #[error("header {0} is not found")]
    HeaderNotFound(H256),
}

impl From<FixtureError> for Error {
    fn from(error: FixtureError) -> Self {
        ErrorKind::NotFound.because(error)
    }
}

/// Dep group data is malformed. Reported as a warning, the build goes on.
pub fn format_error(mismatch: FormatMismatch) -> Error {
    ErrorKind::Format.because(mismatch)
}

/// A transaction or fixture text is malformed.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid hex: {0}")]
    Hex(String),
    #[error("invalid molecule record: {0}")]
    Molecule(VerificationError),
    #[error("invalid field {field}: {reason}")]
    Field { field: String, reason: String },
    #[error("invalid transaction hash {0:?}")]
    Hash(String),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        ErrorKind::Parse.because(error)
    }
}
