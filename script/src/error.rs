use crate::types::{CellType, ScriptGroupType};
use ckb_replay_error::{Error, ErrorKind};
use ckb_replay_types::{core::ScriptHashType, H256};
use thiserror::Error;

/// No cell dep matched a binary replacement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("no cell dep matches code hash {code_hash} with hash type {hash_type}")]
    NotFound {
        code_hash: H256,
        hash_type: ScriptHashType,
    },
}

impl From<ReplaceError> for Error {
    fn from(error: ReplaceError) -> Self {
        ErrorKind::Replacement.because(error)
    }
}

/// The mock transaction has nothing to run for the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("no script groups")]
    NoScriptGroups,
    #[error("{cell_type} {index} does not exist")]
    CellNotFound { cell_type: CellType, index: usize },
    #[error("{cell_type} {index} has no {} script", group_type.as_str())]
    ScriptNotFound {
        cell_type: CellType,
        index: usize,
        group_type: ScriptGroupType,
    },
}

impl From<RunError> for Error {
    fn from(error: RunError) -> Self {
        ErrorKind::NotFound.because(error)
    }
}

/// The script engine could not run a group.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine {program} is unavailable: {reason}")]
    Unavailable { program: String, reason: String },
    #[error("failed to run engine: {0}")]
    Io(#[from] std::io::Error),
}

impl From<EngineError> for Error {
    fn from(error: EngineError) -> Self {
        ErrorKind::Engine.because(error)
    }
}
