use crate::error::ReplaceError;
use ckb_replay_fixture::MockTransaction;
use ckb_replay_types::{
    bytes::Bytes,
    core::{CellOutput, Script, ScriptHashType},
    H256,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How a `data`, `data1` or `data2` target locates the cell dep holding the binary.
///
/// A `type` target always matches the type script hash of the cell dep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The hash of the cell data equals the code hash.
    #[default]
    DataHash,
    /// The code hash of the cell lock script equals the code hash.
    LockCodeHash,
    /// Either of the above, the lock code hash is checked first.
    Either,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchMode::DataHash => write!(f, "data-hash"),
            MatchMode::LockCodeHash => write!(f, "lock-code-hash"),
            MatchMode::Either => write!(f, "either"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}

/// The script code to replace, as a script refers to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplaceTarget {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
}

impl From<&Script> for ReplaceTarget {
    fn from(script: &Script) -> Self {
        ReplaceTarget {
            code_hash: script.code_hash,
            hash_type: script.hash_type,
        }
    }
}

impl ReplaceTarget {
    fn matches(&self, output: &CellOutput, data: &[u8], mode: MatchMode) -> bool {
        match self.hash_type {
            ScriptHashType::Type => output.calc_type_hash() == Some(self.code_hash),
            ScriptHashType::Data | ScriptHashType::Data1 | ScriptHashType::Data2 => {
                let by_lock = || output.lock.code_hash == self.code_hash;
                let by_data = || CellOutput::calc_data_hash(data) == self.code_hash;
                match mode {
                    MatchMode::DataHash => by_data(),
                    MatchMode::LockCodeHash => by_lock(),
                    MatchMode::Either => by_lock() || by_data(),
                }
            }
        }
    }
}

/// A binary to swap into the mock transaction before running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub binary: Bytes,
    pub mode: MatchMode,
    /// `None` to replace the code of whichever script is run.
    pub target: Option<ReplaceTarget>,
}

/// Swaps the data of the first cell dep matching `target` with `binary`.
///
/// Returns the index of the replaced entry in `mock_info.cell_deps`. When nothing matches, the
/// mock transaction is left untouched.
pub fn replace_binary(
    mock: &mut MockTransaction,
    target: &ReplaceTarget,
    binary: Bytes,
    mode: MatchMode,
) -> Result<usize, ReplaceError> {
    let position = mock
        .mock_info
        .cell_deps
        .iter()
        .position(|dep| target.matches(&dep.output, &dep.data, mode));
    match position {
        Some(i) => {
            log::info!(
                "replacing the data of cell dep {} ({}) with a {} bytes binary",
                i,
                mock.mock_info.cell_deps[i].cell_dep.out_point,
                binary.len()
            );
            mock.mock_info.cell_deps[i].data = binary;
            Ok(i)
        }
        None => {
            log::warn!(
                "no cell dep matches code hash {} ({}, {}), binary is not replaced",
                target.code_hash,
                target.hash_type,
                mode
            );
            Err(ReplaceError::NotFound {
                code_hash: target.code_hash,
                hash_type: target.hash_type,
            })
        }
    }
}
