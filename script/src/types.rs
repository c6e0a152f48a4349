use ckb_replay_types::{core::Script, H256};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A group of cells that share the same script.
///
/// The script runs once for the whole group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptGroup {
    /// The script.
    ///
    /// A script group is a group of input and output cells that share the same script.
    pub script: Script,
    /// The hash of `script`, the identity of the group.
    pub script_hash: H256,
    /// The script group type.
    pub group_type: ScriptGroupType,
    /// Indices of input cells.
    pub input_indices: Vec<usize>,
    /// Indices of output cells.
    pub output_indices: Vec<usize>,
}

impl ScriptGroup {
    /// Creates a new script group struct.
    pub fn new(script: &Script, group_type: ScriptGroupType) -> Self {
        Self {
            group_type,
            script_hash: script.calc_script_hash(),
            script: script.to_owned(),
            input_indices: vec![],
            output_indices: vec![],
        }
    }

    /// Creates a lock script group.
    pub fn from_lock_script(script: &Script) -> Self {
        Self::new(script, ScriptGroupType::Lock)
    }

    /// Creates a type script group.
    pub fn from_type_script(script: &Script) -> Self {
        Self::new(script, ScriptGroupType::Type)
    }
}

/// The script group type.
///
/// A cell can have a lock script and an optional type script. Even they reference the same script,
/// lock script and type script will not be grouped together.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ScriptGroupType {
    /// Lock script group.
    Lock,
    /// Type script group.
    Type,
}

impl ScriptGroupType {
    /// The lowercase name used on command lines and at the engine boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptGroupType::Lock => "lock",
            ScriptGroupType::Type => "type",
        }
    }
}

impl fmt::Display for ScriptGroupType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScriptGroupType::Lock => write!(f, "Lock"),
            ScriptGroupType::Type => write!(f, "Type"),
        }
    }
}

impl FromStr for ScriptGroupType {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}

/// Whether a selected cell is an input or an output of the transaction.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Input,
    Output,
}

impl CellType {
    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Input => "input",
            CellType::Output => "output",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellType {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}

/// Picks the lock or type script of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellSelector {
    pub cell_type: CellType,
    pub cell_index: usize,
    pub group_type: ScriptGroupType,
}

impl CellSelector {
    /// The `ckb-debugger` command line running the same script group.
    pub fn debugger_command(&self) -> String {
        format!(
            "ckb-debugger --tx-file mock_tx.json --cell-index {} --cell-type {} --script-group-type {}",
            self.cell_index,
            self.cell_type.as_str(),
            self.group_type.as_str()
        )
    }
}
