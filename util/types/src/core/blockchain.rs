use crate::{bytes::Bytes, H256};
use derive_more::Display;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A byte or a text could not be converted into one of the chain enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEnumValue {
    /// Unknown byte value.
    #[error("Invalid {name} {value}")]
    Byte {
        /// The enum name.
        name: &'static str,
        /// The rejected byte.
        value: u8,
    },
    /// Unknown text value.
    #[error("Invalid {name} {value:?}")]
    Text {
        /// The enum name.
        name: &'static str,
        /// The rejected text.
        value: String,
    },
}

/// Specifies how the script `code_hash` is used to match the script code and how to run the code.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum ScriptHashType {
    /// Type "data" matches script code via cell data hash, and run the script code in v0 CKB VM.
    #[default]
    #[display("data")]
    Data = 0,
    /// Type "type" matches script code via cell type script hash.
    #[display("type")]
    Type = 1,
    /// Type "data1" matches script code via cell data hash, and run the script code in v1 CKB VM.
    #[display("data1")]
    Data1 = 2,
    /// Type "data2" matches script code via cell data hash, and run the script code in v2 CKB VM.
    #[display("data2")]
    Data2 = 4,
}

impl From<ScriptHashType> for u8 {
    fn from(value: ScriptHashType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ScriptHashType {
    type Error = InvalidEnumValue;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ScriptHashType::Data),
            1 => Ok(ScriptHashType::Type),
            2 => Ok(ScriptHashType::Data1),
            4 => Ok(ScriptHashType::Data2),
            _ => Err(InvalidEnumValue::Byte {
                name: "script hash type",
                value: v,
            }),
        }
    }
}

impl FromStr for ScriptHashType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(ScriptHashType::Data),
            "type" => Ok(ScriptHashType::Type),
            "data1" => Ok(ScriptHashType::Data1),
            "data2" => Ok(ScriptHashType::Data2),
            _ => Err(InvalidEnumValue::Text {
                name: "script hash type",
                value: s.to_owned(),
            }),
        }
    }
}

/// The dep cell type.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum DepType {
    /// The cell data is the executable code.
    #[default]
    #[display("code")]
    Code = 0,
    /// The cell data is a molecule encoded vector of out points.
    #[display("dep_group")]
    DepGroup = 1,
}

impl From<DepType> for u8 {
    fn from(value: DepType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for DepType {
    type Error = InvalidEnumValue;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DepType::Code),
            1 => Ok(DepType::DepGroup),
            _ => Err(InvalidEnumValue::Byte {
                name: "dep type",
                value: v,
            }),
        }
    }
}

/// Describes the lock script and type script for a cell.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: H256,
    /// Specifies how to use the `code_hash` to match the script code.
    pub hash_type: ScriptHashType,
    /// Arguments for script.
    pub args: Bytes,
}

impl Script {
    /// Creates a script.
    pub fn new(code_hash: H256, hash_type: ScriptHashType, args: Bytes) -> Self {
        Script {
            code_hash,
            hash_type,
            args,
        }
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Script")
            .field("code_hash", &self.code_hash)
            .field("hash_type", &self.hash_type)
            .field("args", &format_args!("0x{}", faster_hex::hex_string(&self.args)))
            .finish()
    }
}

/// Reference to a cell via transaction hash and output index.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct OutPoint {
    /// Transaction hash in which the cell is an output.
    pub tx_hash: H256,
    /// The output index of the cell in the transaction specified by `tx_hash`.
    pub index: u32,
}

impl OutPoint {
    /// Creates an out point.
    pub fn new(tx_hash: H256, index: u32) -> Self {
        OutPoint { tx_hash, index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}:{}", self.tx_hash, self.index)
    }
}

/// The input cell of a transaction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct CellInput {
    /// Reference to the input cell.
    pub previous_output: OutPoint,
    /// Restrict when the transaction can be committed into the chain.
    pub since: u64,
}

/// The cell dependency of a transaction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct CellDep {
    /// Reference to the cell.
    pub out_point: OutPoint,
    /// Dependency type.
    pub dep_type: DepType,
}

/// The fields of an output cell except the cell data.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct CellOutput {
    /// The cell capacity, in shannons.
    pub capacity: u64,
    /// The lock script.
    pub lock: Script,
    /// The optional type script.
    pub type_: Option<Script>,
}

/// The transaction.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Transaction {
    /// Reserved for future usage. It must equal 0 in current version.
    pub version: u32,
    /// An array of cell deps.
    pub cell_deps: Vec<CellDep>,
    /// An array of header deps.
    pub header_deps: Vec<H256>,
    /// An array of input cells.
    pub inputs: Vec<CellInput>,
    /// An array of output cells.
    pub outputs: Vec<CellOutput>,
    /// Output cells data, aligned with `outputs`.
    pub outputs_data: Vec<Bytes>,
    /// An array of variable-length binaries, the witnesses.
    pub witnesses: Vec<Bytes>,
}

/// The block header.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Header {
    /// The block version.
    pub version: u32,
    /// The block difficulty target.
    pub compact_target: u32,
    /// The block timestamp, in milliseconds.
    pub timestamp: u64,
    /// The consecutive block number starting from 0.
    pub number: u64,
    /// The epoch information of this block.
    pub epoch: u64,
    /// The header hash of the parent block.
    pub parent_hash: H256,
    /// The commitment to all the transactions in the block.
    pub transactions_root: H256,
    /// The hash on `proposals` in the block body.
    pub proposals_hash: H256,
    /// The hash on `uncles` and extension in the block body.
    pub extra_hash: H256,
    /// DAO fields.
    pub dao: H256,
    /// Miner can modify this field to find a proper value such that the Eaglesong of the header is
    /// within the target encoded from `compact_target`.
    pub nonce: u128,
}

/// A header with its cached hash.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct HeaderView {
    /// The header fields.
    pub inner: Header,
    /// The header hash.
    pub hash: H256,
}
