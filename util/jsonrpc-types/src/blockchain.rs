use crate::bytes::JsonBytes;
use crate::{
    BlockNumber, Capacity, EpochNumberWithFraction, Timestamp, Uint128, Uint32, Uint64, Version,
};
use ckb_replay_types::{core, H256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a script locates its code: `data`, `type`, `data1` or `data2`.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHashType {
    #[default]
    Data = 0,
    /// Code is the cell whose type script hash is `code_hash`.
    Type = 1,
    Data1 = 2,
    Data2 = 4,
}

impl From<ScriptHashType> for core::ScriptHashType {
    fn from(json: ScriptHashType) -> Self {
        match json {
            ScriptHashType::Data => core::ScriptHashType::Data,
            ScriptHashType::Type => core::ScriptHashType::Type,
            ScriptHashType::Data1 => core::ScriptHashType::Data1,
            ScriptHashType::Data2 => core::ScriptHashType::Data2,
        }
    }
}

impl From<core::ScriptHashType> for ScriptHashType {
    fn from(core: core::ScriptHashType) -> ScriptHashType {
        match core {
            core::ScriptHashType::Data => ScriptHashType::Data,
            core::ScriptHashType::Type => ScriptHashType::Type,
            core::ScriptHashType::Data1 => ScriptHashType::Data1,
            core::ScriptHashType::Data2 => ScriptHashType::Data2,
        }
    }
}

impl fmt::Display for ScriptHashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt::Display::fmt(&core::ScriptHashType::from(*self), f)
    }
}

/// Describes the lock script and type script for a cell.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_replay_jsonrpc_types::Script>(r#"
/// {
///   "code_hash": "0x28e83a1277d48add8e72fadaa9248559e1b632bab2bd60b27955ebc4c03800a5",
///   "hash_type": "data",
///   "args": "0x"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
    pub args: JsonBytes,
}

impl From<Script> for core::Script {
    fn from(json: Script) -> Self {
        let Script {
            code_hash,
            hash_type,
            args,
        } = json;
        core::Script::new(code_hash, hash_type.into(), args.into_bytes())
    }
}

impl From<core::Script> for Script {
    fn from(input: core::Script) -> Script {
        Script {
            code_hash: input.code_hash,
            hash_type: input.hash_type.into(),
            args: JsonBytes::from_bytes(input.args),
        }
    }
}

/// The fields of an output cell except the cell data.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellOutput {
    /// In shannons.
    pub capacity: Capacity,
    pub lock: Script,
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
}

impl From<core::CellOutput> for CellOutput {
    fn from(input: core::CellOutput) -> CellOutput {
        CellOutput {
            capacity: input.capacity.into(),
            lock: input.lock.into(),
            type_: input.type_.map(Into::into),
        }
    }
}

impl From<CellOutput> for core::CellOutput {
    fn from(json: CellOutput) -> Self {
        let CellOutput {
            capacity,
            lock,
            type_,
        } = json;
        core::CellOutput {
            capacity: capacity.value(),
            lock: lock.into(),
            type_: type_.map(Into::into),
        }
    }
}

/// An output of a committed transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct OutPoint {
    pub tx_hash: H256,
    pub index: Uint32,
}

impl From<core::OutPoint> for OutPoint {
    fn from(input: core::OutPoint) -> OutPoint {
        OutPoint {
            tx_hash: input.tx_hash,
            index: input.index.into(),
        }
    }
}

impl From<OutPoint> for core::OutPoint {
    fn from(json: OutPoint) -> Self {
        core::OutPoint::new(json.tx_hash, json.index.value())
    }
}

/// The input cell of a transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellInput {
    pub since: Uint64,
    /// The spent cell.
    pub previous_output: OutPoint,
}

impl From<core::CellInput> for CellInput {
    fn from(input: core::CellInput) -> CellInput {
        CellInput {
            previous_output: input.previous_output.into(),
            since: input.since.into(),
        }
    }
}

impl From<CellInput> for core::CellInput {
    fn from(json: CellInput) -> Self {
        core::CellInput {
            previous_output: json.previous_output.into(),
            since: json.since.value(),
        }
    }
}

/// `code` or `dep_group`.
///
/// Transactions written by hand or by other tools may spell the latter `depGroup` or
/// `DepGroup`; those are normalised before this type is parsed.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    #[default]
    Code,
    /// The cell data is a molecule `OutPointVec` whose members are the actual deps.
    DepGroup,
}

impl From<DepType> for core::DepType {
    fn from(json: DepType) -> Self {
        match json {
            DepType::Code => core::DepType::Code,
            DepType::DepGroup => core::DepType::DepGroup,
        }
    }
}

impl From<core::DepType> for DepType {
    fn from(core: core::DepType) -> DepType {
        match core {
            core::DepType::Code => DepType::Code,
            core::DepType::DepGroup => DepType::DepGroup,
        }
    }
}

/// A cell dep of a transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellDep {
    pub out_point: OutPoint,
    pub dep_type: DepType,
}

impl From<core::CellDep> for CellDep {
    fn from(input: core::CellDep) -> Self {
        CellDep {
            out_point: input.out_point.into(),
            dep_type: input.dep_type.into(),
        }
    }
}

impl From<CellDep> for core::CellDep {
    fn from(json: CellDep) -> Self {
        core::CellDep {
            out_point: json.out_point.into(),
            dep_type: json.dep_type.into(),
        }
    }
}

/// A transaction as returned by `get_transaction` and stored in fixtures.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    pub version: Version,
    pub cell_deps: Vec<CellDep>,
    pub header_deps: Vec<H256>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
    /// Parallel to `outputs`.
    pub outputs_data: Vec<JsonBytes>,
    pub witnesses: Vec<JsonBytes>,
}

impl From<core::Transaction> for Transaction {
    fn from(input: core::Transaction) -> Self {
        Self {
            version: input.version.into(),
            cell_deps: input.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: input.header_deps,
            inputs: input.inputs.into_iter().map(Into::into).collect(),
            outputs: input.outputs.into_iter().map(Into::into).collect(),
            outputs_data: input.outputs_data.into_iter().map(Into::into).collect(),
            witnesses: input.witnesses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Transaction> for core::Transaction {
    fn from(json: Transaction) -> Self {
        let Transaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        } = json;
        core::Transaction {
            version: version.value(),
            cell_deps: cell_deps.into_iter().map(Into::into).collect(),
            header_deps,
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
            outputs_data: outputs_data.into_iter().map(Into::into).collect(),
            witnesses: witnesses.into_iter().map(Into::into).collect(),
        }
    }
}

/// A transaction along with its hash, flattened into one JSON object.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct TransactionView {
    #[serde(flatten)]
    pub inner: Transaction,
    /// The transaction hash.
    pub hash: H256,
}

/// The JSON view of a transaction as well as its status.
///
/// The node omits `transaction` when it does not know the hash.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct TransactionWithStatus {
    /// The transaction.
    #[serde(default)]
    pub transaction: Option<TransactionView>,
    /// The Transaction status.
    pub tx_status: TxStatus,
}

impl TransactionWithStatus {
    /// Returns true if the tx_status is Unknown.
    pub fn is_unknown(&self) -> bool {
        self.tx_status.is_unknown()
    }
}

/// Where the node has seen a transaction.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Proposed,
    Committed,
    Unknown,
    Rejected,
}

/// The status part of a `get_transaction` result. Other fields are ignored.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct TxStatus {
    pub status: Status,
    /// The committing block, if any.
    #[serde(default)]
    pub block_hash: Option<H256>,
}

impl TxStatus {
    pub fn is_unknown(&self) -> bool {
        self.status == Status::Unknown
    }
}

/// A block header. Only the fields covered by the header hash.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub version: Version,
    pub compact_target: Uint32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Timestamp,
    pub number: BlockNumber,
    pub epoch: EpochNumberWithFraction,
    pub parent_hash: H256,
    pub transactions_root: H256,
    pub proposals_hash: H256,
    /// Named `uncles_hash` by nodes older than 0.100.0.
    #[serde(alias = "uncles_hash")]
    pub extra_hash: H256,
    pub dao: H256,
    pub nonce: Uint128,
}

/// A header along with its hash, flattened into one JSON object.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct HeaderView {
    #[serde(flatten)]
    pub inner: Header,
    pub hash: H256,
}

impl From<core::Header> for Header {
    fn from(input: core::Header) -> Self {
        Self {
            version: input.version.into(),
            compact_target: input.compact_target.into(),
            timestamp: input.timestamp.into(),
            number: input.number.into(),
            epoch: input.epoch.into(),
            parent_hash: input.parent_hash,
            transactions_root: input.transactions_root,
            proposals_hash: input.proposals_hash,
            extra_hash: input.extra_hash,
            dao: input.dao,
            nonce: input.nonce.into(),
        }
    }
}

impl From<Header> for core::Header {
    fn from(json: Header) -> Self {
        core::Header {
            version: json.version.value(),
            compact_target: json.compact_target.value(),
            timestamp: json.timestamp.value(),
            number: json.number.value(),
            epoch: json.epoch.value(),
            parent_hash: json.parent_hash,
            transactions_root: json.transactions_root,
            proposals_hash: json.proposals_hash,
            extra_hash: json.extra_hash,
            dao: json.dao,
            nonce: json.nonce.value(),
        }
    }
}

impl From<core::HeaderView> for HeaderView {
    fn from(input: core::HeaderView) -> Self {
        Self {
            inner: input.inner.into(),
            hash: input.hash,
        }
    }
}

/// Keeps the hash reported in JSON. Use `core::Header::calc_header_hash` to verify it.
impl From<HeaderView> for core::HeaderView {
    fn from(input: HeaderView) -> Self {
        core::HeaderView {
            inner: input.inner.into(),
            hash: input.hash,
        }
    }
}
