use crate::{CellDep, CellInput, CellOutput, HeaderView, JsonBytes, Transaction, H256};
use serde::{Deserialize, Serialize};

/// An input cell of the mock transaction along with the cell it spends.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct ReprMockInput {
    /// The input as it appears in the transaction.
    pub input: CellInput,
    /// The spent cell.
    pub output: CellOutput,
    /// The spent cell data.
    pub data: JsonBytes,
    /// The block hash which committed the spent cell, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<H256>,
}

/// A cell dep of the mock transaction along with the referenced cell.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct ReprMockCellDep {
    /// The cell dep.
    pub cell_dep: CellDep,
    /// The referenced cell.
    pub output: CellOutput,
    /// The referenced cell data.
    pub data: JsonBytes,
    /// The block hash which committed the referenced cell, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<H256>,
}

/// The resolved environment of a mock transaction.
///
/// Fields added by other tools, such as `extensions`, are ignored.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct ReprMockInfo {
    /// One entry per transaction input, in the same order.
    pub inputs: Vec<ReprMockInput>,
    /// The transaction cell deps, with every dep group followed by its members.
    pub cell_deps: Vec<ReprMockCellDep>,
    /// The headers listed in the transaction header deps.
    pub header_deps: Vec<HeaderView>,
}

/// The JSON file format of a self-contained transaction fixture.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_replay_jsonrpc_types::ReprMockTransaction>(r#"
/// {
///   "mock_info": {
///     "inputs": [],
///     "cell_deps": [],
///     "header_deps": []
///   },
///   "tx": {
///     "version": "0x0",
///     "cell_deps": [],
///     "header_deps": [],
///     "inputs": [],
///     "outputs": [],
///     "outputs_data": [],
///     "witnesses": []
///   }
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct ReprMockTransaction {
    /// The resolved environment.
    pub mock_info: ReprMockInfo,
    /// The transaction itself.
    pub tx: Transaction,
}
