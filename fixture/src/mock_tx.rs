use crate::{error::ParseError, resolver::ResolvedCell};
use ckb_replay_error::{Error, InternalErrorKind};
use ckb_replay_jsonrpc_types::{ReprMockCellDep, ReprMockInfo, ReprMockInput, ReprMockTransaction};
use ckb_replay_types::{
    bytes::Bytes,
    core::{CellDep, CellInput, CellOutput, DepType, HeaderView, Transaction},
    H256,
};

/// A transaction input with the cell it spends.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MockInput {
    pub input: CellInput,
    pub output: CellOutput,
    pub data: Bytes,
    pub header: Option<H256>,
}

/// A cell dep with the cell it references.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MockCellDep {
    pub cell_dep: CellDep,
    pub output: CellOutput,
    pub data: Bytes,
    pub header: Option<H256>,
}

impl MockCellDep {
    /// Creates a `code` entry for a dep group member.
    pub fn code(cell_dep: CellDep, cell: ResolvedCell) -> Self {
        MockCellDep {
            cell_dep: CellDep {
                dep_type: DepType::Code,
                ..cell_dep
            },
            output: cell.output,
            data: cell.data,
            header: None,
        }
    }

    pub fn is_dep_group(&self) -> bool {
        self.cell_dep.dep_type == DepType::DepGroup
    }
}

/// Everything the transaction reads from the chain.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MockInfo {
    /// Aligned 1:1 with `tx.inputs`.
    pub inputs: Vec<MockInput>,
    /// `tx.cell_deps` in order, every dep group followed by its members as `code` entries.
    pub cell_deps: Vec<MockCellDep>,
    pub header_deps: Vec<HeaderView>,
}

/// A transaction bundled with every cell and header it depends on.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MockTransaction {
    pub mock_info: MockInfo,
    pub tx: Transaction,
}

impl MockTransaction {
    /// Parses the JSON fixture format.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let repr: ReprMockTransaction = serde_json::from_str(text).map_err(ParseError::from)?;
        Ok(repr.into())
    }

    /// Renders the JSON fixture format, pretty printed with 2 spaces.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(&ReprMockTransaction::from(self.clone()))
            .map_err(|err| InternalErrorKind::Encoding.because(err).into())
    }

    /// The transaction hash.
    pub fn tx_hash(&self) -> H256 {
        self.tx.calc_tx_hash()
    }
}

impl From<MockInput> for ReprMockInput {
    fn from(input: MockInput) -> Self {
        ReprMockInput {
            input: input.input.into(),
            output: input.output.into(),
            data: input.data.into(),
            header: input.header,
        }
    }
}

impl From<ReprMockInput> for MockInput {
    fn from(repr: ReprMockInput) -> Self {
        MockInput {
            input: repr.input.into(),
            output: repr.output.into(),
            data: repr.data.into(),
            header: repr.header,
        }
    }
}

impl From<MockCellDep> for ReprMockCellDep {
    fn from(dep: MockCellDep) -> Self {
        ReprMockCellDep {
            cell_dep: dep.cell_dep.into(),
            output: dep.output.into(),
            data: dep.data.into(),
            header: dep.header,
        }
    }
}

impl From<ReprMockCellDep> for MockCellDep {
    fn from(repr: ReprMockCellDep) -> Self {
        MockCellDep {
            cell_dep: repr.cell_dep.into(),
            output: repr.output.into(),
            data: repr.data.into(),
            header: repr.header,
        }
    }
}

impl From<MockInfo> for ReprMockInfo {
    fn from(info: MockInfo) -> Self {
        ReprMockInfo {
            inputs: info.inputs.into_iter().map(Into::into).collect(),
            cell_deps: info.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: info.header_deps.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ReprMockInfo> for MockInfo {
    fn from(repr: ReprMockInfo) -> Self {
        MockInfo {
            inputs: repr.inputs.into_iter().map(Into::into).collect(),
            cell_deps: repr.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: repr.header_deps.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MockTransaction> for ReprMockTransaction {
    fn from(mock: MockTransaction) -> Self {
        ReprMockTransaction {
            mock_info: mock.mock_info.into(),
            tx: mock.tx.into(),
        }
    }
}

impl From<ReprMockTransaction> for MockTransaction {
    fn from(repr: ReprMockTransaction) -> Self {
        MockTransaction {
            mock_info: repr.mock_info.into(),
            tx: repr.tx.into(),
        }
    }
}
