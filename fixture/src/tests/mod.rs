mod builder;
mod source;

use ckb_replay_rpc_client::MemoryChain;
use ckb_replay_types::{
    bytes::Bytes,
    core::{CellDep, CellInput, CellOutput, DepType, Header, OutPoint, Script, ScriptHashType, Transaction},
    packed::Entity,
    H256,
};

pub(crate) fn script(byte: u8, hash_type: ScriptHashType) -> Script {
    Script::new(H256([byte; 32]), hash_type, Bytes::from(vec![byte]))
}

pub(crate) fn output(capacity: u64, lock: Script, type_: Option<Script>) -> CellOutput {
    CellOutput {
        capacity,
        lock,
        type_,
    }
}

/// A dep group blob whose header is the total byte length.
pub(crate) fn total_size_dep_group(out_points: &[OutPoint]) -> Bytes {
    let mut blob = ((4 + 36 * out_points.len()) as u32).to_le_bytes().to_vec();
    for out_point in out_points {
        blob.extend_from_slice(&out_point.as_vec());
    }
    Bytes::from(blob)
}

/// A small chain: a code transaction with two binaries, a dep group referencing both, a funding
/// transaction, and a header.
pub(crate) struct Fixture {
    pub chain: MemoryChain,
    pub code_tx: H256,
    pub group_tx: H256,
    pub funding_tx: H256,
    pub header: H256,
}

pub(crate) fn setup() -> Fixture {
    let mut chain = MemoryChain::new();

    let code_tx = chain.insert_transaction(Transaction {
        outputs: vec![
            output(100, script(1, ScriptHashType::Data), None),
            output(200, script(1, ScriptHashType::Data), Some(script(2, ScriptHashType::Type))),
        ],
        outputs_data: vec![Bytes::from_static(b"lock-binary"), Bytes::from_static(b"type-binary")],
        ..Default::default()
    });

    let members = vec![OutPoint::new(code_tx, 0), OutPoint::new(code_tx, 1)];
    let group_tx = chain.insert_transaction(Transaction {
        outputs: vec![output(300, script(3, ScriptHashType::Data), None)],
        outputs_data: vec![members.as_bytes()],
        ..Default::default()
    });

    let funding_tx = chain.insert_transaction(Transaction {
        version: 1,
        outputs: vec![
            output(1000, script(4, ScriptHashType::Type), None),
            output(2000, script(5, ScriptHashType::Data1), Some(script(6, ScriptHashType::Data2))),
        ],
        outputs_data: vec![Bytes::new()],
        ..Default::default()
    });

    let header = Header {
        number: 7,
        ..Default::default()
    }
    .into_view();
    let header_hash = header.hash;
    chain.insert_header(header);

    Fixture {
        chain,
        code_tx,
        group_tx,
        funding_tx,
        header: header_hash,
    }
}

impl Fixture {
    /// A transaction spending both funding outputs, depending on the dep group, the code cell and
    /// the header.
    pub(crate) fn spending_tx(&self) -> Transaction {
        Transaction {
            cell_deps: vec![
                CellDep {
                    out_point: OutPoint::new(self.group_tx, 0),
                    dep_type: DepType::DepGroup,
                },
                CellDep {
                    out_point: OutPoint::new(self.code_tx, 1),
                    dep_type: DepType::Code,
                },
            ],
            header_deps: vec![self.header],
            inputs: vec![
                CellInput {
                    previous_output: OutPoint::new(self.funding_tx, 0),
                    since: 0,
                },
                CellInput {
                    previous_output: OutPoint::new(self.funding_tx, 1),
                    since: 5,
                },
            ],
            outputs: vec![output(2900, script(4, ScriptHashType::Type), Some(script(6, ScriptHashType::Data2)))],
            outputs_data: vec![Bytes::new()],
            witnesses: vec![Bytes::from_static(b"witness")],
            ..Default::default()
        }
    }
}
