mod debugger;
mod groups;

use ckb_replay_fixture::{MockCellDep, MockInfo, MockInput, MockTransaction};
use ckb_replay_types::{
    bytes::Bytes,
    core::{CellDep, CellInput, CellOutput, DepType, OutPoint, Script, ScriptHashType, Transaction},
    H256,
};

pub(crate) fn script(byte: u8, hash_type: ScriptHashType) -> Script {
    Script::new(H256([byte; 32]), hash_type, Bytes::from(vec![byte]))
}

pub(crate) fn output(lock: Script, type_: Option<Script>) -> CellOutput {
    CellOutput {
        capacity: 100,
        lock,
        type_,
    }
}

pub(crate) fn mock_input(index: u32, output: CellOutput) -> MockInput {
    MockInput {
        input: CellInput {
            previous_output: OutPoint::new(H256([0xaa; 32]), index),
            since: 0,
        },
        output,
        data: Bytes::new(),
        header: None,
    }
}

pub(crate) fn code_dep(index: u32, output: CellOutput, data: &'static [u8]) -> MockCellDep {
    MockCellDep {
        cell_dep: CellDep {
            out_point: OutPoint::new(H256([0xbb; 32]), index),
            dep_type: DepType::Code,
        },
        output,
        data: Bytes::from_static(data),
        header: None,
    }
}

/// Two inputs locked by `lock_a`, one by `lock_b`. Input 1 and output 0 carry `udt`, output 1 has
/// no type script and output 2 carries `nft`.
pub(crate) fn sample_mock() -> MockTransaction {
    let lock_a = script(1, ScriptHashType::Data1);
    let lock_b = script(2, ScriptHashType::Type);
    let udt = script(3, ScriptHashType::Data);
    let nft = script(4, ScriptHashType::Type);

    let inputs = vec![
        mock_input(0, output(lock_a.clone(), None)),
        mock_input(1, output(lock_b.clone(), Some(udt.clone()))),
        mock_input(2, output(lock_a.clone(), None)),
    ];
    let tx = Transaction {
        inputs: inputs.iter().map(|input| input.input).collect(),
        outputs: vec![
            output(lock_a, Some(udt)),
            output(lock_b.clone(), None),
            output(lock_b, Some(nft)),
        ],
        outputs_data: vec![Bytes::new(); 3],
        ..Default::default()
    };
    MockTransaction {
        mock_info: MockInfo {
            inputs,
            cell_deps: vec![
                code_dep(0, output(script(9, ScriptHashType::Data), None), b"lock-a"),
                code_dep(1, output(script(1, ScriptHashType::Data), None), b"udt"),
            ],
            header_deps: vec![],
        },
        tx,
    }
}
