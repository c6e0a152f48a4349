use super::setup;
use crate::{parse_packed_tx, parse_raw_tx, Progress, TxSource};
use ckb_replay_error::ErrorKind;
use ckb_replay_jsonrpc_types::{Transaction as JsonTransaction, TransactionView};
use ckb_replay_types::{
    core::{DepType, OutPoint, ScriptHashType},
    packed::Entity,
    H256,
};
use pretty_assertions::assert_eq;

const LOOSE_TX: &str = r#"{
  "version": 0,
  "hash": "0x0000000000000000000000000000000000000000000000000000000000000000",
  "cell_deps": [
    {
      "out_point": {
        "tx_hash": "0x1111111111111111111111111111111111111111111111111111111111111111",
        "index": "1"
      },
      "dep_type": "depGroup"
    },
    {
      "out_point": {
        "tx_hash": "0x2222222222222222222222222222222222222222222222222222222222222222",
        "index": "0X0A"
      },
      "dep_type": "DepGroup"
    }
  ],
  "header_deps": [],
  "inputs": [
    {
      "previous_output": {
        "tx_hash": "0x3333333333333333333333333333333333333333333333333333333333333333",
        "index": 2
      },
      "since": "0x00"
    }
  ],
  "outputs": [
    {
      "capacity": "10000000000",
      "lock": {
        "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
        "hash_type": "type",
        "args": "0x"
      }
    }
  ],
  "outputs_data": ["0x"],
  "witnesses": []
}"#;

#[test]
fn raw_tx_accepts_loose_numbers() {
    let tx = parse_raw_tx(LOOSE_TX).unwrap();
    assert_eq!(tx.version, 0);
    assert_eq!(tx.cell_deps[0].out_point, OutPoint::new(H256([0x11; 32]), 1));
    assert_eq!(tx.cell_deps[1].out_point.index, 10);
    assert!(tx.cell_deps.iter().all(|dep| dep.dep_type == DepType::DepGroup));
    assert_eq!(tx.inputs[0].previous_output.index, 2);
    assert_eq!(tx.inputs[0].since, 0);
    assert_eq!(tx.outputs[0].capacity, 10_000_000_000);
    assert_eq!(tx.outputs[0].lock.hash_type, ScriptHashType::Type);
    assert!(tx.outputs[0].type_.is_none());
}

#[test]
fn raw_tx_accepts_rpc_result() {
    let wrapped = format!(
        r#"{{"transaction": {}, "tx_status": {{"status": "committed"}}}}"#,
        LOOSE_TX
    );
    assert_eq!(parse_raw_tx(&wrapped).unwrap(), parse_raw_tx(LOOSE_TX).unwrap());
}

#[test]
fn raw_tx_accepts_rpc_view() {
    let fixture = setup();
    let tx = fixture.spending_tx();
    let view = TransactionView {
        inner: JsonTransaction::from(tx.clone()),
        hash: tx.calc_tx_hash(),
    };
    let text = serde_json::to_string(&view).unwrap();
    assert_eq!(parse_raw_tx(&text).unwrap(), tx);
}

#[test]
fn raw_tx_rejects_garbage() {
    assert_eq!(parse_raw_tx("not json").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_raw_tx("[]").unwrap_err().kind(), ErrorKind::Parse);
    let negative = LOOSE_TX.replace("\"version\": 0", "\"version\": -1");
    assert_eq!(parse_raw_tx(&negative).unwrap_err().kind(), ErrorKind::Parse);
    let overflow = LOOSE_TX.replace("\"index\": 2", "\"index\": \"4294967296\"");
    assert_eq!(parse_raw_tx(&overflow).unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn packed_tx_decodes_molecule_hex() {
    let tx = setup().spending_tx();
    let hex = faster_hex::hex_string(&tx.as_vec());
    assert_eq!(parse_packed_tx(&hex).unwrap(), tx);
    assert_eq!(parse_packed_tx(&format!("0x{}\n", hex)).unwrap(), tx);
}

#[test]
fn packed_tx_rejects_bad_input() {
    assert_eq!(parse_packed_tx("0x123").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_packed_tx("zz").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_packed_tx("0x00000000").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn hash_source() {
    let hash = "0x".to_owned() + &"ab".repeat(32);
    assert_eq!(
        TxSource::from_hash_str(&hash).unwrap(),
        TxSource::Hash(H256([0xab; 32]))
    );
    assert_eq!(
        TxSource::from_hash_str(&hash[2..]).unwrap(),
        TxSource::Hash(H256([0xab; 32]))
    );
    assert_eq!(
        TxSource::from_hash_str("0x1234").unwrap_err().kind(),
        ErrorKind::Parse
    );
}

#[tokio::test]
async fn every_source_yields_the_same_fixture() {
    let fixture = setup();
    let mut chain = fixture.chain.clone();
    let tx = fixture.spending_tx();
    let hash = chain.insert_transaction(tx.clone());

    let from_hash = TxSource::Hash(hash)
        .into_mock_transaction(&chain, &mut |_: Progress| {})
        .await
        .unwrap();
    let json = serde_json::to_string(&JsonTransaction::from(tx.clone())).unwrap();
    let from_json = TxSource::RawJson(json)
        .into_mock_transaction(&chain, &mut |_: Progress| {})
        .await
        .unwrap();
    let from_packed = TxSource::Packed(faster_hex::hex_string(&tx.as_vec()))
        .into_mock_transaction(&chain, &mut |_: Progress| {})
        .await
        .unwrap();
    let from_fixture = TxSource::Fixture(from_hash.to_json().unwrap())
        .into_mock_transaction(&chain, &mut |_: Progress| {})
        .await
        .unwrap();

    assert_eq!(from_json, from_hash);
    assert_eq!(from_packed, from_hash);
    assert_eq!(from_fixture, from_hash);
}
