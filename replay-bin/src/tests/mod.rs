use crate::helper::{chain_provider, load_mock_transaction, new_runtime, FetchProgress};
use ckb_replay_app_config::RpcArgs;
use ckb_replay_fixture::{MockTransaction, Progress, Stage, TxSource};
use ckb_replay_rpc_client::Network;
use ckb_replay_types::{bytes::Bytes, core::Transaction};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn local_rpc() -> RpcArgs {
    RpcArgs {
        network: "http://127.0.0.1:1".parse::<Network>().expect("url"),
        timeout: Duration::from_secs(1),
    }
}

#[test]
fn provider_uses_the_network_url() {
    let client = chain_provider(&local_rpc()).expect("client");
    assert_eq!(client.url().as_str(), "http://127.0.0.1:1/");

    let rpc = RpcArgs {
        network: Network::Testnet,
        timeout: Duration::from_secs(1),
    };
    let client = chain_provider(&rpc).expect("client");
    assert_eq!(client.url().as_str(), "https://testnet.ckbapp.dev/rpc");
}

#[test]
fn fixture_source_needs_no_node() {
    let mock = MockTransaction {
        tx: Transaction {
            witnesses: vec![Bytes::from_static(b"w")],
            ..Default::default()
        },
        ..Default::default()
    };
    let runtime = new_runtime().expect("runtime");
    let loaded = load_mock_transaction(
        &runtime,
        &local_rpc(),
        TxSource::Fixture(mock.to_json().expect("json")),
    )
    .expect("load");
    assert_eq!(loaded, mock);
}

#[test]
fn progress_bar_accepts_every_stage() {
    let progress = FetchProgress::new();
    for (stage, current, total) in [
        (Stage::FetchingTx, 0, 1),
        (Stage::FetchingInputs, 1, 2),
        (Stage::FetchingCellDeps, 0, 0),
        (Stage::FetchingHeaders, 1, 1),
        (Stage::Done, 1, 1),
    ] {
        progress.update(Progress::new(stage, current, total));
    }
}
