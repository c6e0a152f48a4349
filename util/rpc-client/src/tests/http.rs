use crate::{ChainProvider, HttpRpcClient};
use ckb_replay_error::ErrorKind;
use ckb_replay_jsonrpc_types::{Transaction, TransactionView};
use ckb_replay_types::{bytes::Bytes, core, H256};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Serves one HTTP request with `body` and returns the request body it received.
async fn serve_once(body: serde_json::Value) -> (url::Url, JoinHandle<serde_json::Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        let body_start = loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&request[..body_start]).to_lowercase();
        let content_length: usize = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|value| value.trim().parse().unwrap())
            .unwrap_or(0);
        while request.len() < body_start + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
        }

        let payload = body.to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            payload.len(),
            payload
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        serde_json::from_slice(&request[body_start..body_start + content_length]).unwrap()
    });
    let url = format!("http://{}", addr).parse().unwrap();
    (url, handle)
}

fn client(url: url::Url) -> HttpRpcClient {
    HttpRpcClient::new(url, Duration::from_secs(5)).unwrap()
}

fn sample_tx() -> core::Transaction {
    core::Transaction {
        inputs: vec![core::CellInput {
            previous_output: core::OutPoint::new(H256([1; 32]), 0),
            since: 0,
        }],
        outputs: vec![core::CellOutput {
            capacity: 1000,
            ..Default::default()
        }],
        outputs_data: vec![Bytes::new()],
        witnesses: vec![Bytes::from_static(b"w")],
        ..Default::default()
    }
}

#[tokio::test]
async fn get_transaction_decodes_success() {
    let tx = sample_tx();
    let hash = tx.calc_tx_hash();
    let view = TransactionView {
        inner: Transaction::from(tx.clone()),
        hash,
    };
    let (url, server) = serve_once(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "transaction": view,
            "tx_status": { "status": "committed", "block_hash": format!("{:#x}", H256([2; 32])) }
        }
    }))
    .await;

    let fetched = client(url).get_transaction(&hash).await.unwrap();
    assert_eq!(fetched, Some(tx));

    let request = server.await.unwrap();
    assert_eq!(request["jsonrpc"], "2.0");
    assert_eq!(request["method"], "get_transaction");
    assert_eq!(request["params"], serde_json::json!([format!("{:#x}", hash)]));
    assert_eq!(request["id"], 1);
}

#[tokio::test]
async fn get_transaction_unknown() {
    let (url, server) = serve_once(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "transaction": null,
            "tx_status": { "status": "unknown", "block_hash": null }
        }
    }))
    .await;
    let fetched = client(url).get_transaction(&H256([3; 32])).await.unwrap();
    assert!(fetched.is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn get_header_null() {
    let (url, server) = serve_once(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": null
    }))
    .await;
    let fetched = client(url).get_header(&H256([4; 32])).await.unwrap();
    assert!(fetched.is_none());
    assert_eq!(server.await.unwrap()["method"], "get_header");
}

#[tokio::test]
async fn failure_envelope_is_rpc_error() {
    let (url, server) = serve_once(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": -32601, "message": "Method not found" }
    }))
    .await;
    let error = client(url).get_header(&H256([5; 32])).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Rpc);
    server.await.unwrap();
}
