use crate::{ChainProvider, Network, RpcError};
use async_trait::async_trait;
use ckb_replay_error::Error;
use ckb_replay_jsonrpc_types::{HeaderView, TransactionWithStatus};
use ckb_replay_types::{core, H256};
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

jsonrpc!(
    /// The remote calls of a CKB node used by ckb-replay.
    pub struct Inner {
        pub fn get_transaction(&self, hash: &H256) -> Option<TransactionWithStatus>;
        pub fn get_header(&self, hash: &H256) -> Option<HeaderView>;
    }
);

/// A [`ChainProvider`] backed by the JSON-RPC interface of a CKB node.
pub struct HttpRpcClient {
    inner: Inner,
}

impl HttpRpcClient {
    /// Creates a client for the node at `url`, with `timeout` for every request.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpRpcClient {
            inner: Inner::new(client, url),
        })
    }

    /// Creates a client for the network with the default request timeout.
    pub fn with_network(network: &Network) -> Result<Self, RpcError> {
        Self::new(network.url()?, DEFAULT_TIMEOUT)
    }

    /// The node url.
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    /// The underlying remote calls.
    pub fn inner(&self) -> &Inner {
        &self.inner
    }
}

#[async_trait]
impl ChainProvider for HttpRpcClient {
    async fn get_transaction(&self, hash: &H256) -> Result<Option<core::Transaction>, Error> {
        let with_status = self.inner.get_transaction(hash).await?;
        let view = match with_status.and_then(|with_status| with_status.transaction) {
            Some(view) => view,
            None => return Ok(None),
        };
        let tx: core::Transaction = view.inner.into();
        let actual = tx.calc_tx_hash();
        if &actual != hash {
            log::warn!(
                "transaction fetched for {} hashes to {}, keeping the node's record",
                hash,
                actual
            );
        }
        Ok(Some(tx))
    }

    async fn get_header(&self, hash: &H256) -> Result<Option<core::HeaderView>, Error> {
        let view = match self.inner.get_header(hash).await? {
            Some(view) => view,
            None => return Ok(None),
        };
        let header: core::Header = view.inner.into();
        let actual = header.calc_header_hash();
        if &actual != hash {
            log::warn!(
                "header fetched for {} hashes to {}, keeping the node's record",
                hash,
                actual
            );
        }
        Ok(Some(core::HeaderView {
            inner: header,
            hash: *hash,
        }))
    }
}
