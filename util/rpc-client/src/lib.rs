//! Access to the chain data a transaction fixture is built from.
//!
//! [`ChainProvider`] is the seam the fixture builder depends on. [`HttpRpcClient`] talks to a
//! CKB node over JSON-RPC, [`MemoryChain`] serves records held in memory.
#[macro_use]
mod macros;
mod client;
mod error;
mod id_generator;
mod memory;
mod network;

#[cfg(test)]
mod tests;

pub use client::HttpRpcClient;
pub use error::RpcError;
pub use memory::MemoryChain;
pub use network::Network;

use async_trait::async_trait;
use ckb_replay_error::Error;
use ckb_replay_types::{
    core::{HeaderView, Transaction},
    H256,
};

/// A source of committed transactions and block headers.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Returns the transaction with the hash, or `None` if the chain does not know it.
    async fn get_transaction(&self, hash: &H256) -> Result<Option<Transaction>, Error>;

    /// Returns the block header with the hash, or `None` if the chain does not know it.
    async fn get_header(&self, hash: &H256) -> Result<Option<HeaderView>, Error>;
}

#[async_trait]
impl<P: ChainProvider + ?Sized> ChainProvider for &P {
    async fn get_transaction(&self, hash: &H256) -> Result<Option<Transaction>, Error> {
        (**self).get_transaction(hash).await
    }

    async fn get_header(&self, hash: &H256) -> Result<Option<HeaderView>, Error> {
        (**self).get_header(hash).await
    }
}

#[async_trait]
impl<P: ChainProvider + ?Sized> ChainProvider for Box<P> {
    async fn get_transaction(&self, hash: &H256) -> Result<Option<Transaction>, Error> {
        (**self).get_transaction(hash).await
    }

    async fn get_header(&self, hash: &H256) -> Result<Option<HeaderView>, Error> {
        (**self).get_header(hash).await
    }
}
