use crate::ChainProvider;
use async_trait::async_trait;
use ckb_replay_error::Error;
use ckb_replay_types::{
    core::{HeaderView, Transaction},
    H256,
};
use std::collections::HashMap;

/// A [`ChainProvider`] serving the records inserted into it.
///
/// Records are keyed by their computed hash unless inserted with an explicit one.
#[derive(Default, Clone, Debug)]
pub struct MemoryChain {
    transactions: HashMap<H256, Transaction>,
    headers: HashMap<H256, HeaderView>,
}

impl MemoryChain {
    pub fn new() -> Self {
        MemoryChain::default()
    }

    /// Inserts the transaction under its hash and returns the hash.
    pub fn insert_transaction(&mut self, tx: Transaction) -> H256 {
        let hash = tx.calc_tx_hash();
        self.transactions.insert(hash, tx);
        hash
    }

    /// Inserts the transaction under an arbitrary hash.
    pub fn insert_transaction_with_hash(&mut self, hash: H256, tx: Transaction) {
        self.transactions.insert(hash, tx);
    }

    /// Inserts the header under its recorded hash.
    pub fn insert_header(&mut self, header: HeaderView) {
        self.headers.insert(header.hash, header);
    }
}

#[async_trait]
impl ChainProvider for MemoryChain {
    async fn get_transaction(&self, hash: &H256) -> Result<Option<Transaction>, Error> {
        Ok(self.transactions.get(hash).cloned())
    }

    async fn get_header(&self, hash: &H256) -> Result<Option<HeaderView>, Error> {
        Ok(self.headers.get(hash).cloned())
    }
}
