use ckb_replay_hash::blake2b_256;

use crate::{
    core::{CellOutput, Header, HeaderView, Script, Transaction},
    packed::Entity,
    H256,
};

impl Script {
    /// Calculates the script hash, the blake2b digest of its molecule encoding.
    ///
    /// ```
    /// use ckb_replay_types::core::Script;
    ///
    /// let script = Script::default();
    /// assert_eq!(script.calc_script_hash(), script.clone().calc_script_hash());
    /// ```
    pub fn calc_script_hash(&self) -> H256 {
        blake2b_256(self.as_vec()).into()
    }
}

impl CellOutput {
    /// Calculates the hash of a cell data blob. Empty data hashes to zero.
    pub fn calc_data_hash(data: &[u8]) -> H256 {
        if data.is_empty() {
            H256::zero()
        } else {
            blake2b_256(data).into()
        }
    }

    /// Calculates the hash of the lock script.
    pub fn calc_lock_hash(&self) -> H256 {
        self.lock.calc_script_hash()
    }

    /// Calculates the hash of the type script, if any.
    pub fn calc_type_hash(&self) -> Option<H256> {
        self.type_.as_ref().map(Script::calc_script_hash)
    }
}

impl Transaction {
    /// Calculates the transaction hash, which excludes the witnesses.
    pub fn calc_tx_hash(&self) -> H256 {
        blake2b_256(self.raw_as_vec()).into()
    }
}

impl Header {
    /// Calculates the header hash, which includes the nonce.
    pub fn calc_header_hash(&self) -> H256 {
        blake2b_256(self.as_vec()).into()
    }

    /// Packs the header with its calculated hash.
    pub fn into_view(self) -> HeaderView {
        let hash = self.calc_header_hash();
        HeaderView { inner: self, hash }
    }
}
