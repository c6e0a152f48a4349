//! Wrappers for JSON serialization.
mod blockchain;
mod bytes;
mod mock_tx;
mod primitive;
mod uints;

#[cfg(test)]
mod tests;

pub use self::blockchain::{
    CellDep, CellInput, CellOutput, DepType, Header, HeaderView, OutPoint, Script,
    ScriptHashType, Status, Transaction, TransactionView, TransactionWithStatus, TxStatus,
};
pub use self::bytes::JsonBytes;
pub use self::mock_tx::{ReprMockCellDep, ReprMockInfo, ReprMockInput, ReprMockTransaction};
pub use self::primitive::{BlockNumber, Capacity, EpochNumberWithFraction, Timestamp, Version};
pub use self::uints::{Uint128, Uint32, Uint64};
pub use ckb_replay_types::H256;
pub use serde::{Deserialize, Serialize};
