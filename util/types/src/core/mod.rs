//! The essential rust types for the chain records handled by ckb-replay.
//!
//! These are plain owned structs. The molecule encoding lives in [`packed`] and the JSON
//! encoding in the `ckb-replay-jsonrpc-types` crate.
//!
//! [`packed`]: ../packed/index.html

mod blockchain;

pub use blockchain::{
    CellDep, CellInput, CellOutput, DepType, Header, HeaderView, InvalidEnumValue, OutPoint,
    Script, ScriptHashType, Transaction,
};
