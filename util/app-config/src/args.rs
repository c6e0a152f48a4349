use ckb_replay_fixture::TxSource;
use ckb_replay_rpc_client::Network;
use ckb_replay_script::{CellSelector, Replacement};
use ckb_replay_types::core::Script;
use std::{path::PathBuf, time::Duration};

/// Where to fetch from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcArgs {
    pub network: Network,
    pub timeout: Duration,
}

/// Parsed command line arguments for `ckb-replay convert`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertArgs {
    pub rpc: RpcArgs,
    pub source: TxSource,
    /// Stdout when `None`.
    pub output: Option<PathBuf>,
}

/// Parsed command line arguments for `ckb-replay run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub rpc: RpcArgs,
    pub source: TxSource,
    pub max_cycles: u64,
    pub debugger: PathBuf,
    /// Runs only this script when set, every script group otherwise.
    pub selector: Option<CellSelector>,
    pub replacement: Option<Replacement>,
}

/// Parsed command line arguments for `ckb-replay script-hash`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptHashArgs {
    pub script: Script,
}
