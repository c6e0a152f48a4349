//! # ckb-replay AppConfig
//!
//! Every section and every field is optional. An absent config file is the same as an empty one.
//!
//! ```toml
//! [rpc]
//! network = "testnet"
//! # url = "http://127.0.0.1:8114"
//! timeout_secs = 30
//!
//! [runner]
//! max_cycles = 3500000000
//! debugger = "ckb-debugger"
//! match_mode = "data-hash"
//!
//! [logger]
//! filter = "info"
//! color = true
//! ```

use crate::ExitCode;
use ckb_replay_error::{Error, ErrorKind};
use ckb_replay_logger_service::Config as LogConfig;
use ckb_replay_rpc_client::Network;
use ckb_replay_script::{MatchMode, DEFAULT_MAX_CYCLES};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

/// The config file cannot be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown network {0}, expect mainnet or testnet")]
    UnknownNetwork(String),
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        ErrorKind::Config.because(error)
    }
}

/// The whole config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub rpc: RpcConfig,
    pub runner: RunnerConfig,
    pub logger: LogConfig,
}

/// Where transactions and headers are fetched from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpcConfig {
    /// `mainnet` or `testnet`.
    pub network: String,
    /// A node endpoint, overriding `network`.
    pub url: Option<Url>,
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        RpcConfig {
            network: "mainnet".to_owned(),
            url: None,
            timeout_secs: 30,
        }
    }
}

impl RpcConfig {
    /// The configured endpoint.
    pub fn network(&self) -> Result<Network, Error> {
        if let Some(url) = &self.url {
            return Ok(Network::Custom(url.clone()));
        }
        match self.network.as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(ConfigError::UnknownNetwork(other.to_owned()).into()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How script groups are run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub max_cycles: u64,
    /// The `ckb-debugger` executable.
    pub debugger: PathBuf,
    pub match_mode: MatchMode,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            max_cycles: DEFAULT_MAX_CYCLES,
            debugger: PathBuf::from("ckb-debugger"),
            match_mode: MatchMode::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config file, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ExitCode> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| {
                    Error::from(ConfigError::Read {
                        path: path.to_owned(),
                        source,
                    })
                })?;
                Ok(AppConfig::parse(&content)?)
            }
            None => Ok(AppConfig::default()),
        }
    }

    pub fn parse(content: &str) -> Result<AppConfig, Error> {
        toml::from_str(content).map_err(|err| ConfigError::from(err).into())
    }
}
