//! ckb-replay command line arguments and config options.
//!
//! [`Setup`] loads the config file named on the command line and turns the matches of each
//! subcommand into its `*Args`. Command line options win over the config file.
mod app_config;
mod args;
pub mod cli;
mod exit_code;


pub use app_config::{AppConfig, ConfigError, RpcConfig, RunnerConfig};
pub use args::{ConvertArgs, RpcArgs, RunArgs, ScriptHashArgs};
pub use exit_code::ExitCode;

use ckb_replay_fixture::TxSource;
use ckb_replay_logger_service::Config as LogConfig;
use ckb_replay_rpc_client::Network;
use ckb_replay_script::{CellSelector, MatchMode, ReplaceTarget, Replacement};
use ckb_replay_types::{bytes::Bytes, core::Script, H256};
use clap::ArgMatches;
use std::{fs, path::PathBuf};

/// The loaded config and the name of the requested subcommand.
pub struct Setup {
    pub subcommand_name: String,
    pub config: AppConfig,
}

impl Setup {
    /// Loads the config file given by `--config`, if any.
    pub fn from_matches(matches: &ArgMatches) -> Result<Setup, ExitCode> {
        let subcommand_name = match matches.subcommand_name() {
            Some(subcommand_name) => subcommand_name,
            None => {
                eprintln!("expect a subcommand");
                return Err(ExitCode::Cli);
            }
        };
        let config_path = matches.get_one::<String>(cli::ARG_CONFIG).map(PathBuf::from);
        let config = AppConfig::load(config_path.as_deref())?;

        Ok(Setup {
            subcommand_name: subcommand_name.to_string(),
            config,
        })
    }

    pub fn logger(&self) -> &LogConfig {
        &self.config.logger
    }

    /// `ckb-replay convert`
    pub fn convert(self, matches: &ArgMatches) -> Result<ConvertArgs, ExitCode> {
        let rpc = self.rpc_args(matches)?;
        let source = tx_source(matches)?;
        let output = matches.get_one::<String>(cli::ARG_OUTPUT).map(PathBuf::from);

        Ok(ConvertArgs {
            rpc,
            source,
            output,
        })
    }

    /// `ckb-replay run`
    pub fn run(self, matches: &ArgMatches) -> Result<RunArgs, ExitCode> {
        let rpc = self.rpc_args(matches)?;
        let source = tx_source(matches)?;
        let runner = self.config.runner;
        let max_cycles = matches
            .get_one::<u64>(cli::ARG_MAX_CYCLES)
            .copied()
            .unwrap_or(runner.max_cycles);
        let debugger = matches
            .get_one::<String>(cli::ARG_DEBUGGER)
            .map(PathBuf::from)
            .unwrap_or(runner.debugger);

        let selector = match matches.get_one::<usize>(cli::ARG_CELL_INDEX) {
            Some(cell_index) => Some(CellSelector {
                cell_index: *cell_index,
                cell_type: parse_arg(matches, cli::ARG_CELL_TYPE)?,
                group_type: parse_arg(matches, cli::ARG_SCRIPT_GROUP_TYPE)?,
            }),
            None => None,
        };

        let replacement = match matches.get_one::<String>(cli::ARG_REPLACE_BINARY) {
            Some(path) => {
                let binary = Bytes::from(fs::read(path)?);
                let mode = match matches.get_one::<String>(cli::ARG_MATCH_MODE) {
                    Some(_) => parse_arg::<MatchMode>(matches, cli::ARG_MATCH_MODE)?,
                    None => runner.match_mode,
                };
                let target = match matches.get_one::<String>(cli::ARG_REPLACE_CODE_HASH) {
                    Some(code_hash) => Some(ReplaceTarget {
                        code_hash: parse_hash(code_hash)?,
                        hash_type: parse_arg(matches, cli::ARG_REPLACE_HASH_TYPE)?,
                    }),
                    None => None,
                };
                Some(Replacement {
                    binary,
                    mode,
                    target,
                })
            }
            None => None,
        };

        Ok(RunArgs {
            rpc,
            source,
            max_cycles,
            debugger,
            selector,
            replacement,
        })
    }

    /// `ckb-replay script-hash`
    pub fn script_hash(self, matches: &ArgMatches) -> Result<ScriptHashArgs, ExitCode> {
        let code_hash = parse_hash(required_arg(matches, cli::ARG_CODE_HASH)?)?;
        let hash_type = parse_arg(matches, cli::ARG_HASH_TYPE)?;
        let args = match matches.get_one::<String>(cli::ARG_ARGS) {
            Some(hex) => parse_hex(hex)?,
            None => Bytes::new(),
        };
        Ok(ScriptHashArgs {
            script: Script::new(code_hash, hash_type, args),
        })
    }

    fn rpc_args(&self, matches: &ArgMatches) -> Result<RpcArgs, ExitCode> {
        let network = if let Some(url) = matches.get_one::<String>(cli::ARG_RPC) {
            url.parse::<Network>().map_err(|err| {
                eprintln!("Args Error: invalid --{} {url}: {err}", cli::ARG_RPC);
                ExitCode::Cli
            })?
        } else if let Some(network) = matches.get_one::<String>(cli::ARG_NETWORK) {
            network.parse::<Network>().map_err(|_| ExitCode::Cli)?
        } else {
            self.config.rpc.network()?
        };
        Ok(RpcArgs {
            network,
            timeout: self.config.rpc.timeout(),
        })
    }
}

fn required_arg<'m>(matches: &'m ArgMatches, name: &str) -> Result<&'m str, ExitCode> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| {
            eprintln!("Args Error: --{name} is required");
            ExitCode::Cli
        })
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<T, ExitCode>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = required_arg(matches, name)?;
    value.parse().map_err(|err| {
        eprintln!("Args Error: invalid --{name} {value}: {err}");
        ExitCode::Cli
    })
}

fn parse_hash(input: &str) -> Result<H256, ExitCode> {
    H256::from_hex_str(input.trim()).map_err(|err| {
        eprintln!("Args Error: invalid hash {input}: {err}");
        ExitCode::Cli
    })
}

fn parse_hex(input: &str) -> Result<Bytes, ExitCode> {
    let hex = input.strip_prefix("0x").unwrap_or(input);
    let mut buffer = vec![0; hex.len() / 2];
    if hex.len() % 2 != 0 || faster_hex::hex_decode(hex.as_bytes(), &mut buffer).is_err() {
        eprintln!("Args Error: invalid hex {input}");
        return Err(ExitCode::Cli);
    }
    Ok(Bytes::from(buffer))
}

fn tx_source(matches: &ArgMatches) -> Result<TxSource, ExitCode> {
    let read = |name: &str| -> Result<Option<String>, ExitCode> {
        match matches.try_get_one::<String>(name) {
            Ok(Some(path)) => Ok(Some(fs::read_to_string(path)?)),
            _ => Ok(None),
        }
    };
    if let Some(hash) = matches.get_one::<String>(cli::ARG_TX_HASH) {
        return TxSource::from_hash_str(hash).map_err(|err| {
            eprintln!("Args Error: {err}");
            ExitCode::Cli
        });
    }
    if let Some(content) = read(cli::ARG_TX_FILE)? {
        return Ok(TxSource::Fixture(content));
    }
    if let Some(content) = read(cli::ARG_RAW_TX)? {
        return Ok(TxSource::RawJson(content));
    }
    if let Some(content) = read(cli::ARG_PACKED_TX)? {
        return Ok(TxSource::Packed(content));
    }
    eprintln!("Args Error: expect a transaction source");
    Err(ExitCode::Cli)
}
