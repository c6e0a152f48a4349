//! ckb-replay executable.
//!
//! This crate is created to keep the root package a thin `main`.
mod helper;
mod subcommand;

#[cfg(test)]
mod tests;

use ckb_replay_app_config::{cli, ExitCode, Setup};
use log::debug;

/// The executable main entry.
///
/// It returns `Ok` when the process exits normally, otherwise the `ExitCode` is converted to the
/// process exit status code.
pub fn run_app(version: &str) -> Result<(), ExitCode> {
    let matches = cli::get_matches(version);
    let (cmd, sub_matches) = matches.subcommand().ok_or(ExitCode::Cli)?;

    let setup = Setup::from_matches(&matches)?;
    let _logger_guard = ckb_replay_logger_service::init(setup.logger()).map_err(|err| {
        eprintln!("Logger Error: {err}");
        ExitCode::Failure
    })?;
    debug!("ckb-replay version: {}", version);

    match cmd {
        cli::CMD_CONVERT => subcommand::convert(setup.convert(sub_matches)?),
        cli::CMD_RUN => subcommand::run(setup.run(sub_matches)?),
        cli::CMD_SCRIPT_HASH => subcommand::script_hash(setup.script_hash(sub_matches)?),
        _ => Err(ExitCode::Cli),
    }
}
