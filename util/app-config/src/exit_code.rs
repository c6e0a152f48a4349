use ckb_replay_error::{Error, ErrorKind};
use std::io;

/// Exit codes of the `ckb-replay` executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Invalid command line arguments.
    Cli = 64,
    /// The config file is missing or malformed.
    Config = 65,
    /// An input or output file cannot be read or written.
    IO = 66,
    /// The command failed.
    Failure = 113,
}

impl ExitCode {
    /// The process exit code.
    pub fn into(self) -> i32 {
        self as i32
    }
}

impl From<io::Error> for ExitCode {
    fn from(err: io::Error) -> ExitCode {
        eprintln!("IO Error: {err}");
        ExitCode::IO
    }
}

impl From<clap::Error> for ExitCode {
    fn from(err: clap::Error) -> ExitCode {
        eprintln!("Args Error: {err}");
        ExitCode::Cli
    }
}

impl From<Error> for ExitCode {
    fn from(err: Error) -> ExitCode {
        eprintln!("Error: {err:#}");
        match err.kind() {
            ErrorKind::Config => ExitCode::Config,
            ErrorKind::Internal => ExitCode::IO,
            _ => ExitCode::Failure,
        }
    }
}
