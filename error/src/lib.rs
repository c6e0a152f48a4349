//! Underlying error types used over ckb-replay crates.

use std::{error::Error as StdError, fmt, ops::Deref, sync::Arc};

mod internal;
pub mod prelude;
pub mod util;

use derive_more::Display;
pub use internal::{InternalError, InternalErrorKind, OtherError, SilentError};
use prelude::*;

/// A wrapper around a dynamic error type.
#[derive(Debug, Clone)]
pub struct AnyError(Arc<anyhow::Error>);

/// A list specifying categories of ckb-replay error.
///
/// This list is intended to grow over time and it is not recommended to exhaustively match against
/// it.
///
/// It is used with [`Error`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum ErrorKind {
    /// Malformed input text, e.g. JSON, hex or a molecule record.
    Parse,
    /// A referenced transaction, cell or header does not exist, or an index is out of bounds.
    NotFound,
    /// A decoded record's declared size disagrees with its actual length.
    Format,
    /// No cell dependency matched the requested binary replacement.
    Replacement,
    /// The script execution engine failed or is unreachable.
    Engine,
    /// The JSON-RPC transport or the remote node failed.
    Rpc,
    /// Invalid configuration or command line.
    Config,
    /// It indicates that the underlying error is [`InternalError`]
    Internal,
}

def_error_base_on_kind!(Error, ErrorKind, "Top-level ckb-replay error type.");

impl<E> From<E> for AnyError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(Arc::new(error.into()))
    }
}

impl Deref for AnyError {
    type Target = Arc<anyhow::Error>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        InternalErrorKind::System.because(error).into()
    }
}
