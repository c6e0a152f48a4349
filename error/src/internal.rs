use crate::{
    def_error_base_on_kind,
    prelude::{fmt, Error},
};
use derive_more::Display;

/// An error with no reason.
#[derive(Error, Debug, Clone, Copy)]
#[error("no reason is provided")]
pub struct SilentError;

/// An error with only a string as the reason.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct OtherError(String);

/// A list specifying categories of internal error.
///
/// This list is intended to grow over time and it is not recommended to exhaustively match against
/// it.
///
/// It is used with [`InternalError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum InternalErrorKind {
    /// An operating system call failed, e.g. reading a file or spawning a process.
    System,

    /// A value could not be serialized, e.g. a fixture rendered as JSON.
    Encoding,

    /// Unknown or unclassified internal failure.
    Other,
}

def_error_base_on_kind!(InternalError, InternalErrorKind, "Internal error.");

impl From<InternalError> for crate::Error {
    fn from(error: InternalError) -> Self {
        crate::ErrorKind::Internal.because(error)
    }
}

impl From<InternalErrorKind> for crate::Error {
    fn from(kind: InternalErrorKind) -> Self {
        Into::<InternalError>::into(kind).into()
    }
}

impl OtherError {
    /// Creates an error with only a string as the reason.
    pub fn new<T>(reason: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self(reason.to_string())
    }
}
