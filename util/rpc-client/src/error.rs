use ckb_replay_error::{Error, ErrorKind};
use thiserror::Error;

/// Failures talking to a CKB node.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The node url is not valid.
    #[error("invalid rpc url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or the response could not be read.
    #[error("rpc transport: {0}")]
    Transport(#[from] reqwest::Error),
    /// The node answered with a JSON-RPC failure.
    #[error("rpc failure: {0}")]
    Failure(jsonrpc_core::Error),
    /// The node answered with a result of the wrong shape.
    #[error("rpc decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<RpcError> for Error {
    fn from(error: RpcError) -> Self {
        ErrorKind::Rpc.because(error)
    }
}
