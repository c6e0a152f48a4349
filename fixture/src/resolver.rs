use crate::error::FixtureError;
use ckb_replay_error::Error;
use ckb_replay_rpc_client::ChainProvider;
use ckb_replay_types::{
    bytes::Bytes,
    core::{CellOutput, OutPoint},
};

/// A live or dead cell as it was created.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ResolvedCell {
    pub output: CellOutput,
    pub data: Bytes,
}

/// Looks up cells by the transaction which created them.
pub struct OutPointResolver<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: ChainProvider + ?Sized> OutPointResolver<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        OutPointResolver { provider }
    }

    pub fn provider(&self) -> &'a P {
        self.provider
    }

    /// Fetches the creating transaction and picks the output at `out_point.index`.
    ///
    /// The cell data defaults to empty when the transaction has fewer `outputs_data` than
    /// outputs.
    pub async fn resolve(&self, out_point: &OutPoint) -> Result<ResolvedCell, Error> {
        let tx = self
            .provider
            .get_transaction(&out_point.tx_hash)
            .await?
            .ok_or(FixtureError::TransactionNotFound(out_point.tx_hash))?;
        let index = out_point.index as usize;
        let output = tx.outputs.get(index).cloned().ok_or_else(|| {
            FixtureError::OutputIndexOutOfBounds {
                out_point: *out_point,
                outputs: tx.outputs.len(),
            }
        })?;
        let data = tx.outputs_data.get(index).cloned().unwrap_or_default();
        Ok(ResolvedCell { output, data })
    }
}
