use crate::{
    dep_group::expand_dep_group,
    error::FixtureError,
    mock_tx::{MockCellDep, MockInfo, MockInput, MockTransaction},
    progress::{Progress, ProgressReporter, Stage},
    resolver::OutPointResolver,
};
use ckb_replay_error::Error;
use ckb_replay_rpc_client::ChainProvider;
use ckb_replay_types::{
    core::{HeaderView, Transaction},
    H256,
};
use log::{debug, info};

/// Resolves everything a transaction reads from the chain into a [`MockTransaction`].
///
/// Records are fetched one at a time in the order the transaction declares them. The first
/// failure aborts the build.
pub struct FixtureBuilder<'a, P: ?Sized> {
    resolver: OutPointResolver<'a, P>,
}

impl<'a, P: ChainProvider + ?Sized> FixtureBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        FixtureBuilder {
            resolver: OutPointResolver::new(provider),
        }
    }

    /// Fetches the transaction by hash, then builds its mock transaction.
    pub async fn build_from_hash<R: ProgressReporter>(
        &self,
        tx_hash: &H256,
        reporter: &mut R,
    ) -> Result<MockTransaction, Error> {
        reporter.report(Progress::new(Stage::FetchingTx, 0, 1));
        let tx = self
            .resolver
            .provider()
            .get_transaction(tx_hash)
            .await?
            .ok_or(FixtureError::TransactionNotFound(*tx_hash))?;
        reporter.report(Progress::new(Stage::FetchingTx, 1, 1));
        self.build(tx, reporter).await
    }

    /// Builds the mock transaction of `tx`.
    pub async fn build<R: ProgressReporter>(
        &self,
        tx: Transaction,
        reporter: &mut R,
    ) -> Result<MockTransaction, Error> {
        info!(
            "building mock transaction with {} inputs, {} cell deps and {} header deps",
            tx.inputs.len(),
            tx.cell_deps.len(),
            tx.header_deps.len()
        );

        let inputs = self.resolve_inputs(&tx, reporter).await?;
        let cell_deps = self.resolve_cell_deps(&tx, reporter).await?;
        let header_deps = self.resolve_header_deps(&tx, reporter).await?;
        reporter.report(Progress::new(Stage::Done, 1, 1));

        Ok(MockTransaction {
            mock_info: MockInfo {
                inputs,
                cell_deps,
                header_deps,
            },
            tx,
        })
    }

    async fn resolve_inputs<R: ProgressReporter>(
        &self,
        tx: &Transaction,
        reporter: &mut R,
    ) -> Result<Vec<MockInput>, Error> {
        let total = tx.inputs.len();
        reporter.report(Progress::new(Stage::FetchingInputs, 0, total));
        let mut inputs = Vec::with_capacity(total);
        for (i, input) in tx.inputs.iter().enumerate() {
            let cell = self.resolver.resolve(&input.previous_output).await?;
            inputs.push(MockInput {
                input: *input,
                output: cell.output,
                data: cell.data,
                header: None,
            });
            reporter.report(Progress::new(Stage::FetchingInputs, i + 1, total));
        }
        Ok(inputs)
    }

    async fn resolve_cell_deps<R: ProgressReporter>(
        &self,
        tx: &Transaction,
        reporter: &mut R,
    ) -> Result<Vec<MockCellDep>, Error> {
        let total = tx.cell_deps.len();
        reporter.report(Progress::new(Stage::FetchingCellDeps, 0, total));
        let mut cell_deps = Vec::with_capacity(total);
        for (i, cell_dep) in tx.cell_deps.iter().enumerate() {
            let cell = self.resolver.resolve(&cell_dep.out_point).await?;
            let entry = MockCellDep {
                cell_dep: *cell_dep,
                output: cell.output,
                data: cell.data,
                header: None,
            };
            let members = if entry.is_dep_group() {
                expand_dep_group(&self.resolver, &entry).await?
            } else {
                Vec::new()
            };
            cell_deps.push(entry);
            cell_deps.extend(members);
            reporter.report(Progress::new(Stage::FetchingCellDeps, i + 1, total));
        }
        Ok(cell_deps)
    }

    async fn resolve_header_deps<R: ProgressReporter>(
        &self,
        tx: &Transaction,
        reporter: &mut R,
    ) -> Result<Vec<HeaderView>, Error> {
        let total = tx.header_deps.len();
        if total == 0 {
            return Ok(Vec::new());
        }
        reporter.report(Progress::new(Stage::FetchingHeaders, 0, total));
        let mut headers = Vec::with_capacity(total);
        for (i, hash) in tx.header_deps.iter().enumerate() {
            let header = self
                .resolver
                .provider()
                .get_header(hash)
                .await?
                .ok_or(FixtureError::HeaderNotFound(*hash))?;
            debug!("header dep {} is block {}", hash, header.inner.number);
            headers.push(header);
            reporter.report(Progress::new(Stage::FetchingHeaders, i + 1, total));
        }
        Ok(headers)
    }
}
