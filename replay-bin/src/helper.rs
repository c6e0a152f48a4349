use ckb_replay_app_config::{ExitCode, RpcArgs};
use ckb_replay_error::Error;
use ckb_replay_fixture::{MockTransaction, Progress, Stage, TxSource};
use ckb_replay_rpc_client::HttpRpcClient;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use tokio::runtime::{Builder, Runtime};

pub fn new_runtime() -> Result<Runtime, ExitCode> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

pub fn chain_provider(rpc: &RpcArgs) -> Result<HttpRpcClient, Error> {
    let url = rpc
        .network
        .url()
        .map_err(ckb_replay_rpc_client::RpcError::from)?;
    info!("using the node at {}", url);
    Ok(HttpRpcClient::new(url, rpc.timeout)?)
}

/// Shows the fixture building progress on stderr.
pub struct FetchProgress {
    bar: ProgressBar,
}

impl FetchProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .progress_chars("#>-"),
        );
        FetchProgress { bar }
    }

    pub fn update(&self, progress: Progress) {
        debug!("{}", progress);
        if progress.stage == Stage::Done {
            self.bar.finish_and_clear();
            return;
        }
        self.bar.set_length(progress.total as u64);
        self.bar.set_position(progress.current as u64);
        self.bar.set_message(progress.message);
    }
}

/// Builds the mock transaction of `source`, fetching from the node in `rpc`.
pub fn load_mock_transaction(
    runtime: &Runtime,
    rpc: &RpcArgs,
    source: TxSource,
) -> Result<MockTransaction, Error> {
    let provider = chain_provider(rpc)?;
    let progress = FetchProgress::new();
    runtime.block_on(source.into_mock_transaction(&provider, &mut |p: Progress| progress.update(p)))
}
