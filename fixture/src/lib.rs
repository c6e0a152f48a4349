//! Turns a transaction into a self-contained mock transaction.
//!
//! Every cell the transaction spends or depends on is fetched through a
//! [`ChainProvider`](ckb_replay_rpc_client::ChainProvider) and stored next to the transaction, so
//! the scripts can later be executed without access to the chain.
mod builder;
mod dep_group;
mod error;
mod mock_tx;
mod progress;
mod resolver;
mod source;

#[cfg(test)]
mod tests;

pub use builder::FixtureBuilder;
pub use dep_group::expand_dep_group;
pub use error::{format_error, FixtureError, ParseError};
pub use mock_tx::{MockCellDep, MockInfo, MockInput, MockTransaction};
pub use progress::{Progress, ProgressReporter, Stage};
pub use resolver::{OutPointResolver, ResolvedCell};
pub use source::{parse_fixture, parse_packed_tx, parse_raw_tx, TxSource};
