//! # The Core Types Library
//!
//! This Library provides the chain types ckb-replay works with, their molecule encoding and the
//! hashes derived from it.

pub mod prelude;

pub use bytes;
pub use bytes::Bytes;
pub use fixed_hash::{FromSliceError, FromStrError, H256};
pub use molecule::error;

pub mod core;
mod extension;
mod fixed_hash;
pub mod packed;

#[cfg(test)]
mod tests;
