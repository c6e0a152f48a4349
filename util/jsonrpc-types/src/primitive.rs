use crate::{Uint32, Uint64};

/// Consecutive block number starting from 0.
pub type BlockNumber = Uint64;
/// The epoch indicator of a block, a packed epoch number with fraction.
pub type EpochNumberWithFraction = Uint64;
/// The capacity of a cell, in Shannons.
pub type Capacity = Uint64;
/// The Unix timestamp in milliseconds.
pub type Timestamp = Uint64;
/// The simple increasing integer version.
pub type Version = Uint32;
