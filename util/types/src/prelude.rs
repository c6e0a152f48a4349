//! This module includes several traits.
//!
//! Few traits are re-exported from other crates, few are used as aliases and others are syntactic
//! sugar.

pub use crate::packed::Entity;
