//! Runs the scripts of a mock transaction.
//!
//! The scripts are grouped the way CKB verifies them: one group per distinct lock script of the
//! inputs and one per distinct type script of the inputs and outputs. Each group is then executed
//! by a [`ScriptEngine`], and the outcomes are folded into a [`RunReport`].
mod debugger;
mod engine;
mod error;
mod groups;
mod orchestrator;
mod replace;
mod types;

#[cfg(test)]
mod tests;

pub use debugger::DebuggerEngine;
pub use engine::{EngineHandle, EngineOutput, EngineResult, ScriptEngine};
pub use error::{EngineError, ReplaceError, RunError};
pub use groups::extract_script_groups;
pub use orchestrator::{
    select_script, GroupOutcome, HumanReadableCycles, Orchestrator, RunReport, SingleRunReport,
    DEFAULT_MAX_CYCLES,
};
pub use replace::{replace_binary, MatchMode, ReplaceTarget, Replacement};
pub use types::{CellSelector, CellType, ScriptGroup, ScriptGroupType};
