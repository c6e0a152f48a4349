use crate::{
    engine::{EngineHandle, EngineOutput, EngineResult, ScriptEngine},
    error::RunError,
    groups::extract_script_groups,
    replace::{replace_binary, ReplaceTarget, Replacement},
    types::{CellSelector, CellType, ScriptGroup, ScriptGroupType},
};
use ckb_replay_error::Error;
use ckb_replay_fixture::MockTransaction;
use ckb_replay_types::{core::Script, H256};
use log::{debug, info, warn};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// The cycle limit of a single script group, the same as the CKB consensus.
pub const DEFAULT_MAX_CYCLES: u64 = 3_500_000_000;

/// Cycles with a short binary-unit suffix, e.g. `1234567(1.2M)`.
pub struct HumanReadableCycles(pub u64);

impl fmt::Display for HumanReadableCycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if self.0 >= 1024 * 1024 {
            write!(f, "({:.1}M)", self.0 as f64 / 1024. / 1024.)?;
        } else if self.0 >= 1024 {
            write!(f, "({:.1}K)", self.0 as f64 / 1024.)?;
        }
        Ok(())
    }
}

/// The outcome of one script group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupOutcome {
    pub group: ScriptGroup,
    pub output: EngineOutput,
}

impl GroupOutcome {
    pub fn is_success(&self) -> bool {
        self.output.is_success()
    }

    /// Consumed cycles, 0 for a failed group.
    pub fn cycles(&self) -> u64 {
        self.output.cycles()
    }
}

/// The aggregated outcome of every script group of a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// In extraction order.
    pub groups: Vec<GroupOutcome>,
    /// Sum of the cycles of the successful groups.
    pub total_cycles: u64,
    pub all_success: bool,
    /// Set when a binary replacement was requested: whether a cell dep matched.
    pub replaced: Option<bool>,
    pub duration: Duration,
}

impl RunReport {
    fn new(groups: Vec<GroupOutcome>, replaced: Option<bool>, duration: Duration) -> Self {
        let total_cycles = groups
            .iter()
            .filter(|outcome| outcome.is_success())
            .fold(0u64, |sum, outcome| sum.saturating_add(outcome.cycles()));
        let all_success = groups.iter().all(GroupOutcome::is_success);
        RunReport {
            groups,
            total_cycles,
            all_success,
            replaced,
            duration,
        }
    }
}

fn write_indices(f: &mut fmt::Formatter, indices: &[usize]) -> fmt::Result {
    let list: Vec<String> = indices.iter().map(usize::to_string).collect();
    write!(f, "[{}]", list.join(", "))
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.all_success {
            writeln!(f, "✓ Transaction verified")?;
        } else {
            writeln!(f, "✗ Transaction verification failed")?;
        }
        match self.replaced {
            Some(true) => writeln!(f, "[binary replaced]")?,
            Some(false) => writeln!(f, "[warning: no cell dep matched, binary not replaced]")?,
            None => {}
        }
        writeln!(f)?;
        writeln!(f, "Total cycles: {}", HumanReadableCycles(self.total_cycles))?;
        for group_type in [ScriptGroupType::Lock, ScriptGroupType::Type] {
            for outcome in self
                .groups
                .iter()
                .filter(|outcome| outcome.group.group_type == group_type)
            {
                let group = &outcome.group;
                write!(f, "{} with inputs: ", group.group_type)?;
                write_indices(f, &group.input_indices)?;
                write!(f, ", outputs: ")?;
                write_indices(f, &group.output_indices)?;
                writeln!(f)?;
                writeln!(f, "  Script hash: {:x}", group.script_hash)?;
                match (&outcome.output, outcome.output.error()) {
                    (_, Some(error)) => writeln!(f, "  Error: {}", error)?,
                    (EngineOutput::Passthrough(text), None) => {
                        writeln!(f, "  Output: {}", text.trim())?
                    }
                    (EngineOutput::Json(_), None) => {
                        writeln!(f, "  Cycles: {}", HumanReadableCycles(outcome.cycles()))?
                    }
                }
            }
        }
        writeln!(f)?;
        write!(f, "Duration: {:.2}s", self.duration.as_secs_f64())
    }
}

/// The outcome of running the script of one selected cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleRunReport {
    pub selector: CellSelector,
    pub script: Script,
    pub script_hash: H256,
    pub replaced: Option<bool>,
    pub output: EngineOutput,
    pub duration: Duration,
}

impl SingleRunReport {
    /// The `ckb-debugger` command line running the same group.
    pub fn command(&self) -> String {
        self.selector.debugger_command()
    }

    pub fn is_success(&self) -> bool {
        self.output.is_success()
    }
}

impl fmt::Display for SingleRunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "$ {}", self.command())?;
        match self.replaced {
            Some(true) => writeln!(f, "[binary replaced]")?,
            Some(false) => writeln!(f, "[warning: no cell dep matched, binary not replaced]")?,
            None => {}
        }
        writeln!(f)?;
        match &self.output {
            EngineOutput::Passthrough(text) => write!(f, "{}", text.trim_end()),
            EngineOutput::Json(result) => match &result.error {
                None => {
                    writeln!(f, "✓ Run succeeded")?;
                    writeln!(f)?;
                    writeln!(f, "Cycles: {}", HumanReadableCycles(self.output.cycles()))?;
                    write!(f, "Duration: {:.2}s", self.duration.as_secs_f64())
                }
                Some(error) => {
                    writeln!(f, "✗ Run failed")?;
                    writeln!(f)?;
                    writeln!(f, "Error: {}", error)?;
                    writeln!(f)?;
                    writeln!(f, "Script hash: {:#x}", self.script_hash)?;
                    writeln!(f, "code_hash: {:#x}", self.script.code_hash)?;
                    writeln!(f, "hash_type: {}", self.script.hash_type)?;
                    write!(f, "args: 0x{}", faster_hex::hex_string(&self.script.args))
                }
            },
        }
    }
}

/// Runs the script groups of mock transactions with one engine.
pub struct Orchestrator<'a, E> {
    engine: &'a EngineHandle<E>,
    max_cycles: u64,
}

impl<'a, E: ScriptEngine> Orchestrator<'a, E> {
    pub fn new(engine: &'a EngineHandle<E>, max_cycles: u64) -> Self {
        Orchestrator { engine, max_cycles }
    }

    /// Runs every script group, one after another.
    ///
    /// A failing group does not stop the others. A replacement without a target replaces the
    /// code of the first script group.
    pub async fn run_all(
        &self,
        mut mock: MockTransaction,
        replacement: Option<Replacement>,
    ) -> Result<RunReport, Error> {
        let start = Instant::now();
        let groups = extract_script_groups(&mock);
        if groups.is_empty() {
            return Err(RunError::NoScriptGroups.into());
        }
        let replaced = replacement.map(|replacement| {
            let target = replacement
                .target
                .unwrap_or_else(|| ReplaceTarget::from(&groups[0].script));
            replace_binary(&mut mock, &target, replacement.binary, replacement.mode).is_ok()
        });
        info!("running {} script groups", groups.len());

        let fixture = mock.to_json()?;
        let mut outcomes = Vec::with_capacity(groups.len());
        for group in groups {
            let output = self.run_group(&fixture, group.group_type, &group.script_hash).await;
            outcomes.push(GroupOutcome { group, output });
        }
        Ok(RunReport::new(outcomes, replaced, start.elapsed()))
    }

    /// Runs the lock or type script of one cell.
    ///
    /// A replacement without a target replaces the code of the selected script.
    pub async fn run_single(
        &self,
        mut mock: MockTransaction,
        selector: CellSelector,
        replacement: Option<Replacement>,
    ) -> Result<SingleRunReport, Error> {
        let start = Instant::now();
        let script = select_script(&mock, &selector)?;
        let replaced = replacement.map(|replacement| {
            let target = replacement
                .target
                .unwrap_or_else(|| ReplaceTarget::from(&script));
            replace_binary(&mut mock, &target, replacement.binary, replacement.mode).is_ok()
        });

        let script_hash = script.calc_script_hash();
        let fixture = mock.to_json()?;
        let output = self
            .run_group(&fixture, selector.group_type, &script_hash)
            .await;
        Ok(SingleRunReport {
            selector,
            script,
            script_hash,
            replaced,
            output,
            duration: start.elapsed(),
        })
    }

    async fn run_group(
        &self,
        fixture: &str,
        group_type: ScriptGroupType,
        script_hash: &H256,
    ) -> EngineOutput {
        let script_hash = format!("{:#x}", script_hash);
        debug!("running {} group {}", group_type.as_str(), script_hash);
        let result = match self.engine.get().await {
            Ok(engine) => {
                engine
                    .run(
                        fixture,
                        group_type.as_str(),
                        &script_hash,
                        &self.max_cycles.to_string(),
                    )
                    .await
            }
            Err(err) => Err(err),
        };
        match result {
            Ok(text) => EngineOutput::parse(&text),
            Err(err) => {
                warn!("{} group {} failed to run: {}", group_type.as_str(), script_hash, err);
                EngineOutput::Json(EngineResult::failure(format!("{:#}", err)))
            }
        }
    }
}

/// Picks the script the selector points at.
pub fn select_script(mock: &MockTransaction, selector: &CellSelector) -> Result<Script, Error> {
    let output = match selector.cell_type {
        CellType::Input => mock
            .mock_info
            .inputs
            .get(selector.cell_index)
            .map(|input| &input.output),
        CellType::Output => mock.tx.outputs.get(selector.cell_index),
    }
    .ok_or(RunError::CellNotFound {
        cell_type: selector.cell_type,
        index: selector.cell_index,
    })?;
    let script = match selector.group_type {
        ScriptGroupType::Lock => Some(&output.lock),
        ScriptGroupType::Type => output.type_.as_ref(),
    }
    .ok_or(RunError::ScriptNotFound {
        cell_type: selector.cell_type,
        index: selector.cell_index,
        group_type: selector.group_type,
    })?;
    Ok(script.clone())
}
