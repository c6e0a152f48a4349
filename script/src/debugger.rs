use crate::{
    engine::{EngineResult, ScriptEngine},
    error::EngineError,
};
use async_trait::async_trait;
use ckb_replay_error::Error;
use log::debug;
use std::path::PathBuf;
use tokio::process::Command;

/// Runs script groups with the `ckb-debugger` executable.
#[derive(Clone, Debug)]
pub struct DebuggerEngine {
    program: PathBuf,
}

impl DebuggerEngine {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        DebuggerEngine {
            program: program.into(),
        }
    }

    fn unavailable<T: ToString>(&self, reason: T) -> EngineError {
        EngineError::Unavailable {
            program: self.program.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for DebuggerEngine {
    fn default() -> Self {
        DebuggerEngine::new("ckb-debugger")
    }
}

#[async_trait]
impl ScriptEngine for DebuggerEngine {
    async fn initialize(&self) -> Result<(), Error> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .await
            .map_err(|err| self.unavailable(err))?;
        if !output.status.success() {
            return Err(self.unavailable(output.status).into());
        }
        debug!(
            "using {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }

    async fn run(
        &self,
        fixture: &str,
        group_type: &str,
        script_hash: &str,
        max_cycles: &str,
    ) -> Result<String, Error> {
        let file = tempfile::Builder::new()
            .prefix("mock_tx")
            .suffix(".json")
            .tempfile()
            .map_err(EngineError::from)?;
        tokio::fs::write(file.path(), fixture)
            .await
            .map_err(EngineError::from)?;

        let output = Command::new(&self.program)
            .arg("--tx-file")
            .arg(file.path())
            .args(["--script-group-type", group_type])
            .args(["--script-hash", script_hash])
            .args(["--max-cycles", max_cycles])
            .output()
            .await
            .map_err(EngineError::from)?;
        debug!("{} exited with {}", self.program.display(), output.status);
        let result = parse_debugger_output(
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        );
        Ok(result.to_json())
    }
}

/// Maps the `Run result:` and `All cycles:` lines printed by `ckb-debugger` to a result.
pub(crate) fn parse_debugger_output(stdout: &str, stderr: &str) -> EngineResult {
    let field = |name: &str| {
        stdout
            .lines()
            .find_map(|line| line.trim().strip_prefix(name))
            .map(str::trim)
    };

    match field("Run result:") {
        Some("0") => {
            let cycles = field("All cycles:").and_then(|text| {
                let digits = text.split(|c: char| !c.is_ascii_digit()).next()?;
                digits.parse::<u64>().ok()
            });
            match cycles {
                Some(cycles) => EngineResult::success(cycles),
                None => EngineResult::failure("ckb-debugger did not report the cycles"),
            }
        }
        Some(code) if code.parse::<i64>().is_ok() => {
            EngineResult::failure(format!("script exited with code {}", code))
        }
        Some(message) => EngineResult::failure(message),
        None => match stderr.trim() {
            "" => EngineResult::failure("ckb-debugger printed no result"),
            stderr => EngineResult::failure(stderr),
        },
    }
}
