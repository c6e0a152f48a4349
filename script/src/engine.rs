use async_trait::async_trait;
use ckb_replay_error::Error;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

/// An external verifier which executes one script group of a mock transaction.
#[async_trait]
pub trait ScriptEngine: Send + Sync {
    /// Prepares the engine. Called once, before the first `run`.
    async fn initialize(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Runs the group `(group_type, script_hash)` of the mock transaction in `fixture`.
    ///
    /// `group_type` is `lock` or `type`, `script_hash` is 0x-prefixed hex and `max_cycles` is
    /// decimal. The returned text is usually an [`EngineResult`] in JSON.
    async fn run(
        &self,
        fixture: &str,
        group_type: &str,
        script_hash: &str,
        max_cycles: &str,
    ) -> Result<String, Error>;
}

/// The structured outcome of running one script group.
///
/// Fields other than `cycle` and `error` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Consumed cycles.
    #[serde(default)]
    pub cycle: Option<u64>,
    /// Set when the script failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl EngineResult {
    pub fn success(cycle: u64) -> Self {
        EngineResult {
            cycle: Some(cycle),
            error: None,
        }
    }

    pub fn failure<T: Into<String>>(error: T) -> Self {
        EngineResult {
            cycle: None,
            error: Some(error.into()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "cycle": self.cycle, "error": self.error }).to_string()
    }
}

/// What an engine printed for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineOutput {
    /// A structured result.
    Json(EngineResult),
    /// Anything else. It is shown as is and the run counts as a success.
    Passthrough(String),
}

impl EngineOutput {
    /// Reads an object carrying `cycle` or `error` as a structured result.
    ///
    /// A non-null `error` always marks the run as failed, even when the object does not fit
    /// [`EngineResult`].
    pub fn parse(text: &str) -> Self {
        let value = match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value @ serde_json::Value::Object(_)) => value,
            _ => return EngineOutput::Passthrough(text.to_owned()),
        };
        let error = value.get("error").filter(|error| !error.is_null()).cloned();
        if value.get("cycle").is_none() && value.get("error").is_none() {
            return EngineOutput::Passthrough(text.to_owned());
        }
        match serde_json::from_value::<EngineResult>(value) {
            Ok(result) => EngineOutput::Json(result),
            Err(_) => match error {
                Some(serde_json::Value::String(error)) => {
                    EngineOutput::Json(EngineResult::failure(error))
                }
                Some(error) => EngineOutput::Json(EngineResult::failure(error.to_string())),
                None => EngineOutput::Passthrough(text.to_owned()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            EngineOutput::Json(result) => result.error.is_none(),
            EngineOutput::Passthrough(_) => true,
        }
    }

    /// The consumed cycles of a successful run, 0 when unknown.
    pub fn cycles(&self) -> u64 {
        match self {
            EngineOutput::Json(EngineResult {
                cycle: Some(cycle),
                error: None,
            }) => *cycle,
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EngineOutput::Json(result) => result.error.as_deref(),
            EngineOutput::Passthrough(_) => None,
        }
    }
}

/// Owns an engine and initializes it on first use.
pub struct EngineHandle<E> {
    engine: E,
    ready: OnceCell<()>,
}

impl<E: ScriptEngine> EngineHandle<E> {
    pub fn new(engine: E) -> Self {
        EngineHandle {
            engine,
            ready: OnceCell::new(),
        }
    }

    /// The engine, initialized.
    ///
    /// A failed initialization is retried by the next call.
    pub async fn get(&self) -> Result<&E, Error> {
        self.ready
            .get_or_try_init(|| self.engine.initialize())
            .await?;
        Ok(&self.engine)
    }

    pub fn is_initialized(&self) -> bool {
        self.ready.initialized()
    }
}
