use crate::helper::{load_mock_transaction, new_runtime};
use ckb_replay_app_config::{ExitCode, RunArgs};
use ckb_replay_script::{DebuggerEngine, EngineHandle, Orchestrator};

/// Prints the report on stdout. A failed script makes the process fail.
pub fn run(args: RunArgs) -> Result<(), ExitCode> {
    let runtime = new_runtime()?;
    let mock = load_mock_transaction(&runtime, &args.rpc, args.source)?;
    let engine = EngineHandle::new(DebuggerEngine::new(args.debugger));
    let orchestrator = Orchestrator::new(&engine, args.max_cycles);

    let success = match args.selector {
        Some(selector) => {
            let report =
                runtime.block_on(orchestrator.run_single(mock, selector, args.replacement))?;
            println!("{report}");
            report.is_success()
        }
        None => {
            let report = runtime.block_on(orchestrator.run_all(mock, args.replacement))?;
            println!("{report}");
            report.all_success
        }
    };

    if success {
        Ok(())
    } else {
        Err(ExitCode::Failure)
    }
}
