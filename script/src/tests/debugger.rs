use crate::{debugger::parse_debugger_output, DebuggerEngine, EngineHandle, EngineResult};
use ckb_replay_error::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn successful_run() {
    let stdout = "Run result: 0\nAll cycles: 1234567(1.2M)\n";
    assert_eq!(parse_debugger_output(stdout, ""), EngineResult::success(1234567));
}

#[test]
fn cycles_without_suffix() {
    let stdout = "Script log: hello\nRun result: 0\nTotal cycles consumed: 88(88)\nAll cycles: 88\n";
    assert_eq!(parse_debugger_output(stdout, ""), EngineResult::success(88));
}

#[test]
fn missing_cycles_line() {
    assert_eq!(
        parse_debugger_output("Run result: 0\n", ""),
        EngineResult::failure("ckb-debugger did not report the cycles")
    );
}

#[test]
fn script_exit_code() {
    assert_eq!(
        parse_debugger_output("Run result: -31\nAll cycles: 10(10)\n", ""),
        EngineResult::failure("script exited with code -31")
    );
}

#[test]
fn verification_error_text() {
    assert_eq!(
        parse_debugger_output("Run result: Error(ExceededMaximumCycles)\n", ""),
        EngineResult::failure("Error(ExceededMaximumCycles)")
    );
}

#[test]
fn falls_back_to_stderr() {
    assert_eq!(
        parse_debugger_output("", "error: invalid script hash\n"),
        EngineResult::failure("error: invalid script hash")
    );
    assert_eq!(
        parse_debugger_output("", "  "),
        EngineResult::failure("ckb-debugger printed no result")
    );
}

#[tokio::test]
async fn missing_program_is_unavailable() {
    let handle = EngineHandle::new(DebuggerEngine::new("ckb-replay-no-such-debugger"));
    let err = handle.get().await.err().expect("unavailable");
    assert_eq!(err.kind(), ErrorKind::Engine);
    assert!(!handle.is_initialized());
}
