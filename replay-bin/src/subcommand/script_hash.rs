use ckb_replay_app_config::{ExitCode, ScriptHashArgs};

pub fn script_hash(args: ScriptHashArgs) -> Result<(), ExitCode> {
    println!("{:#x}", args.script.calc_script_hash());
    Ok(())
}
