use crate::helper::{load_mock_transaction, new_runtime};
use ckb_replay_app_config::{ConvertArgs, ExitCode};
use log::info;
use std::fs;

pub fn convert(args: ConvertArgs) -> Result<(), ExitCode> {
    let runtime = new_runtime()?;
    let mock = load_mock_transaction(&runtime, &args.rpc, args.source)?;
    let json = mock.to_json()?;

    match args.output {
        Some(path) => {
            fs::write(&path, json.as_bytes())?;
            info!(
                "mock transaction {:#x} is written to {}",
                mock.tx_hash(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
