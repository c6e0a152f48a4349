fn main() {
    let version = env!("CARGO_PKG_VERSION");
    if let Some(exit_code) = ckb_replay_bin::run_app(version).err() {
        ::std::process::exit(exit_code.into());
    }
}
