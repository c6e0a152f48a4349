use crate::{build_logger, convert_compatible_crate_name, effective_filter, Config};
use log::{Level, Log, Metadata};
use pretty_assertions::assert_eq;

#[test]
fn test_convert_compatible_crate_name() {
    let spec = "info,a-b=trace,c-d_e-f=warn,g-h-i=debug,jkl=trace/*[0-9]";
    let expected = "info,a-b=trace,a_b=trace,c-d_e-f=warn,c_d_e_f=warn,g-h-i=debug,g_h_i=debug,jkl=trace/*[0-9]";
    assert_eq!(convert_compatible_crate_name(spec), expected);
    let spec = "info/*[0-9]";
    assert_eq!(convert_compatible_crate_name(spec), spec);
    assert_eq!(convert_compatible_crate_name("info"), "info");
}

#[test]
fn environment_overrides_config() {
    let config = Config {
        filter: Some("info".to_owned()),
        ..Default::default()
    };
    assert_eq!(effective_filter(None, &config), "info");
    assert_eq!(effective_filter(Some("trace".to_owned()), &config), "trace");
    assert_eq!(effective_filter(None, &Config::default()), "warn");
}

#[test]
fn disabled_logger_is_off() {
    let config = Config {
        log_to_stderr: false,
        ..Default::default()
    };
    assert_eq!(effective_filter(Some("trace".to_owned()), &config), "off");
}

fn enabled(logger: &env_logger::Logger, level: Level, target: &str) -> bool {
    logger.enabled(&Metadata::builder().level(level).target(target).build())
}

#[test]
fn dashed_crate_names_filter_modules() {
    let config = Config {
        filter: Some("warn,ckb-replay-fixture=debug".to_owned()),
        ..Default::default()
    };
    let logger = build_logger(&config, None).build();
    assert!(enabled(&logger, Level::Debug, "ckb_replay_fixture::builder"));
    assert!(!enabled(&logger, Level::Debug, "ckb_replay_script"));
    assert!(enabled(&logger, Level::Warn, "ckb_replay_script"));
}
