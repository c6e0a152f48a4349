//! ckb-replay logger.
//!
//! Records go to stderr so that stdout only carries command output.

use chrono::prelude::{DateTime, Local};
use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Record, SetLoggerError};
use serde::{Deserialize, Serialize};
use std::{io::Write, thread};

#[cfg(test)]
mod tests;

/// Overrides [`Config::filter`] when set.
pub const LOG_ENV: &str = "CKB_REPLAY_LOG";

/// The logger configuration, the `[logger]` section of the config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// An [env_logger] filter, e.g. `info,ckb-replay-fixture=debug`.
    ///
    /// Crate names may be written with `-`. `None` shows warnings and errors only.
    ///
    /// [env_logger]: https://docs.rs/env_logger/*/env_logger/#enabling-logging
    pub filter: Option<String>,
    /// Colorize the level.
    pub color: bool,
    /// Writes records to stderr, `false` turns logging off.
    pub log_to_stderr: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filter: None,
            color: !cfg!(windows),
            log_to_stderr: true,
        }
    }
}

// Parse crate name leniently in logger filter: convert "-" to "_".
fn convert_compatible_crate_name(spec: &str) -> String {
    let mut parts = spec.splitn(2, '/');
    let first_part = parts.next();
    let last_part = parts.next();
    let mut mods = Vec::new();
    if let Some(mods_part) = first_part {
        for m in mods_part.split(',') {
            mods.push(m.to_owned());
            if m.contains('-') {
                mods.push(m.replace('-', "_"));
            }
        }
    }
    if let Some(filter) = last_part {
        [&mods.join(","), filter].join("/")
    } else {
        mods.join(",")
    }
}

/// The filter in effect: the environment value wins over the configured one.
fn effective_filter(env_filter: Option<String>, config: &Config) -> String {
    if !config.log_to_stderr {
        return "off".to_owned();
    }
    env_filter
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| "warn".to_owned())
}

fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let thread = thread::current();
    let dt: DateTime<Local> = Local::now();
    writeln!(
        buf,
        "{} {} {} {}  {}",
        dt.format("%Y-%m-%d %H:%M:%S%.3f %Z"),
        thread.name().unwrap_or("*unnamed*"),
        buf.default_styled_level(record.level()),
        record.target(),
        record.args()
    )
}

fn build_logger(config: &Config, env_filter: Option<String>) -> Builder {
    let mut builder = Builder::new();
    builder
        .parse_filters(&convert_compatible_crate_name(&effective_filter(
            env_filter, config,
        )))
        .target(Target::Stderr)
        .write_style(if config.color {
            WriteStyle::Auto
        } else {
            WriteStyle::Never
        })
        .format(format_record);
    builder
}

/// Flushes the logger when dropped.
#[must_use]
pub struct LoggerInitGuard;

impl Drop for LoggerInitGuard {
    fn drop(&mut self) {
        flush();
    }
}

/// Installs the logger as the global [log] backend.
pub fn init(config: &Config) -> Result<LoggerInitGuard, SetLoggerError> {
    build_logger(config, std::env::var(LOG_ENV).ok())
        .try_init()
        .map(|_| LoggerInitGuard)
}

/// Flushes any buffered records.
pub fn flush() {
    log::logger().flush()
}
