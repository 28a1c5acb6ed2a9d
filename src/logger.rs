use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::info;
use std::{env as stdenv, io::Write, path::Path};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Colored `env_logger` setup. `RUST_LOG` overrides the default `info` filter;
/// `RUST_LOG=trace` switches to a compact `file:line LEVEL: msg` line.
pub fn setup_logger() {
    let this_script_name = Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_owned();
    let compact = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let this_script_name_with_version = format!("{}_{}", this_script_name, VERSION);

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => format!("{}", record.level()).red(),
                log::Level::Warn => format!(" {}", record.level()).yellow(),
                log::Level::Info => format!(" {}", record.level()).green(),
                log::Level::Debug => format!("{}", record.level()).blue(),
                log::Level::Trace => format!("{}", record.level()).purple(),
            };
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            if compact {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    this_script_name_with_version.purple(),
                    Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                    level,
                    record.args()
                )
            }
        })
        .init();
    info!("Logger initialized");
}
