//! Logger setup for the command-line tool.

use anyhow::{Result, bail};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Maps the number of `-v` flags to a level filter.
///
/// Warnings are on by default so deprecation notices from the legacy
/// interface stay visible.
pub fn level_for(verbosity: u8) -> Result<LevelFilter> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        3 => LevelFilter::Trace,
        _ => bail!("at most three -v flags are supported"),
    };
    Ok(level)
}

/// Installs the global logger. `RUST_LOG`, when set, overrides the level
/// chosen on the command line.
pub fn configure(verbosity: u8) -> Result<()> {
    let level = level_for(verbosity)?;

    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.try_init()?;
    log::trace!("logger verbosity {level}");
    Ok(())
}
