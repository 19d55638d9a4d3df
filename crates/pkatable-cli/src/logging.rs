use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{self},
    prelude::*,
};

/// Target prefix shared by the library and the binary; dependency events are not shown.
const LOG_TARGET: &str = "pkatable";

fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// The log file always records at least DEBUG, so per-stage counts such as dropped
/// potential lines are kept even when the console is quiet.
fn file_level_for(verbosity: u8) -> LevelFilter {
    level_for(verbosity, false).max(LevelFilter::DEBUG)
}

fn targets(level: LevelFilter) -> Targets {
    Targets::new().with_target(LOG_TARGET, level)
}

fn build_subscriber(
    verbosity: u8,
    quiet: bool,
    log_file: Option<PathBuf>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(targets(level_for(verbosity, quiet)));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true)
                    .with_filter(targets(file_level_for(verbosity))),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer))
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    build_subscriber(verbosity, quiet, log_file)?.init();
    Ok(())
}
