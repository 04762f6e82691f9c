//! Logging setup for IntDupe.
//!
//! Structured logging goes through the `log` facade with an `env_logger`
//! backend. The level comes from, in priority order:
//!
//! 1. `RUST_LOG` (if set)
//! 2. `--quiet` (errors only) or `-v`/`-vv` (debug/trace)
//! 3. info
//!
//! The binary attaches [`crate::report::LogReporter`] only with `-v`, so its
//! per-strategy lines appear next to the debug output; `-vv` adds partition
//! and compaction traces from the algorithms themselves. Without `-v` the
//! log carries warnings and errors only, the results go to stdout.
//!
//! ```rust,no_run
//! use intdupe::logging::init_logging;
//!
//! // -v on the command line
//! init_logging(1, false);
//! log::debug!("visible");
//! ```

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logger from CLI verbosity flags.
///
/// Call once, before the first log statement. A second call is ignored with
/// a warning instead of panicking, so tests and embedders can call it freely.
///
/// * `verbose` - Verbosity count from CLI (0=info, 1=debug, 2+=trace)
/// * `quiet` - If true, only show errors (overridden by `RUST_LOG`)
pub fn init_logging(verbose: u8, quiet: bool) {
    let from_env = env::var("RUST_LOG").is_ok();
    let mut builder = Builder::new();

    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }
    configure_format(&mut builder, verbose);

    if let Err(e) = builder.try_init() {
        log::warn!("Logger already initialized: {}", e);
        return;
    }

    if from_env {
        log::debug!(
            "Logging initialized from RUST_LOG={:?}",
            env::var("RUST_LOG").ok()
        );
    } else {
        log::debug!(
            "Logging initialized at level: {:?}",
            determine_level(verbose, quiet)
        );
    }
}

/// Map CLI flags to a level filter. `quiet` wins over `verbose`.
#[must_use]
pub fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Short module label for log lines: `intdupe::dedup::quicksort` -> `quicksort`.
fn short_target(module_path: Option<&str>) -> &str {
    module_path
        .and_then(|path| path.rsplit("::").next())
        .unwrap_or("unknown")
}

fn configure_format(builder: &mut Builder, verbose: u8) {
    // Debug builds get a timestamp; -v adds the module label.
    #[cfg(debug_assertions)]
    {
        builder.format(move |buf, record| {
            let timestamp = buf.timestamp_millis();
            let level = record.level();
            let style = buf.default_level_style(level);
            if verbose >= 1 {
                writeln!(
                    buf,
                    "{} {style}{:<5}{style:#} [{}] {}",
                    timestamp,
                    level,
                    short_target(record.module_path()),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{} {style}{:<5}{style:#} {}",
                    timestamp,
                    level,
                    record.args()
                )
            }
        });
    }

    #[cfg(not(debug_assertions))]
    {
        builder.format(move |buf, record| {
            let level = record.level();
            let style = buf.default_level_style(level);
            if verbose >= 1 {
                writeln!(
                    buf,
                    "{style}{:<5}{style:#} [{}] {}",
                    level,
                    short_target(record.module_path()),
                    record.args()
                )
            } else {
                writeln!(buf, "{style}{:<5}{style:#} {}", level, record.args())
            }
        });
    }
}
