//! Quill - Jira-flavoured conventional changelog preset

mod cli;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

/// Overrides the directory of the JSON debug log
const LOG_DIR_ENV: &str = "QUILL_LOG_DIR";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    cli.execute()
}

/// Human-readable events go to stderr, filtered by `RUST_LOG` (`warn`, or `debug`
/// with `--verbose`). Everything at debug level is also written as JSON to a daily
/// log file when a log directory is available.
fn init_tracing(verbose: bool) -> Option<WorkerGuard> {
    let default_level = if verbose { "debug" } else { "warn" };
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        );

    let (file, guard) = match log_directory() {
        Some(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "quill.log"));
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

/// `$QUILL_LOG_DIR`, else `~/.quill/logs`; `None` if it can't be created.
fn log_directory() -> Option<PathBuf> {
    let dir = log_dir_from(std::env::var_os(LOG_DIR_ENV), dirs::home_dir())?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn log_dir_from(overridden: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match overridden {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => Some(home?.join(".quill").join("logs")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_prefers_override() {
        let dir = log_dir_from(Some("/var/log/quill".into()), Some("/home/dev".into()));
        assert_eq!(dir, Some(PathBuf::from("/var/log/quill")));
    }

    #[test]
    fn test_log_dir_under_home() {
        let dir = log_dir_from(None, Some("/home/dev".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/dev/.quill/logs")));

        // An empty override is treated as unset
        let dir = log_dir_from(Some("".into()), Some("/home/dev".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/dev/.quill/logs")));
    }

    #[test]
    fn test_no_log_dir_without_home() {
        assert_eq!(log_dir_from(None, None), None);
    }
}
