//! Logging methods.
//!
//! Stdout carries the form and the `> ` prompt, so nothing is logged there. By default events
//! go to a daily rolling file only; mirroring them to stderr is opt-in.

use std::{env, path::PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "argb_converter.log";

/// Keeps the file logger flushing until dropped.
#[allow(missing_copy_implementations)]
#[derive(Debug)]
#[must_use]
pub(crate) struct Trace {
    _file_log_guard: Option<WorkerGuard>,
}

/// Directory for the rolling log file, from `ARGB_LOG_DIR`. `off` disables file logging.
fn log_dir(value: Option<String>) -> Option<PathBuf> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Some(PathBuf::from("logs")),
        Some(dir) if dir.eq_ignore_ascii_case("off") => None,
        Some(dir) => Some(PathBuf::from(dir)),
    }
}

/// Whether `ARGB_LOG_STDERR` asks for logs on stderr as well.
fn log_to_stderr(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1" | "true" | "TRUE" | "yes" | "on")
    )
}

/// Initialize the tracing library.
pub(crate) fn initialize() -> Trace {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let (file_layer, _file_log_guard) = match log_dir(env::var("ARGB_LOG_DIR").ok()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .compact()
                .with_ansi(false)
                .with_line_number(true)
                .with_writer(non_blocking_file);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = log_to_stderr(env::var("ARGB_LOG_STDERR").ok()).then(|| {
        fmt::Layer::new()
            .compact()
            .without_time()
            .with_line_number(true)
            .with_writer(std::io::stderr)
    });

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("setting tracing default failed: {err}");
    }
    Trace { _file_log_guard }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_defaults_and_off() {
        assert_eq!(log_dir(None), Some(PathBuf::from("logs")));
        assert_eq!(log_dir(Some("  ".into())), Some(PathBuf::from("logs")));
        assert_eq!(log_dir(Some("/tmp/argb".into())), Some(PathBuf::from("/tmp/argb")));
        assert_eq!(log_dir(Some("off".into())), None);
        assert_eq!(log_dir(Some("OFF".into())), None);
    }

    #[test]
    fn stderr_is_opt_in() {
        assert!(!log_to_stderr(None));
        assert!(!log_to_stderr(Some("0".into())));
        assert!(!log_to_stderr(Some(String::new())));
        assert!(log_to_stderr(Some("1".into())));
        assert!(log_to_stderr(Some("true".into())));
    }
}
