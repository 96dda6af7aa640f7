use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the default filter directive for the crate.
///
/// `RUST_LOG` takes precedence when set.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookgraph={}", level)
}

/// Splits a log file path into its directory and file name, creating the directory.
fn log_file_location(log_path: &Path) -> (PathBuf, &OsStr, std::io::Result<()>) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new("bookgraph.log"));
    let created = std::fs::create_dir_all(&dir);
    (dir, file_name, created)
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to a JSON log file, rotated daily. If None, logs only to stderr
///
/// The returned guard flushes the file writer on drop and must be held until exit.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return None;
    };

    let (dir, file_name, created) = log_file_location(&log_path);
    let file_appender = tracing_appender::rolling::daily(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();
    subscriber.with(file_layer).init();

    if let Err(e) = created {
        tracing::warn!(dir = %dir.display(), error = %e, "Failed to create log directory");
    }
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "bookgraph=info");
        assert_eq!(default_directive(true), "bookgraph=debug");
    }

    #[test]
    fn test_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("server.log");

        let (dir, file_name, created) = log_file_location(&path);
        assert!(created.is_ok());
        assert!(dir.is_dir());
        assert_eq!(file_name, "server.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_dir() {
        let (dir, file_name, created) = log_file_location(Path::new("bookgraph.log"));
        assert!(created.is_ok());
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file_name, "bookgraph.log");
    }

    #[test]
    fn test_log_directory_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let (_, _, created) = log_file_location(&blocker.join("server.log"));
        assert!(created.is_err());
    }
}
