//! Diagnostic logging setup.
//!
//! The full-screen UI owns stdout and stderr, so interactive sessions only log
//! when a file is given. One-shot commands log to stderr.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "dsa_sage=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Pick the target for an interactive session: an explicit path wins over
    /// the environment variable, and without either logging stays off.
    pub fn for_interactive(flag: Option<&Path>, env_value: Option<&str>) -> Self {
        if let Some(path) = flag {
            return LogTarget::File(path.to_path_buf());
        }
        match env_value.map(str::trim) {
            Some(value) if !value.is_empty() => LogTarget::File(PathBuf::from(value)),
            _ => LogTarget::Disabled,
        }
    }

    /// One-shot commands log to a file when asked and to stderr otherwise.
    pub fn for_one_shot(flag: Option<&Path>, env_value: Option<&str>) -> Self {
        match Self::for_interactive(flag, env_value) {
            LogTarget::Disabled => LogTarget::Stderr,
            target => target,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Calling this twice is an error from
/// `tracing_subscriber`, which is surfaced to the caller.
pub fn init_tracing(target: &LogTarget) -> Result<(), Box<dyn Error + Send + Sync>> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)
                .map_err(|err| format!("Failed to open log file {}: {err}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn interactive_logging_is_off_without_a_path() {
        assert_eq!(LogTarget::for_interactive(None, None), LogTarget::Disabled);
        assert_eq!(LogTarget::for_interactive(None, Some("  ")), LogTarget::Disabled);
    }

    #[test]
    fn flag_beats_environment() {
        let target = LogTarget::for_interactive(Some(Path::new("flag.log")), Some("env.log"));
        assert_eq!(target, LogTarget::File(PathBuf::from("flag.log")));

        let target = LogTarget::for_interactive(None, Some("env.log"));
        assert_eq!(target, LogTarget::File(PathBuf::from("env.log")));
    }

    #[test]
    fn one_shot_falls_back_to_stderr() {
        assert_eq!(LogTarget::for_one_shot(None, None), LogTarget::Stderr);
        assert_eq!(
            LogTarget::for_one_shot(None, Some("run.log")),
            LogTarget::File(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn log_file_is_created_in_append_mode() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sage.log");
        std::fs::write(&path, "existing\n").expect("seed");

        let mut file = open_log_file(&path).expect("open");
        std::io::Write::write_all(&mut file, b"more\n").expect("write");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "existing\nmore\n");
    }
}
