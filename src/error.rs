use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures reported by the native window layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("Native window unavailable: {command}")]
    Unavailable { command: String },

    #[error("Native command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ShellError {
    /// Create an error for a shell that has no native window behind it
    pub fn unavailable(command: impl Into<String>) -> Self {
        let command = command.into();
        debug!("Native window unavailable for '{}'", command);
        ShellError::Unavailable { command }
    }

    /// Create a command failure error
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        let command = command.into();
        let reason = reason.into();
        debug!("Native command '{}' failed: {}", command, reason);
        ShellError::CommandFailed { command, reason }
    }

    pub fn command(&self) -> &str {
        match self {
            ShellError::Unavailable { command } => command,
            ShellError::CommandFailed { command, .. } => command,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShellError::Unavailable { .. } => ErrorSeverity::Low,
            ShellError::CommandFailed { .. } => ErrorSeverity::Medium,
        }
    }
}

/// Configuration loading and validation failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid setting: {setting} - {reason}")]
    Invalid { setting: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        let setting = setting.into();
        let reason = reason.into();
        warn!("Invalid setting '{}': {}", setting, reason);
        ConfigError::Invalid { setting, reason }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::Invalid { .. } => ErrorSeverity::Medium,
            ConfigError::Io(_) => ErrorSeverity::Medium,
            ConfigError::Serialization(_) => ErrorSeverity::Low,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Low => write!(f, "LOW"),
            ErrorSeverity::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// Log a shell failure without interrupting the caller.
///
/// Window commands are best effort: the logical state has already moved on by
/// the time a failure comes back.
pub fn report_shell_failure(err: &ShellError, context: &str) {
    match err.severity() {
        ErrorSeverity::Low => debug!("[{}] {}: {}", err.severity(), context, err),
        ErrorSeverity::Medium => warn!("[{}] {}: {}", err.severity(), context, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_shell_error_properties() {
        let unavailable = ShellError::unavailable("set_window_geometry");
        assert_eq!(unavailable.command(), "set_window_geometry");
        assert_eq!(unavailable.severity(), ErrorSeverity::Low);

        let failed = ShellError::command_failed("collapse_window", "compositor gone");
        assert_eq!(failed.severity(), ErrorSeverity::Medium);
        assert_eq!(
            failed.to_string(),
            "Native command failed: collapse_window - compositor gone"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("layout.min_fraction", "must be below max_fraction");
        assert_eq!(
            err.to_string(),
            "Invalid setting: layout.min_fraction - must be below max_fraction"
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert_eq!(ErrorSeverity::Medium.to_string(), "MEDIUM");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_command_failure_is_warned_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let err = ShellError::command_failed("collapse_window", "compositor gone");
            report_shell_failure(&err, "mode preset");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let warnings = output.lines().filter(|l| l.contains("WARN")).count();
        assert_eq!(warnings, 1, "{}", output);
        assert!(!output.contains("ERROR"), "{}", output);
    }
}
