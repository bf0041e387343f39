//! Configuration errors and validation diagnostics.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed assets config")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// diagnostics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the config.
    Error,
    /// Logged; the config is still used.
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str().cyan(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({} {hint})", "try".yellow())?;
        }
        Ok(())
    }
}

/// Findings collected by `AssetsConfig::diagnostics`, in check order.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    entries: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.entries.push(ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Log warnings, then fail with every error if there is at least one.
    pub fn check(self) -> Result<(), ConfigError> {
        for warning in self.warnings() {
            crate::log!("warning"; "{warning}");
        }
        if self.has_errors() {
            Err(ConfigError::Diagnostics(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.error_count();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{} ({count} {noun})", "invalid assets config".red().bold())?;
        for error in self.errors() {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("assets.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("assets.toml"));
    }

    #[test]
    fn test_warnings_do_not_fail_check() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("category_sort_order"), "`base` listed twice");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().count(), 1);
        assert!(diag.check().is_ok());
    }

    #[test]
    fn test_check_keeps_errors_in_order() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("file_extensions"), "empty", "add \".css\"");
        diag.warn(FieldPath::new("category_sort_order"), "duplicate");
        diag.error(FieldPath::new("stylesheet_dirs"), "directory not found: styles");

        let Err(ConfigError::Diagnostics(diag)) = diag.check() else {
            panic!("expected diagnostics");
        };
        let fields: Vec<_> = diag.errors().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["file_extensions", "stylesheet_dirs"]);

        let display = diag.to_string();
        assert!(display.contains("2 errors"));
        assert!(display.contains("add \".css\""));
        assert!(!display.contains("duplicate"));
    }
}
