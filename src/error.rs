//! Asset registry and resolution errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while registering, scanning or resolving assets.
///
/// None of these are recovered internally; the host decides whether a
/// failure aborts the build or skips the page.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unsupported scope `{0}` (expected `critical` or `async`)")]
    UnsupportedScope(String),

    #[error("failed to read stylesheet `{}`", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan stylesheet directory `{}`", path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("script entry for `{identifier}` has no `src` attribute")]
    MissingScriptSrc { identifier: String },

    #[error("failed to compress stylesheet: {0}")]
    Compress(String),
}

pub type Result<T, E = AssetError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_scope_display() {
        let err = AssetError::UnsupportedScope("other".into());
        let display = err.to_string();
        assert!(display.contains("`other`"));
        assert!(display.contains("critical"));
    }

    #[test]
    fn test_file_read_keeps_source() {
        use std::error::Error as _;

        let err = AssetError::FileRead {
            path: PathBuf::from("styles/base.css"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("styles/base.css"));
        assert!(err.source().is_some());
    }
}
