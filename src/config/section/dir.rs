//! `[dir]` section configuration.
//!
//! Paths consumed by the host build integration; the registry itself never
//! reads them.
//!
//! ```toml
//! [dir]
//! components = "src/components"   # Template/component sources
//! output = "public"               # Build output directory
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    /// Component/template source directory.
    pub components: PathBuf,
    /// Build output directory.
    pub output: PathBuf,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            components: "components".into(),
            output: "public".into(),
        }
    }
}

impl DirConfig {
    pub const FIELD_COMPONENTS: FieldPath = FieldPath::new("dir.components");
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("dir.output");

    /// Resolve relative paths against `root`.
    pub fn normalize(&mut self, root: &Path) {
        if self.components.is_relative() {
            self.components = root.join(&self.components);
        }
        if self.output.is_relative() {
            self.output = root.join(&self.output);
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output == self.components {
            diag.error_with_hint(
                Self::FIELD_OUTPUT,
                format!(
                    "{} and {} point to the same directory",
                    Self::FIELD_OUTPUT,
                    Self::FIELD_COMPONENTS
                ),
                "use a dedicated output directory",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.dir.components, PathBuf::from("components"));
        assert_eq!(config.dir.output, PathBuf::from("public"));
    }

    #[test]
    fn test_custom_dirs() {
        let config = test_parse_config("[dir]\ncomponents = \"src/components\"\noutput = \"dist\"");
        assert_eq!(config.dir.components, PathBuf::from("src/components"));
        assert_eq!(config.dir.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_normalize_keeps_absolute() {
        let mut dir = DirConfig {
            components: PathBuf::from("/abs/components"),
            output: PathBuf::from("dist"),
        };
        dir.normalize(Path::new("/site"));
        assert_eq!(dir.components, PathBuf::from("/abs/components"));
        assert_eq!(dir.output, PathBuf::from("/site/dist"));
    }

    #[test]
    fn test_same_dir_is_error() {
        let dir = DirConfig {
            components: PathBuf::from("site"),
            output: PathBuf::from("site"),
        };
        let mut diag = ConfigDiagnostics::new();
        dir.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
