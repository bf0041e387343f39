//! Asset configuration (`assets.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [dir]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # AssetsConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! category_sort_order = ["base", "layout", "utilities"]   # Concatenated last, in this order
//! file_extensions = [".css"]                              # Scanned stylesheet extensions
//! stylesheet_dirs = ["styles"]                            # Scanned at construction, in order
//!
//! [dir]
//! components = "src/components"
//! output = "public"
//! ```

pub mod section;
pub mod types;

pub use section::DirConfig;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};

use crate::core::normalize_extension;
use crate::log;
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Field paths of [`AssetsConfig`], for diagnostics.
pub struct AssetsConfigFields {
    pub category_sort_order: FieldPath,
    pub file_extensions: FieldPath,
    pub stylesheet_dirs: FieldPath,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `assets.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Categories concatenated after all others, in this order.
    pub category_sort_order: Vec<String>,

    /// Allowed stylesheet extensions (`.css` or `css`).
    pub file_extensions: Vec<String>,

    /// Directories scanned into the registry at construction.
    pub stylesheet_dirs: Vec<PathBuf>,

    /// Host integration directories
    pub dir: DirConfig,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            category_sort_order: Vec::new(),
            file_extensions: vec![".css".to_string()],
            stylesheet_dirs: Vec::new(),
            dir: DirConfig::default(),
        }
    }
}

impl AssetsConfig {
    pub const FIELDS: AssetsConfigFields = AssetsConfigFields {
        category_sort_order: FieldPath::new("category_sort_order"),
        file_extensions: FieldPath::new("file_extensions"),
        stylesheet_dirs: FieldPath::new("stylesheet_dirs"),
    };

    /// Load and validate configuration from a file.
    ///
    /// Relative paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path.to_path_buf();
        config.finalize(&root);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative paths stay relative to the current directory.
    pub fn parse(content: &str) -> Result<Self> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new("<inline>"));
        }
        config.finalize(Path::new(""));
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Normalize extensions and resolve relative paths against `root`.
    pub fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.file_extensions = self
            .file_extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect();
        for dir in &mut self.stylesheet_dirs {
            if dir.is_relative() {
                *dir = root.join(&*dir);
            }
        }
        self.dir.normalize(root);
    }

    /// Validate, logging warnings and failing on errors.
    pub fn validate(&self) -> Result<()> {
        self.diagnostics().check()?;
        Ok(())
    }

    /// Collect validation diagnostics without reporting them.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.validate_extensions(&mut diag);
        self.validate_sort_order(&mut diag);
        self.validate_stylesheet_dirs(&mut diag);
        self.dir.validate(&mut diag);
        diag
    }

    fn validate_extensions(&self, diag: &mut ConfigDiagnostics) {
        if self.file_extensions.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.file_extensions,
                format!("{} is empty, no stylesheet would be scanned", Self::FIELDS.file_extensions),
                "add \".css\"",
            );
            return;
        }

        for ext in &self.file_extensions {
            let bare = ext.trim_start_matches('.');
            if bare.is_empty() || bare.contains(['.', '/', '\\']) {
                diag.error(
                    Self::FIELDS.file_extensions,
                    format!("invalid extension `{ext}`"),
                );
            }
        }
    }

    fn validate_sort_order(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for category in &self.category_sort_order {
            if !seen.insert(category.as_str()) {
                diag.warn(
                    Self::FIELDS.category_sort_order,
                    format!("category `{category}` listed more than once, first position wins"),
                );
            }
        }
    }

    fn validate_stylesheet_dirs(&self, diag: &mut ConfigDiagnostics) {
        for dir in &self.stylesheet_dirs {
            if !dir.exists() {
                diag.error(
                    Self::FIELDS.stylesheet_dirs,
                    format!("directory not found: {}", dir.display()),
                );
            } else if !dir.is_dir() {
                diag.error(
                    Self::FIELDS.stylesheet_dirs,
                    format!("not a directory: {}", dir.display()),
                );
            }
        }
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AssetsConfig {
    let (parsed, ignored) = AssetsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
