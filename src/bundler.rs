//! Build-wide asset context.
//!
//! [`AssetBundler`] ties the registry to its collaborators: the configured
//! sort order and extensions, the stylesheet reader, the compressor and the
//! build mode. One bundler lives for one build and is passed explicitly to
//! every page render.
//!
//! ```ignore
//! let mut assets = AssetBundler::new(AssetsConfig::load(path)?)?;
//! assets.add_style("critical", "home", "p{margin:0}")?;
//! let css = assets.resolve_styles("critical", None, Some("home"))?;
//! ```
//!
//! Hosts rendering pages on several threads use [`SharedBundler`], which
//! serializes every call behind a mutex.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::asset::{Compressor, FsReader, LightningCompressor, SourceReader, scan_stylesheets};
use crate::config::AssetsConfig;
use crate::core::{BuildMode, IntoScope};
use crate::error::Result;
use crate::registry::{AssetRegistry, ScriptEntry};
use crate::resolve::{StyleResolver, render_scripts};

pub struct AssetBundler {
    config: AssetsConfig,
    registry: AssetRegistry,
    reader: Box<dyn SourceReader>,
    compressor: Box<dyn Compressor>,
    mode: BuildMode,
}

impl AssetBundler {
    /// Create a bundler and scan every configured stylesheet directory.
    ///
    /// Uses the filesystem reader, the lightningcss compressor and the
    /// mode selected by the environment.
    pub fn new(config: AssetsConfig) -> Result<Self> {
        let mut bundler = Self::empty(config);
        let dirs = bundler.config.stylesheet_dirs.clone();
        for dir in &dirs {
            bundler.add_stylesheets_directory(dir)?;
        }
        Ok(bundler)
    }

    /// Create a bundler without scanning anything.
    pub fn empty(config: AssetsConfig) -> Self {
        Self {
            config,
            registry: AssetRegistry::new(),
            reader: Box::new(FsReader),
            compressor: Box::new(LightningCompressor),
            mode: BuildMode::from_env(),
        }
    }

    pub fn with_reader(mut self, reader: impl SourceReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn with_compressor(mut self, compressor: impl Compressor + 'static) -> Self {
        self.compressor = Box::new(compressor);
        self
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &AssetsConfig {
        &self.config
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    // ------------------------------------------------------------------------
    // registration
    // ------------------------------------------------------------------------

    /// Scan `dir` with the configured extensions and merge the result.
    ///
    /// Scanned paths are appended after everything already registered.
    pub fn add_stylesheets_directory(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let tree = scan_stylesheets(dir.as_ref(), &self.config.file_extensions)?;
        self.registry.merge_scan(tree);
        Ok(())
    }

    pub fn add_style(
        &mut self,
        scope: impl IntoScope,
        identifier: &str,
        style: impl Into<String>,
    ) -> Result<()> {
        self.registry.add_style(scope, identifier, style)
    }

    pub fn add_stylesheet(
        &mut self,
        scope: impl IntoScope,
        category: Option<&str>,
        path: impl Into<PathBuf>,
    ) -> Result<()> {
        self.registry.add_stylesheet(scope, category, path)
    }

    pub fn add_script(
        &mut self,
        scope: impl IntoScope,
        identifier: &str,
        entry: impl Into<ScriptEntry>,
    ) -> Result<()> {
        self.registry.add_script(scope, identifier, entry)
    }

    // ------------------------------------------------------------------------
    // queries and resolution
    // ------------------------------------------------------------------------

    pub fn has_styles(&self, scope: impl IntoScope, identifier: Option<&str>) -> Result<bool> {
        self.registry.has_styles(scope, identifier)
    }

    pub fn has_scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<bool> {
        self.registry.has_scripts(scope, identifier)
    }

    /// Merged, compressed stylesheet for a request.
    ///
    /// See [`StyleResolver::resolve`].
    pub fn resolve_styles(
        &self,
        scope: impl IntoScope,
        category: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<String> {
        StyleResolver::new(&self.registry, self.reader.as_ref(), self.compressor.as_ref())
            .with_sort_order(&self.config.category_sort_order)
            .with_mode(self.mode)
            .resolve(scope, category, identifier)
    }

    /// Script markup for `identifier`. See [`render_scripts`].
    pub fn render_scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<String> {
        render_scripts(&self.registry, scope, identifier)
    }
}

/// Thread-safe handle to one [`AssetBundler`].
///
/// Clones share the same bundler; each call holds the lock for its whole
/// duration, so registrations and resolutions never interleave.
#[derive(Clone)]
pub struct SharedBundler {
    inner: Arc<Mutex<AssetBundler>>,
}

impl SharedBundler {
    pub fn new(bundler: AssetBundler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bundler)),
        }
    }

    /// Run `f` with exclusive access to the bundler.
    pub fn with<R>(&self, f: impl FnOnce(&mut AssetBundler) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn add_style(
        &self,
        scope: impl IntoScope,
        identifier: &str,
        style: impl Into<String>,
    ) -> Result<()> {
        self.inner.lock().add_style(scope, identifier, style)
    }

    pub fn add_stylesheet(
        &self,
        scope: impl IntoScope,
        category: Option<&str>,
        path: impl Into<PathBuf>,
    ) -> Result<()> {
        self.inner.lock().add_stylesheet(scope, category, path)
    }

    pub fn add_script(
        &self,
        scope: impl IntoScope,
        identifier: &str,
        entry: impl Into<ScriptEntry>,
    ) -> Result<()> {
        self.inner.lock().add_script(scope, identifier, entry)
    }

    pub fn add_stylesheets_directory(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.inner.lock().add_stylesheets_directory(dir)
    }

    pub fn has_styles(&self, scope: impl IntoScope, identifier: Option<&str>) -> Result<bool> {
        self.inner.lock().has_styles(scope, identifier)
    }

    pub fn has_scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<bool> {
        self.inner.lock().has_scripts(scope, identifier)
    }

    pub fn resolve_styles(
        &self,
        scope: impl IntoScope,
        category: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<String> {
        self.inner.lock().resolve_styles(scope, category, identifier)
    }

    pub fn render_scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<String> {
        self.inner.lock().render_scripts(scope, identifier)
    }
}
