//! Build-wide asset registry.
//!
//! Accumulates every asset contributed by page and template renders:
//!
//! ```text
//! styles[scope][identifier]     -> CSS snippets   (deduplicated, insertion order)
//! stylesheets[scope][category]  -> file paths     (insertion order, not deduplicated)
//! scripts[scope][identifier]    -> script entries (deduplicated, insertion order)
//! ```
//!
//! Entries only grow; there is no removal. The registry is an ordinary
//! value owned by the caller, so independent builds never share state.

mod script;

pub use script::{AttrValue, ScriptAttrs, ScriptEntry};

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::core::{DEFAULT_CATEGORY, IntoScope, PerScope, Scope};
use crate::error::{AssetError, Result};

/// Category name to stylesheet paths, in category discovery order.
pub type CategoryMap = IndexMap<String, Vec<PathBuf>>;

/// Scanner output and registry stylesheet storage share this shape.
pub type CategoryTree = PerScope<CategoryMap>;

type IdentifierMap<T> = FxHashMap<String, Vec<T>>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssetRegistry {
    styles: PerScope<IdentifierMap<String>>,
    stylesheets: CategoryTree,
    scripts: PerScope<IdentifierMap<ScriptEntry>>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // registration
    // ------------------------------------------------------------------------

    /// Append an ad-hoc CSS snippet unless the identifier already has it.
    pub fn add_style(
        &mut self,
        scope: impl IntoScope,
        identifier: &str,
        style: impl Into<String>,
    ) -> Result<()> {
        let scope = scope.into_scope()?;
        let style = style.into();
        let styles = self
            .styles
            .get_mut(scope)
            .entry(identifier.to_string())
            .or_default();
        if !styles.contains(&style) {
            styles.push(style);
        }
        Ok(())
    }

    /// Append a stylesheet path. `None` category means [`DEFAULT_CATEGORY`].
    ///
    /// Paths are not deduplicated; the same path added twice is read twice.
    pub fn add_stylesheet(
        &mut self,
        scope: impl IntoScope,
        category: Option<&str>,
        path: impl Into<PathBuf>,
    ) -> Result<()> {
        let scope = scope.into_scope()?;
        let category = category.unwrap_or(DEFAULT_CATEGORY);
        self.stylesheets
            .get_mut(scope)
            .entry(category.to_string())
            .or_default()
            .push(path.into());
        Ok(())
    }

    /// Append a script entry unless an equal entry is already registered.
    ///
    /// Attribute records must carry a textual `src`.
    pub fn add_script(
        &mut self,
        scope: impl IntoScope,
        identifier: &str,
        entry: impl Into<ScriptEntry>,
    ) -> Result<()> {
        let scope = scope.into_scope()?;
        let entry = entry.into();
        if entry.src().is_none() {
            return Err(AssetError::MissingScriptSrc {
                identifier: identifier.to_string(),
            });
        }

        let scripts = self
            .scripts
            .get_mut(scope)
            .entry(identifier.to_string())
            .or_default();
        if !scripts.contains(&entry) {
            scripts.push(entry);
        }
        Ok(())
    }

    /// Deep-merge a scan result into the stylesheet map.
    ///
    /// Existing categories keep their paths and get the scanned ones
    /// appended; new categories are added in scan order.
    pub fn merge_scan(&mut self, tree: CategoryTree) {
        for (scope, categories) in tree.into_pairs() {
            let target = self.stylesheets.get_mut(scope);
            for (category, paths) in categories {
                target.entry(category).or_default().extend(paths);
            }
        }
    }

    // ------------------------------------------------------------------------
    // queries
    // ------------------------------------------------------------------------

    /// Whether anything would be resolved for `scope`.
    ///
    /// True if any category under `scope` has a path, or if `identifier`
    /// is given and has at least one ad-hoc style.
    pub fn has_styles(&self, scope: impl IntoScope, identifier: Option<&str>) -> Result<bool> {
        let scope = scope.into_scope()?;
        let has_sheets = self
            .stylesheets
            .get(scope)
            .values()
            .any(|paths| !paths.is_empty());
        let has_own = identifier.is_some_and(|id| !self.styles_for(scope, id).is_empty());
        Ok(has_sheets || has_own)
    }

    /// Whether `identifier` has any scripts under `scope`.
    pub fn has_scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<bool> {
        let scope = scope.into_scope()?;
        Ok(!self.scripts_for(scope, identifier).is_empty())
    }

    /// Ad-hoc styles of `identifier`, in registration order.
    pub fn styles(&self, scope: impl IntoScope, identifier: &str) -> Result<&[String]> {
        Ok(self.styles_for(scope.into_scope()?, identifier))
    }

    /// Stylesheet paths of `category`; empty when the category is unknown.
    pub fn stylesheets(&self, scope: impl IntoScope, category: &str) -> Result<&[PathBuf]> {
        Ok(self.stylesheets_for(scope.into_scope()?, category))
    }

    /// Categories under `scope`, in discovery order.
    pub fn categories(&self, scope: impl IntoScope) -> Result<Vec<&str>> {
        let scope = scope.into_scope()?;
        Ok(self.stylesheets.get(scope).keys().map(String::as_str).collect())
    }

    /// Script entries of `identifier`, in registration order.
    pub fn scripts(&self, scope: impl IntoScope, identifier: &str) -> Result<&[ScriptEntry]> {
        Ok(self.scripts_for(scope.into_scope()?, identifier))
    }

    // Typed-scope accessors used by the resolvers.

    pub(crate) fn styles_for(&self, scope: Scope, identifier: &str) -> &[String] {
        self.styles
            .get(scope)
            .get(identifier)
            .map_or(&[], Vec::as_slice)
    }

    pub(crate) fn stylesheets_for(&self, scope: Scope, category: &str) -> &[PathBuf] {
        self.stylesheets
            .get(scope)
            .get(category)
            .map_or(&[], Vec::as_slice)
    }

    pub(crate) fn category_map(&self, scope: Scope) -> &CategoryMap {
        self.stylesheets.get(scope)
    }

    pub(crate) fn scripts_for(&self, scope: Scope, identifier: &str) -> &[ScriptEntry] {
        self.scripts
            .get(scope)
            .get(identifier)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of stylesheet paths across both scopes.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets
            .iter()
            .flat_map(|(_, categories)| categories.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether `path` is registered under any scope or category.
    pub fn contains_stylesheet(&self, path: &Path) -> bool {
        self.stylesheets
            .iter()
            .flat_map(|(_, categories)| categories.values())
            .any(|paths| paths.iter().any(|p| p == path))
    }
}
