//! Style resolution: ordered stylesheets + ad-hoc styles, compressed.

use std::borrow::Cow;
use std::path::Path;

use crate::asset::{Compressor, SourceReader};
use crate::core::{BuildMode, IntoScope, Scope};
use crate::error::{AssetError, Result};
use crate::registry::AssetRegistry;

use super::order::order_categories;

/// Materializes the stylesheet for one scope/category/identifier request.
pub struct StyleResolver<'a> {
    registry: &'a AssetRegistry,
    reader: &'a dyn SourceReader,
    compressor: &'a dyn Compressor,
    sort_order: &'a [String],
    mode: BuildMode,
}

impl<'a> StyleResolver<'a> {
    pub fn new(
        registry: &'a AssetRegistry,
        reader: &'a dyn SourceReader,
        compressor: &'a dyn Compressor,
    ) -> Self {
        Self {
            registry,
            reader,
            compressor,
            sort_order: &[],
            mode: BuildMode::default(),
        }
    }

    /// Categories to place last, in this order.
    pub fn with_sort_order(mut self, sort_order: &'a [String]) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resolve and compress the stylesheet for a request.
    ///
    /// - `category`: only that category's paths (none if never registered);
    ///   otherwise every category of `scope` in sort order.
    /// - `identifier`: its ad-hoc styles are appended after the files.
    ///
    /// Blocks are joined with `\n`. One unreadable file fails the whole call.
    pub fn resolve(
        &self,
        scope: impl IntoScope,
        category: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<String> {
        let scope = scope.into_scope()?;
        let paths = self.selected_paths(scope, category);

        let mut blocks: Vec<Cow<'a, str>> = Vec::with_capacity(paths.len());
        for path in &paths {
            let bytes = self.reader.read(path).map_err(|source| AssetError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            blocks.push(Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()));
        }

        let styles = identifier.map_or(&[][..], |id| self.registry.styles_for(scope, id));
        blocks.extend(styles.iter().map(|style| Cow::Borrowed(style.as_str())));

        crate::debug!(
            "resolve";
            "{scope}: {} files, {} ad-hoc styles ({})",
            paths.len(),
            styles.len(),
            if self.mode.minify { "minify" } else { "format" }
        );

        self.compressor.compress(&blocks.join("\n"), self.mode)
    }

    /// Stylesheet paths for the request, in concatenation order.
    fn selected_paths(&self, scope: Scope, category: Option<&str>) -> Vec<&'a Path> {
        let registry = self.registry;
        match category {
            Some(category) => registry
                .stylesheets_for(scope, category)
                .iter()
                .map(|p| p.as_path())
                .collect(),
            None => {
                let categories = registry.category_map(scope);
                order_categories(categories.keys().map(String::as_str), self.sort_order)
                    .into_iter()
                    .flat_map(|category| registry.stylesheets_for(scope, category))
                    .map(|p| p.as_path())
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::IdentityCompressor;
    use rustc_hash::FxHashMap;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemoryReader(FxHashMap<PathBuf, Vec<u8>>);

    impl MemoryReader {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.0.insert(PathBuf::from(path), content.as_bytes().to_vec());
            self
        }
    }

    impl SourceReader for MemoryReader {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    /// Wraps output so tests can see the compressor ran, and in which mode.
    struct TaggingCompressor;

    impl Compressor for TaggingCompressor {
        fn compress(&self, css: &str, mode: BuildMode) -> Result<String> {
            Ok(format!("[{}]{css}", if mode.minify { "prod" } else { "dev" }))
        }
    }

    fn abc_reader() -> MemoryReader {
        MemoryReader::default()
            .with("a.css", "a{}")
            .with("b.css", "b{}")
            .with("c.css", "c{}")
    }

    fn abc_registry() -> AssetRegistry {
        let mut registry = AssetRegistry::new();
        registry.add_stylesheet("async", Some("A"), "a.css").unwrap();
        registry.add_stylesheet("async", Some("B"), "b.css").unwrap();
        registry.add_stylesheet("async", Some("C"), "c.css").unwrap();
        registry
    }

    #[test]
    fn test_sort_order_moves_listed_category_last() {
        let registry = abc_registry();
        let reader = abc_reader();
        let sort_order = vec!["B".to_string()];

        let css = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .with_sort_order(&sort_order)
            .resolve("async", None, None)
            .unwrap();

        assert_eq!(css, "a{}\nc{}\nb{}");
    }

    #[test]
    fn test_explicit_category() {
        let registry = abc_registry();
        let reader = abc_reader();
        let resolver = StyleResolver::new(&registry, &reader, &IdentityCompressor);

        assert_eq!(resolver.resolve("async", Some("C"), None).unwrap(), "c{}");
        assert_eq!(resolver.resolve("async", Some("missing"), None).unwrap(), "");
        assert_eq!(resolver.resolve("critical", Some("A"), None).unwrap(), "");
    }

    #[test]
    fn test_missing_category_still_appends_ad_hoc_styles() {
        let mut registry = AssetRegistry::new();
        registry.add_style("async", "post", "h1{}").unwrap();
        let reader = MemoryReader::default();

        let css = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("async", Some("missing"), Some("post"))
            .unwrap();
        assert_eq!(css, "h1{}");
    }

    #[test]
    fn test_stylesheets_then_ad_hoc_styles() {
        let mut registry = AssetRegistry::new();
        registry.add_stylesheet("critical", None, "base.css").unwrap();
        registry.add_style("critical", "home", "p{margin:0}").unwrap();
        registry.add_style("critical", "home", "p{margin:0}").unwrap();
        let reader = MemoryReader::default().with("base.css", "body{color:red}");

        let css = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("critical", None, Some("home"))
            .unwrap();

        assert_eq!(css, "body{color:red}\np{margin:0}");
        assert_eq!(css.matches("p{margin:0}").count(), 1);
    }

    #[test]
    fn test_ad_hoc_styles_only_for_given_identifier() {
        let mut registry = AssetRegistry::new();
        registry.add_style("async", "home", "a{}").unwrap();
        registry.add_style("async", "post", "b{}").unwrap();
        let reader = MemoryReader::default();
        let resolver = StyleResolver::new(&registry, &reader, &IdentityCompressor);

        assert_eq!(resolver.resolve("async", None, Some("post")).unwrap(), "b{}");
        assert_eq!(resolver.resolve("async", None, None).unwrap(), "");
    }

    #[test]
    fn test_duplicate_paths_are_read_twice() {
        let mut registry = AssetRegistry::new();
        registry.add_stylesheet("async", None, "a.css").unwrap();
        registry.add_stylesheet("async", None, "a.css").unwrap();
        let reader = abc_reader();

        let css = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("async", None, None)
            .unwrap();
        assert_eq!(css, "a{}\na{}");
    }

    #[test]
    fn test_unreadable_file_aborts() {
        let mut registry = abc_registry();
        registry.add_stylesheet("async", Some("A"), "gone.css").unwrap();
        let reader = abc_reader();

        let err = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("async", None, None)
            .unwrap_err();
        match err {
            AssetError::FileRead { path, source } => {
                assert_eq!(path, PathBuf::from("gone.css"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_scope() {
        let registry = abc_registry();
        let reader = abc_reader();
        let err = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("later", None, None)
            .unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedScope(_)));
    }

    #[test]
    fn test_compressor_receives_mode() {
        let registry = abc_registry();
        let reader = abc_reader();

        let dev = StyleResolver::new(&registry, &reader, &TaggingCompressor)
            .resolve(Scope::Async, Some("A"), None)
            .unwrap();
        let prod = StyleResolver::new(&registry, &reader, &TaggingCompressor)
            .with_mode(BuildMode::PRODUCTION)
            .resolve(Scope::Async, Some("A"), None)
            .unwrap();

        assert_eq!(dev, "[dev]a{}");
        assert_eq!(prod, "[prod]a{}");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut registry = AssetRegistry::new();
        registry.add_stylesheet("async", None, "bin.css").unwrap();
        let mut reader = MemoryReader::default();
        reader.0.insert(PathBuf::from("bin.css"), vec![b'a', 0xff, b'{', b'}']);

        let css = StyleResolver::new(&registry, &reader, &IdentityCompressor)
            .resolve("async", None, None)
            .unwrap();
        assert_eq!(css, "a\u{fffd}{}");
    }
}
