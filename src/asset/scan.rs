//! Category-tree scanning (reads the filesystem, touches no registry state).
//!
//! Maps a stylesheet directory onto categories and scopes:
//!
//! ```text
//! styles/
//! ├── reset.css                 -> async["reset"]
//! ├── fonts-critical.css        -> critical["fonts-critical"]
//! ├── Layout/
//! │   ├── grid.css              -> async["layout"]
//! │   ├── header-critical.css   -> critical["layout"]
//! │   └── print/
//! │       └── page.css          -> async["layout"]
//! └── notes.txt                 (skipped: extension not allowed)
//! ```
//!
//! A top-level directory fixes the category (its lower-cased name) for
//! everything beneath it. A top-level file is its own category.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::core::{Scope, category_from_dir, category_from_file, extension_of, normalize_extension};
use crate::error::{AssetError, Result};
use crate::registry::CategoryTree;

/// Scan `root` for stylesheets with one of the `extensions`.
///
/// Every category encountered exists in both scopes of the result, possibly
/// with an empty path list. Directory entries are visited sorted by name.
/// Extensions compare case-insensitively (`A.CSS` matches `.css`).
///
/// Symlinked directories are never descended into. A symlinked file is
/// registered only when its target is a regular file; dangling links are
/// skipped.
///
/// Fails if `root` is missing, is not a directory, or any directory below
/// it cannot be listed.
pub fn scan_stylesheets(root: &Path, extensions: &[String]) -> Result<CategoryTree> {
    let metadata = fs::metadata(root).map_err(|source| scan_error(root, source))?;
    if !metadata.is_dir() {
        return Err(scan_error(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let allowed: FxHashSet<String> = extensions.iter().map(|e| normalize_extension(e)).collect();
    let mut tree = CategoryTree::default();

    // (directory, category inherited from the top-level directory above it)
    let mut pending: Vec<(PathBuf, Option<String>)> = vec![(root.to_path_buf(), None)];

    while let Some((dir, inherited)) = pending.pop() {
        let mut subdirs = Vec::new();

        for (path, kind) in list_dir(&dir)? {
            if kind.is_dir() {
                let category = match &inherited {
                    Some(category) => category.clone(),
                    None => {
                        let category = category_from_dir(&path);
                        ensure_category(&mut tree, &category);
                        category
                    }
                };
                subdirs.push((path, Some(category)));
                continue;
            }

            if !extension_of(&path).is_some_and(|ext| allowed.contains(&ext))
                || !is_regular_file(&path, kind)
            {
                continue;
            }

            let category = match &inherited {
                Some(category) => category.clone(),
                None => category_from_file(&path),
            };
            let scope = path
                .file_name()
                .map_or(Scope::Async, |name| Scope::from_file_name(&name.to_string_lossy()));

            ensure_category(&mut tree, &category);
            tree.get_mut(scope).entry(category).or_default().push(path);
        }

        // Reversed so subdirectories pop in listing order (depth-first)
        pending.extend(subdirs.into_iter().rev());
    }

    crate::debug!("scan"; "{}: {} categories", root.display(), tree.get(Scope::Async).len());
    Ok(tree)
}

/// Register `category` in both scopes, keeping discovery order aligned.
fn ensure_category(tree: &mut CategoryTree, category: &str) {
    for scope in Scope::ALL {
        let categories = tree.get_mut(scope);
        if !categories.contains_key(category) {
            categories.insert(category.to_string(), Vec::new());
        }
    }
}

/// Entries of `dir` with their own (unfollowed) file type, sorted by file name.
fn list_dir(dir: &Path) -> Result<Vec<(PathBuf, fs::FileType)>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|source| scan_error(dir, source))?
        .map(|entry| -> io::Result<_> {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?))
        })
        .collect::<io::Result<Vec<_>>>()
        .map_err(|source| scan_error(dir, source))?;
    entries.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Regular files qualify. A symlink qualifies only if it resolves to one.
fn is_regular_file(path: &Path, kind: fs::FileType) -> bool {
    if kind.is_symlink() {
        return fs::metadata(path).is_ok_and(|meta| meta.is_file());
    }
    kind.is_file()
}

fn scan_error(path: &Path, source: io::Error) -> AssetError {
    AssetError::DirectoryScan {
        path: path.to_path_buf(),
        source,
    }
}
