//! Script rendering. Scripts are never compressed.

use rustc_hash::FxHashSet;

use crate::core::{IntoScope, Scope};
use crate::error::Result;
use crate::registry::AssetRegistry;

/// Render the scripts of `identifier` under `scope`.
///
/// - critical: one source URL per line, no tag wrapping
/// - async: one `<script ...></script>` include per line
///
/// Lines are deduplicated by rendered text. Empty when nothing is registered.
pub fn render_scripts(
    registry: &AssetRegistry,
    scope: impl IntoScope,
    identifier: &str,
) -> Result<String> {
    let scope = scope.into_scope()?;
    let entries = registry.scripts_for(scope, identifier);

    let mut seen = FxHashSet::default();
    let lines: Vec<String> = entries
        .iter()
        .filter_map(|entry| match scope {
            Scope::Critical => entry.src().map(str::to_string),
            Scope::Async => Some(entry.to_tag()),
        })
        .filter(|line| seen.insert(line.clone()))
        .collect();

    crate::debug!("scripts"; "{scope}/{identifier}: {} of {} entries", lines.len(), entries.len());
    Ok(lines.join("\n"))
}
