//! Core types - pure abstractions shared across the codebase.

mod category;
mod driver;
mod scope;

pub use category::{
    DEFAULT_CATEGORY, category_from_dir, category_from_file, extension_of, normalize_extension,
};
pub use driver::{BuildMode, MODE_ENV_VAR, PRODUCTION_MARKER};
pub use scope::{IntoScope, PerScope, Scope};
