//! Tola assets - scoped stylesheet and script aggregation for static site builds.
//!
//! Page and template renders register CSS snippets, stylesheet paths and
//! scripts under a delivery scope (`critical` or `async`). At render time the
//! registry is resolved into one merged stylesheet per request, or a list of
//! script includes.
//!
//! ```text
//! stylesheet dirs ──scan──▶ AssetRegistry ◀── add_style / add_stylesheet / add_script
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!         StyleResolver                  render_scripts
//!   (order, read, join, compress)     (dedup, <script> tags)
//! ```

pub mod logger;

pub mod asset;
pub mod bundler;
pub mod config;
pub mod core;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod utils;

pub use asset::{Compressor, FsReader, IdentityCompressor, LightningCompressor, SourceReader};
pub use bundler::{AssetBundler, SharedBundler};
pub use config::AssetsConfig;
pub use crate::core::{BuildMode, DEFAULT_CATEGORY, IntoScope, Scope};
pub use error::{AssetError, Result};
pub use registry::{AssetRegistry, AttrValue, CategoryTree, ScriptEntry};
pub use resolve::{StyleResolver, render_scripts};
