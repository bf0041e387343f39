//! Stylesheet sources: directory scanning, reading and compression.

mod minify;
mod read;
mod scan;

pub use minify::{Compressor, IdentityCompressor, LightningCompressor, format_css, minify_css};
pub use read::{FsReader, SourceReader};
pub use scan::scan_stylesheets;
