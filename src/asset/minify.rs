//! Stylesheet compression.
//!
//! Production builds minify with lightningcss; development builds run the
//! same parser but pretty-print, so output stays readable.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::core::BuildMode;
use crate::error::{AssetError, Result};

/// Final text transform applied to every resolved stylesheet.
pub trait Compressor: Send + Sync {
    fn compress(&self, css: &str, mode: BuildMode) -> Result<String>;
}

/// lightningcss-backed compressor.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightningCompressor;

impl Compressor for LightningCompressor {
    fn compress(&self, css: &str, mode: BuildMode) -> Result<String> {
        if mode.minify {
            minify_css(css)
        } else {
            format_css(css)
        }
    }
}

/// Returns input unchanged, whatever the mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityCompressor;

impl Compressor for IdentityCompressor {
    #[inline]
    fn compress(&self, css: &str, _mode: BuildMode) -> Result<String> {
        Ok(css.to_string())
    }
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Result<String> {
    print_css(source, true)
}

/// Reformat CSS source code for readability.
pub fn format_css(source: &str) -> Result<String> {
    print_css(source, false)
}

fn print_css(source: &str, minify: bool) -> Result<String> {
    let mut stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| AssetError::Compress(e.to_string()))?;
    if minify {
        stylesheet
            .minify(MinifyOptions::default())
            .map_err(|e| AssetError::Compress(e.to_string()))?;
    }
    let result = stylesheet
        .to_css(PrinterOptions {
            minify,
            ..PrinterOptions::default()
        })
        .map_err(|e| AssetError::Compress(e.to_string()))?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let css = minify_css("body {\n  color: red;\n}\n\np { margin: 0; }").unwrap();
        assert_eq!(css, "body{color:red}p{margin:0}");
    }

    #[test]
    fn test_format_css_keeps_rules_readable() {
        let css = format_css("body{color:red}").unwrap();
        assert!(css.contains("body {"));
        assert!(css.contains("color: red;"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(minify_css("").unwrap(), "");
        assert_eq!(
            LightningCompressor.compress("", BuildMode::DEVELOPMENT).unwrap().trim(),
            ""
        );
    }

    #[test]
    fn test_mode_selects_output() {
        let css = "a { color: blue; }";
        let prod = LightningCompressor.compress(css, BuildMode::PRODUCTION).unwrap();
        let dev = LightningCompressor.compress(css, BuildMode::DEVELOPMENT).unwrap();
        assert!(!prod.contains(' '));
        assert!(prod.starts_with("a{color:"));
        assert!(dev.len() > prod.len());
    }

    #[test]
    fn test_identity() {
        let css = "body{color:red}\np{margin:0}";
        assert_eq!(
            IdentityCompressor.compress(css, BuildMode::PRODUCTION).unwrap(),
            css
        );
    }
}
