//! Build mode selection for production/development output.

/// Environment variable consulted by [`BuildMode::from_env`].
pub const MODE_ENV_VAR: &str = "ASSETS_ENV";

/// Value of [`MODE_ENV_VAR`] that selects production mode.
pub const PRODUCTION_MARKER: &str = "production";

/// Build mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// Whether stylesheets are minified (otherwise pretty-printed).
    pub minify: bool,
}

impl BuildMode {
    /// Production mode: aggressive minification.
    pub const PRODUCTION: Self = Self { minify: true };

    /// Development mode: reformatted for readability.
    pub const DEVELOPMENT: Self = Self { minify: false };

    /// Select the mode from [`MODE_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::from_marker(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    /// Production iff `value` equals [`PRODUCTION_MARKER`] exactly.
    pub fn from_marker(value: Option<&str>) -> Self {
        if value == Some(PRODUCTION_MARKER) {
            Self::PRODUCTION
        } else {
            Self::DEVELOPMENT
        }
    }

    #[inline]
    pub const fn is_dev(&self) -> bool {
        !self.minify
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::DEVELOPMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_marker() {
        assert_eq!(BuildMode::from_marker(Some("production")), BuildMode::PRODUCTION);
        assert_eq!(BuildMode::from_marker(Some("Production")), BuildMode::DEVELOPMENT);
        assert_eq!(BuildMode::from_marker(Some("dev")), BuildMode::DEVELOPMENT);
        assert_eq!(BuildMode::from_marker(None), BuildMode::DEVELOPMENT);
    }

    #[test]
    fn test_is_dev() {
        assert!(BuildMode::DEVELOPMENT.is_dev());
        assert!(!BuildMode::PRODUCTION.is_dev());
    }
}
