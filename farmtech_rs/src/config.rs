//! Configuration file support for farmtech.
//!
//! Loads optional `.farmtech/config.toml` from the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::catalog::ContentCatalog;
use crate::error::Result;
use crate::site::SiteSettings;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub site: SiteSettings,
    /// Custom catalog file. Relative paths resolve against the config file's
    /// directory.
    pub catalog: Option<PathBuf>,
}

impl PortalConfig {
    /// Load config from `.farmtech/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".farmtech").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if let (Some(catalog), Some(base)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
        config
    }

    /// The configured catalog, or `None` when the built-in one applies.
    ///
    /// A configured catalog that cannot be loaded is an error, never a
    /// silent fallback.
    pub fn custom_catalog(&self) -> Result<Option<ContentCatalog>> {
        self.catalog
            .as_deref()
            .map(ContentCatalog::load)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) -> PathBuf {
        let dir = root.join(".farmtech");
        std::fs::create_dir_all(&dir).expect("create .farmtech");
        let path = dir.join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{}", body).expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.site, SiteSettings::default());
        assert!(config.catalog.is_none());
        assert!(config.custom_catalog().expect("no catalog").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = PortalConfig::load(temp.path());
        assert_eq!(config.site.title, "Farm Tech Connect");
    }

    #[test]
    fn test_load_site_overrides() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
[site]
title = "Kisan Connect"
copyright_year = 2025
"#,
        );

        let config = PortalConfig::load(temp.path());
        assert_eq!(config.site.title, "Kisan Connect");
        assert_eq!(config.site.copyright_year, 2025);
        // unspecified keys keep their defaults
        assert_eq!(config.site.tagline, SiteSettings::default().tagline);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[site\ntitle = ");

        let config = PortalConfig::load(temp.path());
        assert_eq!(config.site, SiteSettings::default());
    }

    #[test]
    fn test_relative_catalog_resolves_next_to_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), "catalog = \"catalog.toml\"");

        let config = PortalConfig::load_from_path(&path);
        assert_eq!(
            config.catalog,
            Some(temp.path().join(".farmtech").join("catalog.toml"))
        );
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "catalog = \"missing.toml\"");

        let config = PortalConfig::load(temp.path());
        assert!(matches!(
            config.custom_catalog(),
            Err(PortalError::Io { .. })
        ));
    }

    #[test]
    fn test_custom_catalog_loads() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), "catalog = \"catalog.toml\"");
        std::fs::write(
            path.with_file_name("catalog.toml"),
            ContentCatalog::builtin()
                .to_toml_string()
                .expect("serialize builtin"),
        )
        .expect("write catalog");

        let config = PortalConfig::load(temp.path());
        let catalog = config.custom_catalog().expect("load").expect("configured");
        assert_eq!(&catalog, ContentCatalog::builtin());
    }
}
