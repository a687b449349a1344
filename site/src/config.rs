//! Configuration file support.
//!
//! Loads optional `axionix.toml` from the project root.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::PageAssets;

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "axionix.toml";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Content file replacing the built-in Axionix content (TOML or JSON)
    pub content: Option<PathBuf>,
    /// Directory `render` writes `index.html` into
    pub output_dir: PathBuf,
    /// Logo, stylesheet, animation and form-action settings
    pub assets: PageAssets,
    /// Contact submission settings
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: None,
            output_dir: PathBuf::from("dist"),
            assets: PageAssets::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Where validated contact requests go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Log and drop
    #[default]
    Discard,
    /// Prefilled `mailto:` draft to the contact email
    Mailto,
}

/// Contact form settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Transport used by `axionix submit`
    pub transport: TransportKind,
    /// Upper bound for one delivery attempt, in milliseconds
    pub submit_timeout_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            submit_timeout_ms: 10_000,
        }
    }
}

impl ContactConfig {
    /// [`Self::submit_timeout_ms`] as a [`Duration`].
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

impl SiteConfig {
    /// Load config from `axionix.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE_NAME))
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

        // Relative content paths are relative to the config file, not the cwd
        if let (Some(content), Some(dir)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.content.is_none());
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.contact.transport, TransportKind::Discard);
        assert_eq!(config.contact.submit_timeout(), Duration::from_secs(10));
        assert!(config.assets.animations);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert!(config.content.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
content = "content/site.toml"
output_dir = "public"

[assets]
logo_path = "/img/logo.svg"
animations = false

[contact]
transport = "mailto"
submit_timeout_ms = 2500
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(
            config.content,
            Some(temp.path().join("content/site.toml"))
        );
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.assets.logo_path, "/img/logo.svg");
        assert!(!config.assets.animations);
        assert_eq!(config.contact.transport, TransportKind::Mailto);
        assert_eq!(config.contact.submit_timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[contact]\ntransport = \"carrier-pigeon\"\n")
            .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.contact.transport, TransportKind::Discard);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::File::create(temp.path().join(CONFIG_FILE_NAME)).expect("create empty config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }
}
