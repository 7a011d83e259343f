//! Tool settings from `hconfig.toml`.
//!
//! ```toml
//! repository = "git@example.org:team/project-config.git"
//! root = "/home/u/.hconfig"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::layout::StoreLayout;

/// Environment variable overriding the storage root.
pub const ROOT_ENV: &str = "HCONFIG_ROOT";
/// Environment variable overriding the shared repository URL.
pub const REPOSITORY_ENV: &str = "HCONFIG_REPOSITORY";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Git URL of the shared configuration repository.
    #[serde(default)]
    pub repository: Option<String>,
    /// Storage root; defaults to `~/.hconfig`.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl Settings {
    /// `<config_dir>/hconfig/hconfig.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hconfig").join("hconfig.toml"))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|err| StoreError::Settings {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> StoreResult<Self> {
        toml::from_str(content).map_err(|err| StoreError::Settings {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Apply `HCONFIG_ROOT` and `HCONFIG_REPOSITORY` on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var_os(ROOT_ENV).map(PathBuf::from),
            std::env::var(REPOSITORY_ENV).ok(),
        )
    }

    fn with_overrides(mut self, root: Option<PathBuf>, repository: Option<String>) -> Self {
        if let Some(root) = root.filter(|r| !r.as_os_str().is_empty()) {
            self.root = Some(root);
        }
        if let Some(repository) = repository.filter(|r| !r.is_empty()) {
            self.repository = Some(repository);
        }
        self
    }

    /// Resolve the storage layout, preferring `explicit_root` over settings.
    pub fn layout(&self, explicit_root: Option<&Path>) -> StoreResult<StoreLayout> {
        let root = explicit_root
            .map(Path::to_path_buf)
            .or_else(|| self.root.clone())
            .or_else(StoreLayout::default_root)
            .ok_or_else(|| StoreError::StoreUnavailable {
                path: PathBuf::from("~"),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine home directory",
                ),
            })?;
        Ok(StoreLayout::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml = r#"
repository = "git@example.org:team/project-config.git"
root = "/srv/hconfig"
"#;
        let settings = Settings::parse(Path::new("hconfig.toml"), toml).unwrap();
        assert_eq!(
            settings.repository.as_deref(),
            Some("git@example.org:team/project-config.git")
        );
        assert_eq!(settings.root, Some(PathBuf::from("/srv/hconfig")));
    }

    #[test]
    fn test_parse_empty_settings() {
        let settings = Settings::parse(Path::new("hconfig.toml"), "").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::parse(Path::new("hconfig.toml"), "repo = \"x\"");
        assert!(matches!(result, Err(StoreError::Settings { .. })));
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load(Path::new("/nonexistent/hconfig.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let settings = Settings {
            repository: Some("file-repo".to_string()),
            root: Some(PathBuf::from("/from/file")),
        }
        .with_overrides(Some(PathBuf::from("/from/env")), Some(String::new()));

        assert_eq!(settings.root, Some(PathBuf::from("/from/env")));
        assert_eq!(settings.repository.as_deref(), Some("file-repo"));
    }

    #[test]
    fn test_explicit_root_wins() {
        let settings = Settings {
            root: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };
        let layout = settings.layout(Some(Path::new("/explicit"))).unwrap();
        assert_eq!(layout.root(), Path::new("/explicit"));

        let layout = settings.layout(None).unwrap();
        assert_eq!(layout.root(), Path::new("/from/file"));
    }
}
