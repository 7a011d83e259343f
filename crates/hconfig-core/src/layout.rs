//! Storage layout for shared and override fragments.
//!
//! ```text
//! <root>/project-config/config/<project>/project.json
//! <root>/project-config/config/<project>/local.json
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory name of the shared configuration checkout under the root.
pub const CHECKOUT_DIR: &str = "project-config";
/// Directory inside the checkout holding one directory per project.
pub const CONFIG_DIR: &str = "config";
/// Shared fragment file name.
pub const SHARED_FILE: &str = "project.json";
/// Override fragment file name.
pub const OVERRIDE_FILE: &str = "local.json";
/// Default root directory name under the user's home.
pub const DEFAULT_ROOT_DIR: &str = ".hconfig";

/// Path construction for everything the tool reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at `~/.hconfig`, or `None` when no home directory is known.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_ROOT_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The git checkout of the shared configuration repository.
    pub fn checkout_dir(&self) -> PathBuf {
        self.root.join(CHECKOUT_DIR)
    }

    /// The directory whose subdirectories are the known projects.
    pub fn config_root(&self) -> PathBuf {
        self.checkout_dir().join(CONFIG_DIR)
    }

    /// Check that `project` names exactly one directory under the config root.
    pub fn check_project_name(project: &str) -> io::Result<()> {
        let mut components = Path::new(project).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if single_normal && !project.contains(['/', '\\']) {
            return Ok(());
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid project name '{project}'"),
        ))
    }

    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.config_root().join(project)
    }

    pub fn shared_path(&self, project: &str) -> PathBuf {
        self.project_dir(project).join(SHARED_FILE)
    }

    pub fn override_path(&self, project: &str) -> PathBuf {
        self.project_dir(project).join(OVERRIDE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_paths_live_under_project_dir() {
        let layout = StoreLayout::new("/home/u/.hconfig");

        assert_eq!(
            layout.config_root(),
            Path::new("/home/u/.hconfig/project-config/config")
        );
        assert_eq!(
            layout.shared_path("acme"),
            Path::new("/home/u/.hconfig/project-config/config/acme/project.json")
        );
        assert_eq!(
            layout.override_path("acme"),
            Path::new("/home/u/.hconfig/project-config/config/acme/local.json")
        );
    }

    #[test]
    fn project_names_must_be_single_directory() {
        assert!(StoreLayout::check_project_name("acme").is_ok());
        assert!(StoreLayout::check_project_name("acme.site-2").is_ok());

        for bad in ["", ".", "..", "a/b", "acme/..", "acme/", "/etc", "a\\b"] {
            let err = StoreLayout::check_project_name(bad).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{bad:?}");
        }
    }

    #[test]
    fn checkout_is_parent_of_config_root() {
        let layout = StoreLayout::new("/tmp/root");
        assert_eq!(layout.config_root().parent(), Some(layout.checkout_dir().as_path()));
    }
}
