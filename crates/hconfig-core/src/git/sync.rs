//! Clone-or-pull of the shared configuration repository.

use std::path::Path;
use std::process::Command;

use git2::Repository;

use crate::error::{StoreError, StoreResult};
use crate::layout::{CHECKOUT_DIR, StoreLayout};

const GIT_ENV_OVERRIDES: [&str; 4] = [
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_COMMON_DIR",
];

/// What a refresh did to the local checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshAction {
    /// No checkout existed; the repository was cloned.
    Cloned,
    /// An existing checkout was fast-forwarded.
    Updated,
}

/// Result of a successful refresh.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub action: RefreshAction,
    /// HEAD commit of the checkout after the refresh
    pub commit: String,
}

/// Keeps `<root>/project-config` in step with the shared repository.
#[derive(Debug, Clone)]
pub struct RepoSync {
    layout: StoreLayout,
    repository: Option<String>,
}

impl RepoSync {
    pub fn new(layout: StoreLayout, repository: Option<String>) -> Self {
        Self { layout, repository }
    }

    /// Clone the repository if there is no checkout yet, otherwise pull.
    pub fn refresh(&self) -> StoreResult<RefreshReport> {
        let checkout = self.layout.checkout_dir();

        let action = if checkout.join(".git").exists() {
            tracing::info!(path = %checkout.display(), "Checking for updates to project config repo...");
            Self::run_git(Some(&checkout), &["pull", "--ff-only"])?;
            RefreshAction::Updated
        } else {
            let url = self
                .repository
                .as_deref()
                .filter(|url| !url.is_empty())
                .ok_or(StoreError::RepositoryNotConfigured)?;
            let root = self.layout.root();
            std::fs::create_dir_all(root).map_err(|source| StoreError::WriteFailed {
                path: root.to_path_buf(),
                source,
            })?;

            tracing::info!(url = %url, "Cloning the project config repo...");
            Self::run_git(Some(root), &["clone", url, CHECKOUT_DIR])?;
            RefreshAction::Cloned
        };

        let commit = head_commit(&checkout)?;
        tracing::info!(commit = %commit, "project config is at {}", short_id(&commit));
        Ok(RefreshReport { action, commit })
    }

    /// Run a git command, failing with its stderr on a non-zero exit.
    fn run_git(cwd: Option<&Path>, args: &[&str]) -> StoreResult<()> {
        let mut cmd = Command::new("git");
        for key in GIT_ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let command = args.join(" ");
        tracing::debug!(command = %command, "running git");
        let output = cmd.output().map_err(|err| StoreError::RefreshFailed {
            command: command.clone(),
            stderr: err.to_string(),
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::RefreshFailed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Resolve HEAD of the checkout at `path` to a commit id.
pub fn head_commit(path: &Path) -> StoreResult<String> {
    let repo = Repository::open(path)?;
    let commit = repo.head()?.peel_to_commit()?;
    Ok(commit.id().to_string())
}

fn short_id(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "0123456");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_clone_without_repository_fails() {
        let temp = TempDir::new().unwrap();
        let sync = RepoSync::new(StoreLayout::new(temp.path()), None);

        let err = sync.refresh().unwrap_err();
        assert!(matches!(err, StoreError::RepositoryNotConfigured));
    }
}
