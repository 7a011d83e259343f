//! Local override writer for `local.json`.

use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::layout::StoreLayout;
use crate::project::OverrideFragment;
use crate::select::ProjectSelector;
use crate::store::ProjectStore;

/// Writes override fragments. Every write replaces the whole file.
#[derive(Debug, Clone)]
pub struct LocalOverrideWriter {
    layout: StoreLayout,
}

impl LocalOverrideWriter {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    /// Record `local_path` as the codebase location for `project_name`.
    ///
    /// `project_name` must be a single directory name, and that directory must
    /// already exist; it is never created here.
    /// Returns the path of the written file.
    pub fn set_local(&self, project_name: &str, local_path: &str) -> StoreResult<PathBuf> {
        if project_name.is_empty() {
            return Err(StoreError::NoProjectSelected);
        }

        let path = self.layout.override_path(project_name);
        StoreLayout::check_project_name(project_name).map_err(|source| {
            StoreError::WriteFailed {
                path: path.clone(),
                source,
            }
        })?;
        let fragment = OverrideFragment::new(project_name, local_path);
        let mut content = serde_json::to_string_pretty(&fragment).map_err(|err| {
            StoreError::WriteFailed {
                path: path.clone(),
                source: err.into(),
            }
        })?;
        content.push('\n');

        fs::write(&path, content).map_err(|source| StoreError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            project = %project_name,
            local_path = %local_path,
            path = %path.display(),
            "local config file created"
        );
        Ok(path)
    }

    /// Record the process working directory for a project picked through
    /// `selector`. Returns the chosen project and the written path.
    pub fn set_local_from_working_directory(
        &self,
        store: &ProjectStore,
        selector: &mut dyn ProjectSelector,
    ) -> StoreResult<(String, PathBuf)> {
        let cwd = std::env::current_dir()
            .map_err(|source| StoreError::WorkingDirectoryUnavailable { source })?;
        self.set_local_from_dir(&cwd, store, selector)
    }

    /// Like [`Self::set_local_from_working_directory`] with an explicit directory.
    pub fn set_local_from_dir(
        &self,
        dir: &Path,
        store: &ProjectStore,
        selector: &mut dyn ProjectSelector,
    ) -> StoreResult<(String, PathBuf)> {
        let local_path = with_trailing_separator(dir);
        let project = store.select_project(selector)?;
        let written = self.set_local(&project, &local_path)?;
        Ok((project, written))
    }
}

fn with_trailing_separator(dir: &Path) -> String {
    let mut path = dir.to_string_lossy().into_owned();
    if !path.ends_with(MAIN_SEPARATOR) {
        path.push(MAIN_SEPARATOR);
    }
    path
}
