//! Project store: enumerates projects and resolves their merged config.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};
use crate::layout::StoreLayout;
use crate::project::{OverrideFragment, ProjectConfig, SharedFragment, merge_fragments};
use crate::select::{ProjectSelector, choose_project};

/// Read side of the project configuration tree.
///
/// Nothing is cached: every call goes back to the filesystem.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    layout: StoreLayout,
}

impl ProjectStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Names of the project directories under the config root.
    ///
    /// Returned in directory-listing order; sort if you need a stable order.
    pub fn list_projects(&self) -> StoreResult<Vec<String>> {
        let config_root = self.layout.config_root();
        let unavailable = |source: io::Error| StoreError::StoreUnavailable {
            path: config_root.clone(),
            source,
        };

        let mut projects = Vec::new();
        for entry in fs::read_dir(&config_root).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            if !entry.file_type().map_err(unavailable)?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => projects.push(name),
                Err(raw) => {
                    tracing::debug!(name = ?raw, "skipping project directory with a non UTF-8 name");
                }
            }
        }

        Ok(projects)
    }

    /// Resolve the merged config for `name`, prompting through `selector`
    /// when `name` is empty.
    pub fn resolve_project(
        &self,
        name: &str,
        selector: &mut dyn ProjectSelector,
    ) -> StoreResult<ProjectConfig> {
        let project = if name.is_empty() {
            self.select_project(selector)?
        } else {
            name.to_string()
        };

        let shared = self.load_shared(&project)?;
        let overlay = self.load_override(&project)?;
        if overlay.is_none() {
            tracing::warn!(
                project = %project,
                "cannot find local.json config file; to create one run 'hconfig setlocal' or 'hconfig setlocalwd'"
            );
        }

        Ok(merge_fragments(&project, shared, overlay))
    }

    /// Prompt for one of the known projects.
    pub fn select_project(&self, selector: &mut dyn ProjectSelector) -> StoreResult<String> {
        let projects = self.list_projects()?;
        choose_project(selector, &projects)
    }

    /// Load `project.json` for `project`.
    pub fn load_shared(&self, project: &str) -> StoreResult<SharedFragment> {
        let path = self.layout.shared_path(project);
        let not_found = |source: io::Error| StoreError::ProjectNotFound {
            project: project.to_string(),
            path: path.clone(),
            source,
        };
        StoreLayout::check_project_name(project).map_err(not_found)?;
        tracing::debug!(path = %path.display(), "reading shared fragment");

        let content = fs::read_to_string(&path).map_err(not_found)?;
        parse_fragment(&path, &content)
    }

    /// Load `local.json` for `project`; `Ok(None)` when it does not exist.
    pub fn load_override(&self, project: &str) -> StoreResult<Option<OverrideFragment>> {
        let path = self.layout.override_path(project);
        StoreLayout::check_project_name(project).map_err(|source| {
            StoreError::ProjectNotFound {
                project: project.to_string(),
                path: path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "reading override fragment");

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::MalformedConfig {
                    path,
                    source: serde_json::Error::io(err),
                });
            }
        };
        parse_fragment(&path, &content).map(Some)
    }
}

fn parse_fragment<T: DeserializeOwned>(path: &Path, content: &str) -> StoreResult<T> {
    serde_json::from_str(content).map_err(|source| StoreError::MalformedConfig {
        path: path.to_path_buf(),
        source,
    })
}
