//! Error types for project configuration operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the core library.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced while resolving, writing, or refreshing project config.
#[derive(Error, Debug)]
pub enum StoreError {
    // === Store Errors ===
    /// The shared configuration root is missing or cannot be listed.
    #[error("Project config store unavailable at {}: {source} (run 'hconfig init' first)", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The shared fragment for a project is absent or unreadable.
    #[error("Project not found: {project} ({})", path.display())]
    ProjectNotFound {
        project: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fragment exists but does not match the expected schema.
    #[error("Malformed config file {}: {source}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Selection Errors ===
    /// No project name was given and none was chosen interactively.
    #[error("No project selected")]
    NoProjectSelected,

    /// The interactive prompt failed.
    #[error("Project selection failed: {source}")]
    SelectionFailed {
        #[source]
        source: io::Error,
    },

    // === Write Errors ===
    /// The override fragment could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined.
    #[error("Cannot determine working directory: {source}")]
    WorkingDirectoryUnavailable {
        #[source]
        source: io::Error,
    },

    // === Refresh Errors ===
    /// No repository URL is configured for the shared config.
    #[error("No project config repository configured (set 'repository' in hconfig.toml or HCONFIG_REPOSITORY)")]
    RepositoryNotConfigured,

    /// A git invocation exited unsuccessfully.
    #[error("git {command} failed: {stderr}")]
    RefreshFailed { command: String, stderr: String },

    /// Inspecting the local checkout failed.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    // === Settings Errors ===
    /// The tool's own settings file could not be read or parsed.
    #[error("Invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },
}

