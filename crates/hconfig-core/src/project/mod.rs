//! Project configuration model
//!
//! A project's configuration comes from two fragments:
//! - Shared: `project.json`, distributed through the shared repository
//! - Override: `local.json`, written on the developer's machine
//!
//! The merged [`ProjectConfig`] is the shared fragment with the override on top.

pub mod merge;
pub mod render;
pub mod schema;

pub use merge::{apply_override, merge_fragments};
pub use render::{render_json, render_text};
pub use schema::{ImageSize, OverrideFragment, ProjectConfig, SharedFragment};
