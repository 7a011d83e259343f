//! hconfig Core Library
//!
//! Resolves per-project site configuration from a shared configuration
//! repository, merged with a user-local override that records where each
//! project's codebase lives.

pub mod error;
pub mod git;
pub mod layout;
pub mod local;
pub mod project;
pub mod select;
pub mod settings;
pub mod store;
