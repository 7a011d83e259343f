//! Git operations for the shared configuration repository.
//!
//! Network work goes through the `git` binary so the user's credentials and
//! SSH setup apply; the resulting checkout is inspected with `git2`.

mod sync;

pub use sync::{RefreshAction, RefreshReport, RepoSync, head_commit};
