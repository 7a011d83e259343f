//! Interactive project selection as an injected capability.
//!
//! The core never talks to a terminal. Frontends supply a [`ProjectSelector`]
//! (the CLI uses a dialoguer prompt); tests supply scripted ones.

use std::io;

use crate::error::{StoreError, StoreResult};

/// Picks one project name out of a list of options.
pub trait ProjectSelector {
    /// Present `options` and return the chosen one, or `None` if the user
    /// cancelled. `options` is never empty.
    fn select_one(&mut self, prompt: &str, options: &[String]) -> io::Result<Option<String>>;
}

impl<F> ProjectSelector for F
where
    F: FnMut(&str, &[String]) -> io::Result<Option<String>>,
{
    fn select_one(&mut self, prompt: &str, options: &[String]) -> io::Result<Option<String>> {
        self(prompt, options)
    }
}

/// Selector for contexts with no terminal: never picks anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl ProjectSelector for NoSelection {
    fn select_one(&mut self, _prompt: &str, _options: &[String]) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Run `selector` over `projects`, treating an empty list, a cancelled prompt,
/// or a blank answer as [`StoreError::NoProjectSelected`].
pub fn choose_project(
    selector: &mut dyn ProjectSelector,
    projects: &[String],
) -> StoreResult<String> {
    if projects.is_empty() {
        return Err(StoreError::NoProjectSelected);
    }

    let choice = selector
        .select_one("Select project", projects)
        .map_err(|source| StoreError::SelectionFailed { source })?;

    match choice {
        Some(name) if !name.is_empty() => {
            tracing::debug!(project = %name, "project selected");
            Ok(name)
        }
        _ => Err(StoreError::NoProjectSelected),
    }
}
