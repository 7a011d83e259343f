//! Terminal project picker.
//!
//! Implements the core's `ProjectSelector` with a dialoguer select prompt.

use std::io;

use dialoguer::{Select, theme::ColorfulTheme};

use hconfig_core::select::ProjectSelector;

/// Arrow-key project picker. Options are shown sorted.
#[derive(Default)]
pub struct PromptSelector {
    theme: ColorfulTheme,
}

impl ProjectSelector for PromptSelector {
    fn select_one(&mut self, prompt: &str, options: &[String]) -> io::Result<Option<String>> {
        let items = sorted_options(options);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| io::Error::other(err.to_string()))?;

        Ok(selection.map(|index| items[index].clone()))
    }
}

fn sorted_options(options: &[String]) -> Vec<String> {
    let mut items = options.to_vec();
    items.sort();
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_sorted() {
        let options = vec!["gamma".to_string(), "acme".to_string(), "beta".to_string()];
        assert_eq!(sorted_options(&options), vec!["acme", "beta", "gamma"]);
    }
}
