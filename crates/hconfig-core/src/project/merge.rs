//! Shared-then-override merge.
//!
//! The override fragment is an overlay: every field it carries with a
//! non-empty value replaces the matching field of the shared config. New
//! override keys need one line here.

use super::schema::{OverrideFragment, ProjectConfig, SharedFragment};

/// Merge a project's fragments.
///
/// `project` is the directory name the fragments were read from. It fills in
/// an empty `projectname` on the shared side, so the merged name always
/// matches the storage layout unless the override says otherwise.
pub fn merge_fragments(
    project: &str,
    shared: SharedFragment,
    overlay: Option<OverrideFragment>,
) -> ProjectConfig {
    let mut merged = ProjectConfig::from(shared);
    if merged.project_name.is_empty() {
        merged.project_name = project.to_string();
    } else if merged.project_name != project {
        tracing::warn!(
            directory = %project,
            shared = %merged.project_name,
            "project.json names a different project than its directory"
        );
    }

    if let Some(overlay) = overlay {
        apply_override(&mut merged, overlay);
    }

    merged
}

/// Apply every non-empty overlay field onto `base`.
pub fn apply_override(base: &mut ProjectConfig, overlay: OverrideFragment) {
    if let Some(name) = non_empty(overlay.project_name) {
        if name != base.project_name {
            tracing::warn!(
                shared = %base.project_name,
                local = %name,
                "local.json names a different project; using the local name"
            );
        }
        base.project_name = name;
    }
    if let Some(path) = non_empty(overlay.local_path) {
        base.local_path = path;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ImageSize;

    fn shared() -> SharedFragment {
        SharedFragment {
            project_name: "acme".to_string(),
            theme_name: "modern".to_string(),
            image_size_facade: ImageSize(800, 600),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_without_override() {
        let merged = merge_fragments("acme", shared(), None);
        assert_eq!(merged.project_name, "acme");
        assert_eq!(merged.theme_name, "modern");
        assert_eq!(merged.local_path, "");
    }

    #[test]
    fn test_override_sets_local_path() {
        let overlay = OverrideFragment::new("acme", "/home/u/acme/");
        let merged = merge_fragments("acme", shared(), Some(overlay));
        assert_eq!(merged.local_path, "/home/u/acme/");
        assert_eq!(merged.theme_name, "modern");
        assert_eq!(merged.image_size_facade, ImageSize(800, 600));
    }

    #[test]
    fn test_empty_override_fields_keep_base() {
        let overlay = OverrideFragment {
            project_name: Some(String::new()),
            local_path: None,
        };
        let merged = merge_fragments("acme", shared(), Some(overlay));
        assert_eq!(merged.project_name, "acme");
        assert_eq!(merged.local_path, "");
    }

    #[test]
    fn test_override_name_wins() {
        let overlay = OverrideFragment::new("acme-renamed", "/srv/acme/");
        let merged = merge_fragments("acme", shared(), Some(overlay));
        assert_eq!(merged.project_name, "acme-renamed");
    }

    #[test]
    fn test_empty_shared_name_uses_directory() {
        let merged = merge_fragments("beta", SharedFragment::default(), None);
        assert_eq!(merged.project_name, "beta");
    }
}
