//! Fragment and merged configuration types.
//!
//! Key names follow the shared configuration repository, which predates this
//! tool and uses lowercase, hyphenated keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image dimensions, stored as a two-element `[width, height]` array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize(pub u32, pub u32);

impl ImageSize {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.0, self.1)
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self(width, height)
    }
}

/// The checked-in `project.json` for one project.
///
/// Missing keys fall back to their defaults; a key holding the wrong JSON type
/// is a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SharedFragment {
    #[serde(rename = "projectname")]
    pub project_name: String,
    #[serde(rename = "kinstausername")]
    pub host_user_name: String,
    #[serde(rename = "kinstaip")]
    pub host_address: String,
    #[serde(rename = "kinstaport-staging")]
    pub host_port_staging: String,
    #[serde(rename = "kinstaport-live")]
    pub host_port_live: String,
    #[serde(rename = "themename")]
    pub theme_name: String,
    #[serde(rename = "imagesize-facade")]
    pub image_size_facade: ImageSize,
    #[serde(rename = "imagesize-floorplan")]
    pub image_size_floorplan: ImageSize,
    #[serde(rename = "imagesize-lot")]
    pub image_size_lot: ImageSize,
    #[serde(rename = "integrator")]
    pub integrator_enabled: bool,
    #[serde(rename = "integratorurl-staging")]
    pub integrator_url_staging: String,
    #[serde(rename = "integratorurl-live")]
    pub integrator_url_live: String,
}

/// The user-local `local.json` for one project.
///
/// Every field is optional on read so that a partially written or extended
/// override still merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideFragment {
    #[serde(
        rename = "projectname",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub project_name: Option<String>,
    #[serde(rename = "localpath", default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl OverrideFragment {
    pub fn new(project_name: impl Into<String>, local_path: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            local_path: Some(local_path.into()),
        }
    }
}

/// Merged view of a project: the shared fragment with its override applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    #[serde(rename = "projectname")]
    pub project_name: String,
    #[serde(rename = "kinstausername")]
    pub host_user_name: String,
    #[serde(rename = "kinstaip")]
    pub host_address: String,
    #[serde(rename = "kinstaport-staging")]
    pub host_port_staging: String,
    #[serde(rename = "kinstaport-live")]
    pub host_port_live: String,
    #[serde(rename = "themename")]
    pub theme_name: String,
    #[serde(rename = "imagesize-facade")]
    pub image_size_facade: ImageSize,
    #[serde(rename = "imagesize-floorplan")]
    pub image_size_floorplan: ImageSize,
    #[serde(rename = "imagesize-lot")]
    pub image_size_lot: ImageSize,
    #[serde(rename = "integrator")]
    pub integrator_enabled: bool,
    #[serde(rename = "integratorurl-staging")]
    pub integrator_url_staging: String,
    #[serde(rename = "integratorurl-live")]
    pub integrator_url_live: String,
    /// Path to the developer's local checkout; empty until an override exists.
    #[serde(rename = "localpath")]
    pub local_path: String,
}

impl From<SharedFragment> for ProjectConfig {
    fn from(shared: SharedFragment) -> Self {
        Self {
            project_name: shared.project_name,
            host_user_name: shared.host_user_name,
            host_address: shared.host_address,
            host_port_staging: shared.host_port_staging,
            host_port_live: shared.host_port_live,
            theme_name: shared.theme_name,
            image_size_facade: shared.image_size_facade,
            image_size_floorplan: shared.image_size_floorplan,
            image_size_lot: shared.image_size_lot,
            integrator_enabled: shared.integrator_enabled,
            integrator_url_staging: shared.integrator_url_staging,
            integrator_url_live: shared.integrator_url_live,
            local_path: String::new(),
        }
    }
}
