//! Human and machine renderings of a merged project config.

use std::io;

use serde::Serialize;

use super::schema::ProjectConfig;

/// Labelled, one-field-per-line block used by `hconfig info`.
pub fn render_text(config: &ProjectConfig) -> String {
    let rows: [(&str, String); 13] = [
        ("Project Name", config.project_name.clone()),
        ("Kinsta User Name", config.host_user_name.clone()),
        ("Kinsta IP", config.host_address.clone()),
        ("Kinsta Port - Staging", config.host_port_staging.clone()),
        ("Kinsta Port - Live", config.host_port_live.clone()),
        ("Theme Name", config.theme_name.clone()),
        (
            "Image Size(W x H) - Facade",
            config.image_size_facade.to_string(),
        ),
        (
            "Image Size(W x H) - Floorplan",
            config.image_size_floorplan.to_string(),
        ),
        ("Image Size(W x H) - Lot", config.image_size_lot.to_string()),
        ("Integrator", config.integrator_enabled.to_string()),
        (
            "Integrator Url - Staging",
            config.integrator_url_staging.clone(),
        ),
        ("Integrator Url - Live", config.integrator_url_live.clone()),
        ("Local Codebase", config.local_path.clone()),
    ];

    let mut out = String::from("\n");
    for (label, value) in rows {
        out.push_str(&format!("  {label}: {value}\n"));
    }
    out
}

/// JSON with four-space indentation, matching the repository's own files.
pub fn render_json(config: &ProjectConfig) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    buf.push(b'\n');
    String::from_utf8(buf)
        .map_err(|err| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
