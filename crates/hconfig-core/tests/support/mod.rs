#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use hconfig_core::layout::StoreLayout;
use tempfile::TempDir;

pub const ACME_SHARED: &str = r#"{
    "projectname": "acme",
    "kinstausername": "acme-user",
    "kinstaip": "35.10.20.30",
    "kinstaport-staging": "51234",
    "kinstaport-live": "51235",
    "themename": "modern",
    "imagesize-facade": [800, 600],
    "imagesize-floorplan": [1200, 900],
    "imagesize-lot": [400, 300],
    "integrator": true,
    "integratorurl-staging": "https://staging.acme.example.com",
    "integratorurl-live": "https://acme.example.com"
}"#;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create_dir_all should succeed in test temp dirs");
    }
    fs::write(path, content).expect("write should succeed in test temp dirs");
}

/// A temp root with an empty config directory.
pub fn empty_root() -> (TempDir, StoreLayout) {
    let temp = TempDir::new().expect("tempdir should succeed");
    let layout = StoreLayout::new(temp.path());
    fs::create_dir_all(layout.config_root()).expect("create config root");
    (temp, layout)
}

pub fn add_project(layout: &StoreLayout, name: &str, shared: &str) -> PathBuf {
    let path = layout.shared_path(name);
    write_file(&path, shared);
    path
}

pub fn add_override(layout: &StoreLayout, name: &str, content: &str) -> PathBuf {
    let path = layout.override_path(name);
    write_file(&path, content);
    path
}

/// Log output captured from a closure run under a warn-level subscriber.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = CapturedLog::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buf.contents())
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("log output should be UTF-8")
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
