use derive_new::new;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(spec: FileSpec) {
    if let Some(parent) = spec.path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&spec.path, &spec.content).expect("Failed to write file");
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
