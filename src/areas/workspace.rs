use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The working directory.
///
/// The engine only manages regular files directly inside the working
/// directory; subdirectories are invisible to it. Files are keyed
/// everywhere by their absolute path string, formed by joining the file
/// name onto the workspace root without any normalization.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path for a command-line file name. Absolute names are taken
    /// as given, relative ones are joined onto the workspace root.
    pub fn resolve_path(&self, file_name: &str) -> PathBuf {
        let file_path = Path::new(file_name);

        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }

    /// The string form under which a file is keyed in blobs, commits and
    /// the staging area.
    pub fn path_string(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    /// Top-level regular files of the working directory, as absolute paths
    /// in ascending order. The `.gitlet` directory is a directory and so
    /// never shows up.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.file_type().is_file() {
                    Some(entry.path().to_path_buf())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>())
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().exists()
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> anyhow::Result<Bytes> {
        let content = std::fs::read(path.as_ref())
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;

        Ok(content.into())
    }

    /// Snapshot a working file into a blob keyed by its absolute path.
    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let content = self.read_file(path)?;

        Ok(Blob::new(Self::path_string(path), content))
    }

    pub fn write_file(&self, path: impl AsRef<Path>, content: &[u8]) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())
            .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::remove_file(path.as_ref())
            .with_context(|| format!("Failed to remove file: {:?}", path.as_ref()))
    }
}
