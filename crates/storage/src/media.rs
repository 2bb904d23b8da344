//! Upload directory holding problem images, keyed by original filename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};

/// Filesystem directory of uploaded images.
///
/// Files are stored under their original name, so a second upload with the
/// same name replaces the first. Nothing is ever deleted from here.
#[derive(Clone, Debug)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Open the directory, creating it (and parents) if missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under the upload's filename and return the name it was stored as.
    ///
    /// Only the final path component of `original_name` is kept.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let name = stored_name(original_name)?;
        let path = self.root.join(&name);
        fs::write(&path, bytes)?;
        tracing::debug!(file = %path.display(), size = bytes.len(), "Stored upload");
        Ok(name)
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether `name` refers to a regular file in the directory.
    pub fn exists(&self, name: &str) -> bool {
        stored_name(name).is_ok_and(|n| n == name) && self.path_for(name).is_file()
    }
}

/// Reduce an upload name to its final path component, accepting both separators.
fn stored_name(original_name: &str) -> Result<String> {
    let name = original_name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if name.is_empty() || name == "." || name == ".." {
        return Err(StorageError::InvalidFilename(original_name.to_owned()));
    }
    Ok(name.to_owned())
}
