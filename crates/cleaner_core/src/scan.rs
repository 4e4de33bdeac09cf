//! Recursive discovery of reviewable images under a dataset folder.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File extensions accepted for review, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Ordered list of image paths loaded for review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet(Vec<PathBuf>);

impl ImageSet {
    /// Builds a set from arbitrary paths, ordered by their full path string.
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Self {
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Self(paths)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.0.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.0.iter().position(|p| p == path)
    }

    /// Removes the entry at `index`; later entries shift left.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }
}

/// Walk `root` recursively and collect every supported image, sorted by path.
pub fn scan_folder(root: impl AsRef<Path>) -> Result<ImageSet, ScanError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("walkdir error: {}", e);
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        if is_supported_image(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!("found {} images under {}", paths.len(), root.display());
    Ok(ImageSet::from_paths(paths))
}

/// True when the file name ends in `.<ext>` for an allowed extension, ignoring case.
pub fn is_supported_image(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy().to_ascii_lowercase();
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{ext}")))
        }
        None => false,
    }
}
