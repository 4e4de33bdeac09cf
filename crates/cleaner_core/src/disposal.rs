//! Sending reviewed images to a recoverable trash location.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisposeError {
    #[error("No image selected")]
    NothingSelected,
    #[error("Could not move {} to trash: {source}", .path.display())]
    Trash {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Moves a reviewed file somewhere recoverable.
pub trait Disposer {
    fn dispose(&self, path: &Path) -> Result<(), DisposeError>;
}

/// The platform recycle bin; files can be restored from there.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTrash;

impl Disposer for SystemTrash {
    fn dispose(&self, path: &Path) -> Result<(), DisposeError> {
        trash::delete(path).map_err(|e| DisposeError::Trash {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn trash_error_names_the_file() {
        let err = DisposeError::Trash {
            path: PathBuf::from("7/x.png"),
            source: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("x.png"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    #[ignore = "touches the real recycle bin of the host"]
    fn system_trash_removes_file_from_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scratch.png");
        File::create(&file).unwrap();
        SystemTrash.dispose(&file).unwrap();
        assert!(!file.exists());
    }
}
