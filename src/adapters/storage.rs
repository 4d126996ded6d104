use crate::domain::ports::Storage;
use crate::utils::error::{RegistrationError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

fn map_io_error(err: std::io::Error, path: &Path) -> RegistrationError {
    if err.kind() == ErrorKind::NotFound {
        RegistrationError::FileMissing {
            path: path.display().to_string(),
        }
    } else {
        RegistrationError::IoError(err)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|e| map_io_error(e, &full_path))
    }

    // Parent directories are not created; a missing directory is a missing file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        fs::write(&full_path, data).map_err(|e| map_io_error(e, &full_path))
    }
}
