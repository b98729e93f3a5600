//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use scaffpack_core::{application::ports::Filesystem, error::ScaffResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ScaffResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> scaffpack_core::error::ScaffError {
    use scaffpack_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("src").join("index.js");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "console.log('hi');").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(
            fs.read_file(&path).unwrap().as_deref(),
            Some("console.log('hi');")
        );
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert_eq!(fs.read_file(&dir.path().join("package.json")).unwrap(), None);
    }

    #[test]
    fn write_without_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&dir.path().join("missing").join("a.js"), "")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
