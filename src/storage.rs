//! All-or-nothing file output shared by saving and PNG export.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::FormatError;

/// Failure while reading or writing a field or raster file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid field file: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl StorageError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write `bytes` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The data goes to a sibling temp file which is synced and then renamed over
/// the target. On failure the temp file is removed and the target is left as
/// it was.
///
/// # Errors
/// Returns [`StorageError::Io`] if the temp file cannot be written or renamed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let temp_path = temp_path_for(path);
    let result = write_and_sync(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::io(path, err));
    }
    Ok(())
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `field.json` becomes `field.json.tmp` in the same directory, so the
/// rename never crosses filesystems.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("field.json");
        write_atomic(&path, b"hello").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("field.json");
        fs::write(&path, "old contents that are longer").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_into_missing_dir_fails_cleanly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("field.json");
        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_failed_rename_keeps_target_and_removes_temp() {
        let dir = tempdir().unwrap();
        // A directory at the target path makes the rename fail.
        let path = dir.path().join("field.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(write_atomic(&path, b"data").is_err());
        assert!(path.join("keep").exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/tmp/out/field.json");
        assert_eq!(temp_path_for(path), PathBuf::from("/tmp/out/field.json.tmp"));
    }
}
