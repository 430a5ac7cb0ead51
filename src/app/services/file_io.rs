//! File access used by the editor core.
//!
//! The core never touches the filesystem directly; it goes through
//! [`FileIo`] so sessions can be driven from memory in tests.

use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

pub trait FileIo {
    /// Read the whole file as text.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the file's contents with `text`.
    fn write(&mut self, path: &Path, text: &str) -> Result<()>;
}

/// [`FileIo`] backed by `std::fs`. No backup and no atomic rename.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileIo;

impl FileIo for FsFileIo {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let mut io = FsFileIo;

        io.write(&path, "first line\nsecond line").unwrap();
        assert_eq!(io.read(&path).unwrap(), "first line\nsecond line");
    }

    #[test]
    fn test_write_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let mut io = FsFileIo;

        io.write(&path, "a much longer original text").unwrap();
        io.write(&path, "short").unwrap();
        assert_eq!(io.read(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FsFileIo.read(&path).unwrap_err();
        assert!(matches!(err, AppError::Read { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("note.txt");

        let err = FsFileIo.write(&path, "text").unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }

    #[test]
    fn test_read_non_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(matches!(FsFileIo.read(&path), Err(AppError::Read { .. })));
    }
}
