//! File-backed text storage.

use super::traits::{TextSink, TextSource};
use crate::error::{AddressBookError, AddressBookResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores address book text in a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> AddressBookResult<String> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AddressBookError::NotFound(self.path.display().to_string()),
            _ => AddressBookError::Io(e),
        })
    }
}

impl TextSink for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_text(&self, text: &str) -> AddressBookResult<()> {
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing.txt"));

        match store.read_text() {
            Err(AddressBookError::NotFound(path)) => assert!(path.ends_with("missing.txt")),
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("book.txt"));

        store.write_text("a much longer first version\n").unwrap();
        store.write_text("short\n").unwrap();

        assert_eq!(store.read_text().unwrap(), "short\n");
    }

    #[test]
    fn test_location_is_path() {
        let store = FileStore::new("/tmp/friends.txt");
        assert_eq!(TextSource::location(&store), "/tmp/friends.txt");
        assert_eq!(TextSink::location(&store), "/tmp/friends.txt");
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("no-such-dir").join("book.txt"));

        let result = store.write_text("data");
        assert!(matches!(result, Err(AddressBookError::Io(_))));
    }
}
