//! Storage backends for the collection store.
//!
//! A backend maps a collection's storage name to one serialized record. The
//! store always reads and writes whole records, so a backend only needs to
//! make a single write visible atomically.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use uuid::Uuid;

use super::error::{CollectionStoreError, Result};

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "pgfind";

/// Extension of a persisted collection record.
const RECORD_EXTENSION: &str = "json";

/// Key-value storage of serialized collections.
pub trait CollectionBackend: fmt::Debug + Send + Sync {
    /// Returns the stored record, or `None` if nothing was written yet.
    fn read(&self, name: &str) -> io::Result<Option<String>>;

    /// Replaces the stored record.
    fn write(&self, name: &str, contents: &str) -> io::Result<()>;
}

/// Stores each collection as `<dir>/<name>.json`.
///
/// On Unix the default directory is `~/.local/share/pgfind`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend in the default XDG data directory.
    ///
    /// # Errors
    ///
    /// Returns `CollectionStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: Self::default_dir()?,
        })
    }

    /// Creates a backend rooted at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the default XDG data directory.
    ///
    /// # Errors
    ///
    /// Returns `CollectionStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CollectionStoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().to_path_buf())
    }

    /// Returns the directory records are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a collection is stored in.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name).with_extension(RECORD_EXTENSION)
    }
}

/// Prefixes an I/O error with the path it happened on.
fn with_path(path: &Path, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}

impl CollectionBackend for FileBackend {
    fn read(&self, name: &str) -> io::Result<Option<String>> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(with_path(&path, e)),
        }
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| with_path(&self.dir, e))?;

        // One temp file per write; concurrent writers race only on the rename
        let path = self.path_for(name);
        let temp_path = self
            .dir
            .join(format!("{}.{}.tmp", name, Uuid::new_v4().simple()));
        fs::write(&temp_path, contents).map_err(|e| with_path(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            with_path(&path, e)
        })
    }
}

/// Keeps records in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> io::Error {
        io::Error::other("memory backend lock poisoned")
    }
}

impl CollectionBackend for MemoryBackend {
    fn read(&self, name: &str) -> io::Result<Option<String>> {
        let records = self.records.lock().map_err(|_| Self::poisoned())?;
        Ok(records.get(name).cloned())
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        let mut records = self.records.lock().map_err(|_| Self::poisoned())?;
        records.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_dir_is_under_pgfind() {
        let dir = FileBackend::default_dir().expect("should get default dir");
        assert!(dir.to_string_lossy().contains("pgfind"), "{:?}", dir);
        assert!(dir.is_absolute());
    }

    #[test]
    fn test_path_for_uses_json_extension() {
        let backend = FileBackend::with_dir("/tmp/pgfind-test");
        assert_eq!(
            backend.path_for("cart"),
            PathBuf::from("/tmp/pgfind-test/cart.json")
        );
    }

    #[test]
    fn test_file_read_missing_is_none() {
        let temp_dir = tempdir().unwrap();
        let backend = FileBackend::with_dir(temp_dir.path());
        assert!(backend.read("cart").unwrap().is_none());
    }

    #[test]
    fn test_file_write_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let backend = FileBackend::with_dir(temp_dir.path().join("nested").join("data"));

        backend.write("favourites", "[]").unwrap();

        assert_eq!(backend.read("favourites").unwrap().as_deref(), Some("[]"));
        let leftovers: Vec<_> = fs::read_dir(backend.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
    }

    #[test]
    fn test_file_write_replaces_record() {
        let temp_dir = tempdir().unwrap();
        let backend = FileBackend::with_dir(temp_dir.path());

        backend.write("cart", "[1]").unwrap();
        backend.write("cart", "[2]").unwrap();

        assert_eq!(backend.read("cart").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert!(backend.read("cart").unwrap().is_none());

        backend.write("cart", "[]").unwrap();
        assert_eq!(backend.read("cart").unwrap().as_deref(), Some("[]"));
        assert!(backend.read("favourites").unwrap().is_none());
    }
}
