//! File storage.
//!
//! [`FileSource`] is the read-only capability the statistics engine needs.
//! [`FileStore`] adds the create/update/delete operations served over HTTP.
//! [`DirectoryStore`] implements both on top of a directory.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{StoreError, StoreResult};
use crate::models::{FileIdentifier, FileUpload};

/// Read access to a set of stored files.
///
/// Implementations must tolerate concurrent `open_for_read` calls; every
/// call returns its own handle.
pub trait FileSource: Send + Sync {
    /// Current list of stored files.
    fn list_files(&self) -> StoreResult<Vec<FileIdentifier>>;

    /// Open one stored file for reading.
    fn open_for_read(&self, file: &FileIdentifier) -> StoreResult<Box<dyn Read + Send>>;
}

/// A file source that can also be modified.
pub trait FileStore: FileSource {
    /// Create every upload. Fails without writing anything if any name is
    /// already stored or repeated within the batch.
    fn add_files(&self, files: &[FileUpload]) -> StoreResult<()>;

    /// Create or replace every upload.
    fn update_files(&self, files: &[FileUpload]) -> StoreResult<()>;

    /// Delete one stored file.
    fn remove_file(&self, name: &str) -> StoreResult<()>;
}

/// Files kept in a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Use `root` as the store directory, creating it if missing.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(root.display().to_string(), e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a client-supplied file name to a path directly under the root.
    fn resolve_name(&self, name: &str) -> StoreResult<PathBuf> {
        let path = Path::new(name);
        let mut components = path.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains('\0') => {
                Ok(self.root.join(path))
            }
            _ => Err(StoreError::InvalidName(name.to_string())),
        }
    }

    fn write_new(path: &Path, upload: &FileUpload) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(upload.name.clone()),
                _ => StoreError::io(upload.name.clone(), e),
            })?;
        file.write_all(&upload.content)
            .map_err(|e| StoreError::io(upload.name.clone(), e))
    }
}

impl FileSource for DirectoryStore {
    fn list_files(&self) -> StoreResult<Vec<FileIdentifier>> {
        let mut files = Vec::new();
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .unwrap_or(&self.root)
                    .display()
                    .to_string();
                StoreError::io(path, io::Error::other(e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                files.push(FileIdentifier::new(relative));
            }
        }
        Ok(files)
    }

    fn open_for_read(&self, file: &FileIdentifier) -> StoreResult<Box<dyn Read + Send>> {
        let path = self.resolve_name(&file.to_string())?;
        let handle = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(file.to_string()),
            _ => StoreError::io(file.to_string(), e),
        })?;
        Ok(Box::new(handle))
    }
}

impl FileStore for DirectoryStore {
    fn add_files(&self, files: &[FileUpload]) -> StoreResult<()> {
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(files.len());
        for upload in files {
            let path = self.resolve_name(&upload.name)?;
            if !seen.insert(upload.name.as_str()) || path.exists() {
                return Err(StoreError::AlreadyExists(upload.name.clone()));
            }
            targets.push(path);
        }

        for (path, upload) in targets.iter().zip(files) {
            Self::write_new(path, upload)?;
        }
        Ok(())
    }

    fn update_files(&self, files: &[FileUpload]) -> StoreResult<()> {
        let targets = files
            .iter()
            .map(|upload| self.resolve_name(&upload.name))
            .collect::<StoreResult<Vec<_>>>()?;

        for (path, upload) in targets.iter().zip(files) {
            fs::write(path, &upload.content).map_err(|e| StoreError::io(upload.name.clone(), e))?;
        }
        Ok(())
    }

    fn remove_file(&self, name: &str) -> StoreResult<()> {
        let path = self.resolve_name(name)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(name.to_string()),
            _ => StoreError::io(name, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, DirectoryStore) {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn names(store: &DirectoryStore) -> Vec<String> {
        store
            .list_files()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn read(store: &DirectoryStore, name: &str) -> String {
        let mut content = String::new();
        store
            .open_for_read(&FileIdentifier::from(name))
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn open_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("files");
        let store = DirectoryStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert!(store.list_files().unwrap().is_empty());
    }

    #[test]
    fn add_then_list_is_sorted() {
        let (_dir, store) = store();
        store
            .add_files(&[FileUpload::new("b.txt", "b"), FileUpload::new("a.txt", "a")])
            .unwrap();
        assert_eq!(names(&store), ["a.txt", "b.txt"]);
        assert_eq!(read(&store, "a.txt"), "a");
    }

    #[test]
    fn add_rejects_existing_file_without_writing_anything() {
        let (_dir, store) = store();
        store.add_files(&[FileUpload::new("a.txt", "old")]).unwrap();

        let err = store
            .add_files(&[FileUpload::new("new.txt", "n"), FileUpload::new("a.txt", "x")])
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(ref n) if n == "a.txt"));
        assert_eq!(names(&store), ["a.txt"]);
        assert_eq!(read(&store, "a.txt"), "old");
    }

    #[test]
    fn add_rejects_duplicate_names_in_one_batch() {
        let (_dir, store) = store();
        let err = store
            .add_files(&[FileUpload::new("a.txt", "1"), FileUpload::new("a.txt", "2")])
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert!(names(&store).is_empty());
    }

    #[test]
    fn update_creates_or_replaces() {
        let (_dir, store) = store();
        store.add_files(&[FileUpload::new("a.txt", "long old content")]).unwrap();
        store
            .update_files(&[FileUpload::new("a.txt", "new"), FileUpload::new("b.txt", "b")])
            .unwrap();
        assert_eq!(read(&store, "a.txt"), "new");
        assert_eq!(read(&store, "b.txt"), "b");
    }

    #[test]
    fn remove_deletes_and_reports_missing() {
        let (_dir, store) = store();
        store.add_files(&[FileUpload::new("a.txt", "a")]).unwrap();
        store.remove_file("a.txt").unwrap();
        assert!(names(&store).is_empty());

        let err = store.remove_file("a.txt").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref n) if n == "a.txt"));
    }

    #[test]
    fn traversal_names_are_rejected() {
        let (_dir, store) = store();
        for bad in ["", "../escape.txt", "/etc/passwd", "sub/dir.txt", ".", ".."] {
            let err = store
                .update_files(&[FileUpload::new(bad, "x")])
                .unwrap_err();
            assert!(matches!(err, StoreError::InvalidName(_)), "{bad:?} gave {err:?}");
        }
        assert!(matches!(
            store.remove_file("../x").unwrap_err(),
            StoreError::InvalidName(_)
        ));
        assert!(matches!(
            store.open_for_read(&FileIdentifier::from("../x")).err(),
            Some(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn listing_skips_subdirectories() {
        let (dir, store) = store();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.txt"), "deep").unwrap();
        fs::write(dir.path().join("top.txt"), "top").unwrap();

        assert_eq!(names(&store), ["top.txt"]);
    }

    #[test]
    fn every_listed_file_can_be_removed() {
        let (dir, store) = store();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.txt"), "deep").unwrap();
        store
            .add_files(&[FileUpload::new("a.txt", "a"), FileUpload::new("b.txt", "b")])
            .unwrap();

        for name in names(&store) {
            assert_eq!(read(&store, &name).len(), 1);
            store.remove_file(&name).unwrap();
        }
        assert!(names(&store).is_empty());
    }

    #[test]
    fn open_missing_file_is_not_found() {
        let (_dir, store) = store();
        let err = store.open_for_read(&FileIdentifier::from("nope.txt")).err();
        assert!(matches!(err, Some(StoreError::NotFound(_))));
    }
}
