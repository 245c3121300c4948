//! Directory-backed persistence adapter.
//!
//! Each key is stored as `<key>.json` inside a single capability-scoped
//! directory. Writes land in a hidden temporary file first and are renamed
//! over the target, so a crash mid-write leaves the previous snapshot intact.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::storage::{PersistenceAdapter, PersistenceError, PersistenceResult, StorageKey};

/// Persistence adapter storing one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryPersistenceAdapter {
    dir: Arc<Dir>,
}

impl DirectoryPersistenceAdapter {
    /// Wraps an already opened directory capability.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Opens `path` using ambient authority, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open_ambient(path: &Utf8Path) -> PersistenceResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(PersistenceError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(PersistenceError::backend)?;
        Ok(Self::new(dir))
    }
}

fn snapshot_file_name(key: &StorageKey) -> String {
    format!("{key}.json")
}

fn staging_file_name(key: &StorageKey) -> String {
    format!(".{key}.json.tmp")
}

/// Runs blocking file I/O on the tokio blocking pool.
async fn run_blocking<T, F>(operation: F) -> PersistenceResult<T>
where
    F: FnOnce() -> PersistenceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(PersistenceError::backend)?
}

#[async_trait]
impl PersistenceAdapter for DirectoryPersistenceAdapter {
    async fn load(&self, key: &StorageKey) -> PersistenceResult<Option<Vec<u8>>> {
        let dir = Arc::clone(&self.dir);
        let file_name = snapshot_file_name(key);
        run_blocking(move || match dir.read(&file_name) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::backend(err)),
        })
        .await
    }

    async fn save(&self, key: &StorageKey, bytes: &[u8]) -> PersistenceResult<()> {
        let dir = Arc::clone(&self.dir);
        let target = snapshot_file_name(key);
        let staging = staging_file_name(key);
        let contents = bytes.to_vec();
        run_blocking(move || {
            dir.write(&staging, contents)
                .map_err(PersistenceError::backend)?;
            dir.rename(&staging, &dir, &target)
                .map_err(PersistenceError::backend)
        })
        .await
    }
}
