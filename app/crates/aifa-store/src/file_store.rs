use crate::{
    KeyValueStore, LoadResult, Result as StoreResult, StoreError, StoredDocument,
};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store persisted as a single JSON document.
///
/// Every write rewrites the whole document using the atomic write pattern:
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`. The file and its directory are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the store file.
    ///
    /// Returns:
    /// - `Ok(LoadResult { document: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadResult { document: None, corruption_error: None })` - file doesn't exist (first launch)
    /// - `Ok(LoadResult { document: None, corruption_error: Some(...) })` - file exists but corrupted
    pub async fn load(&self) -> StoreResult<LoadResult> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store file at {:?} (first launch)", self.path);
                return Ok(LoadResult {
                    document: None,
                    corruption_error: None,
                });
            }
            Err(e) => return Err(StoreError::file_read(self.path.clone(), e)),
        };

        match serde_json::from_str::<StoredDocument>(&contents) {
            Ok(document) => Ok(LoadResult {
                document: Some(document),
                corruption_error: None,
            }),
            Err(e) => {
                warn!("Store file corrupted at {:?}: {e}", self.path);
                Ok(LoadResult {
                    document: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Writes the whole document atomically.
    pub async fn save(&self, document: &StoredDocument) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();

        // Pretty printed for debuggability
        let json = serde_json::to_string_pretty(document)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, self.path.clone(), e));
        }

        debug!("Saved store with {} key(s)", document.values.len());
        Ok(())
    }

    /// Backs up a corrupted store file for debugging.
    ///
    /// Renames `<file>` to `<file>.corrupted.{timestamp}`.
    pub async fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling_path(&format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(Some(backup_path))
    }

    /// Loads the document for a read-modify-write cycle, replacing a corrupted file with an empty one.
    async fn load_for_update(&self) -> StoreResult<StoredDocument> {
        let loaded = self.load().await?;

        if let Some(message) = loaded.corruption_error {
            warn!("Discarding corrupted store contents: {message}");
            self.backup_corrupted().await?;
            return Ok(StoredDocument::default());
        }

        Ok(loaded.document.unwrap_or_default())
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(&format!("tmp.{}", std::process::id()))
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{suffix}"));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let loaded = self.load().await?;

        if let Some(message) = loaded.corruption_error {
            return Err(StoreError::corrupted(self.path.clone(), message));
        }

        Ok(loaded
            .document
            .and_then(|document| document.values.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load_for_update().await?;
        document.values.insert(key.to_string(), value.to_string());
        self.save(&document).await?;

        info!("Stored '{key}'");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load_for_update().await?;
        if document.values.remove(key).is_none() {
            debug!("Remove of absent key '{key}'");
            return Ok(());
        }
        self.save(&document).await?;

        info!("Removed '{key}'");
        Ok(())
    }
}
