//! JSON file credential store.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument};

use fintrack_core::error::StorageError;
use fintrack_core::{CredentialKey, CredentialStore, Result};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

type Entries = BTreeMap<String, String>;

fn map_io(err: std::io::Error) -> fintrack_core::Error {
    StorageError::from(err).into()
}

/// Stores credentials as a flat JSON object, e.g.
/// `{"access": "...", "refresh": "..."}`.
///
/// Writers hold an exclusive lock on a sidecar `.lock` file and replace
/// the data file atomically, so concurrent processes never observe a
/// partially written file. On Unix the file is readable by the owner only.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the credential file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn open_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(map_io)
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let json = fs::read_to_string(&self.path).map_err(map_io)?;
        if json.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&json).map_err(|e| {
            StorageError::Corrupt {
                message: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| StorageError::Corrupt {
            message: e.to_string(),
        })?;

        let tmp = self.tmp_path();
        {
            let mut file = File::create(&tmp).map_err(map_io)?;
            file.write_all(json.as_bytes()).map_err(map_io)?;
            file.sync_all().map_err(map_io)?;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&tmp).map_err(map_io)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms).map_err(map_io)?;
        }

        fs::rename(&tmp, &self.path).map_err(map_io)
    }

    /// Read-modify-write under the exclusive lock.
    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<()> {
        let lock_file = self.open_lock()?;
        lock_file.lock_exclusive().map_err(map_io)?;

        let result = self.read_entries().and_then(|mut entries| {
            apply(&mut entries);
            self.write_entries(&entries)
        });

        lock_file.unlock().map_err(map_io)?;
        result
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        let lock_file = self.open_lock()?;
        lock_file.lock_shared().map_err(map_io)?;
        let result = self.read_entries();
        lock_file.unlock().map_err(map_io)?;

        Ok(result?.remove(key.as_str()))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    async fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        debug!(%key, "Storing credential");
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove(&self, key: CredentialKey) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        debug!(%key, "Removing credential");
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::TokenPair;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileCredentialStore) {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested").join("credentials.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert!(store.get(CredentialKey::Access).await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn persists_across_instances() {
        let (_dir, store) = temp_store();
        store.save_pair(&TokenPair::new("A1", "R1")).await.unwrap();

        let reopened = FileCredentialStore::new(store.path());
        assert_eq!(
            reopened.access_token().await.unwrap().unwrap().as_str(),
            "A1"
        );
        assert_eq!(
            reopened.refresh_token().await.unwrap().unwrap().as_str(),
            "R1"
        );
    }

    #[tokio::test]
    async fn file_uses_fixed_key_names() {
        let (_dir, store) = temp_store();
        store.save_pair(&TokenPair::new("A1", "R1")).await.unwrap();

        let json = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({"access": "A1", "refresh": "R1"}));
    }

    #[tokio::test]
    async fn overwrite_keeps_other_key() {
        let (_dir, store) = temp_store();
        store.save_pair(&TokenPair::new("A1", "R1")).await.unwrap();
        store.set(CredentialKey::Access, "A2").await.unwrap();

        assert_eq!(
            store.get(CredentialKey::Access).await.unwrap().as_deref(),
            Some("A2")
        );
        assert_eq!(
            store.get(CredentialKey::Refresh).await.unwrap().as_deref(),
            Some("R1")
        );
    }

    #[tokio::test]
    async fn clear_removes_both_keys() {
        let (_dir, store) = temp_store();
        store.save_pair(&TokenPair::new("A1", "R1")).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        let err = store.get(CredentialKey::Access).await.unwrap_err();
        assert!(matches!(
            err,
            fintrack_core::Error::Storage(StorageError::Corrupt { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn file_is_owner_only() {
        let (_dir, store) = temp_store();
        store.set(CredentialKey::Access, "A1").await.unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
