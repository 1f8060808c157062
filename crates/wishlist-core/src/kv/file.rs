//! JSON-file key-value store under the XDG state dir.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{KeyValueStore, KvError};

/// Key-value store persisted as one JSON object (`key -> string`) on disk.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    /// Default path: `~/.local/state/wishlist/storage.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("wishlist")?;
        Ok(xdg_dirs.get_state_home().join("wishlist").join("storage.json"))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    /// Store backed by `path`. Nothing is touched until the first read or write.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> KvError {
        KvError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, KvError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_err(e)),
        };
        serde_json::from_slice(&bytes).map_err(|source| KvError::Format {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_err(e))?;
            }
        }
        let json = serde_json::to_vec_pretty(map).map_err(|source| KvError::Format {
            path: self.path.clone(),
            source,
        })?;
        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

/// Path of the temp file used for atomic replace (`storage.json` → `storage.json.tmp`).
fn tmp_path(path: &Path) -> PathBuf {
    let mut o = path.as_os_str().to_owned();
    o.push(".tmp");
    PathBuf::from(o)
}

impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "storage slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/tmp/storage.json")).to_string_lossy(),
            "/tmp/storage.json.tmp"
        );
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKvStore::at(dir.path().join("storage.json"));
        assert_eq!(kv.get("@wishlist_data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_parent_dirs_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("storage.json");
        let kv = FileKvStore::at(&path);
        kv.set("a", "[1]").await.unwrap();
        kv.set("b", "two").await.unwrap();
        kv.set("a", "[2]").await.unwrap();

        assert!(path.exists());
        assert!(!tmp_path(&path).exists());

        let reopened = FileKvStore::at(&path);
        assert_eq!(reopened.get("a").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(reopened.get("b").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();
        let kv = FileKvStore::at(&path);
        assert!(matches!(kv.get("k").await, Err(KvError::Format { .. })));
        assert!(matches!(kv.set("k", "v").await, Err(KvError::Format { .. })));
        // The unreadable file is left alone.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKvStore::at(dir.path());
        assert!(matches!(kv.get("k").await, Err(KvError::Io { .. })));
    }
}
