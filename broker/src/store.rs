use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::error::StorageError;

/// A keyed JSON document store over a single directory.
///
/// Each record lives in its own `<key>.json` file and is replaced atomically
/// by writing a temporary sibling and renaming it into place, so concurrent
/// readers observe either the old or the new record, never a torn one.
/// Updates to the same key are last-write-wins.
pub struct Store<T> {
    dir: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("dir", &self.dir).finish()
    }
}

impl<T> Store<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the store, creating its directory if absent.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            _record: PhantomData,
        })
    }

    /// Creates or overwrites the record stored under `key`. Concurrent puts
    /// of the same key are last-write-wins; each writes its own temp file.
    pub async fn put(&self, key: &str, record: &T) -> Result<(), StorageError> {
        static TMP_SEQ: AtomicU64 = AtomicU64::new(0);
        let path = self.record_path(key)?;
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = self.dir.join(format!(".{key}.{seq}.tmp"));
        let body = serde_json::to_vec_pretty(record)?;
        fs::write(&tmp, &body).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Reads the record stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<T>, StorageError> {
        match fs::read(self.record_path(key)?).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Snapshot read of every record currently in the store, in unspecified
    /// order.
    pub async fn get_all(&self) -> Result<Vec<T>, StorageError> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // A record can be deleted between the directory scan and the read.
            let body = match fs::read(&path).await {
                Ok(body) => body,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            };
            records.push(serde_json::from_slice(&body)?);
        }
        Ok(records)
    }

    /// Removes the record stored under `key`. Deleting a missing key is not
    /// an error.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.record_path(key)?).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys come straight from clients; never let one escape the store
        // directory.
        if key.is_empty() || key.contains("..") || key.chars().any(std::path::is_separator) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        value: u32,
    }

    fn record(name: &str, value: u32) -> Record {
        Record {
            name: name.to_string(),
            value,
        }
    }

    #[tokio::test]
    async fn put_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Record> = Store::open(dir.path().join("records")).await.unwrap();

        store.put("a", &record("a", 1)).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(record("a", 1)));
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.put("a", &record("a", 2)).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(record("a", 2)));
    }

    #[tokio::test]
    async fn get_all_returns_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Record> = Store::open(dir.path()).await.unwrap();

        store.put("a", &record("a", 1)).await.unwrap();
        store.put("b", &record("b", 2)).await.unwrap();

        let mut all = store.get_all().await.unwrap();
        all.sort_by(|x, y| x.name.cmp(&y.name));
        assert_eq!(all, vec![record("a", 1), record("b", 2)]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Record> = Store::open(dir.path()).await.unwrap();

        store.put("a", &record("a", 1)).await.unwrap();
        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_keys_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Record> = Store::open(dir.path()).await.unwrap();

        for key in ["", "..", "../evil", "a/b"] {
            assert!(matches!(
                store.put(key, &record("x", 0)).await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[tokio::test]
    async fn get_all_ignores_non_record_files() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Record> = Store::open(dir.path()).await.unwrap();

        store.put("a", &record("a", 1)).await.unwrap();
        std::fs::write(dir.path().join("b.json.tmp"), b"{").unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all, vec![record("a", 1)]);
    }
}
