//! Durable credential storage with read-path normalization

use papaya::HashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use crate::error::{ClientError, Result};

/// Storage key for the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key-value backend holding the credential pair.
///
/// Writes are last-write-wins; no lock is held across a read-modify cycle.
/// Reads and writes are synchronous and bounded.
pub trait CredentialStore: Send + Sync + 'static {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Normalize a raw stored value.
///
/// Empty strings and the literal text `"undefined"` are leftovers from a
/// defect where the absent marker itself got written; both read as absent.
pub fn normalize(raw: Option<String>) -> Option<String> {
    match raw {
        Some(v) if v.is_empty() || v == "undefined" => None,
        other => other,
    }
}

/// In-memory store using Papaya HashMap
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(HashMap::new()),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.pin().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.pin().insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.pin().remove(key);
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileStoreContents(BTreeMap<String, String>);

/// JSON-file-backed store, the durable analog of browser local storage.
///
/// The full contents are rewritten on every mutation. A persist failure is
/// logged and the in-memory view stays authoritative for the session.
pub struct FileStore {
    path: PathBuf,
    entries: Arc<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading existing contents if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = HashMap::new();

        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| ClientError::Storage(format!("read {}: {e}", path.display())))?;
            let contents: FileStoreContents = serde_json::from_str(&raw)?;
            let pinned = entries.pin();
            for (key, value) in contents.0 {
                pinned.insert(key, value);
            }
        }

        Ok(Self {
            path,
            entries: Arc::new(entries),
        })
    }

    fn persist(&self) {
        let contents = FileStoreContents(
            self.entries
                .pin()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        let serialized = match serde_json::to_string_pretty(&contents) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "failed to serialize credential store");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "failed to persist credential store");
        }
    }
}

impl CredentialStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.pin().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.pin().insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn delete(&self, key: &str) {
        self.entries.pin().remove(key);
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absent_markers() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(Some("undefined".to_string())), None);
        assert_eq!(
            normalize(Some("abc".to_string())),
            Some("abc".to_string())
        );
        // Only the exact literal is an absent marker
        assert_eq!(
            normalize(Some("Undefined".to_string())),
            Some("Undefined".to_string())
        );
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();

        store.write(ACCESS_TOKEN_KEY, "access_token_123");
        store.write(REFRESH_TOKEN_KEY, "refresh_token_456");

        assert_eq!(
            store.read(ACCESS_TOKEN_KEY),
            Some("access_token_123".to_string())
        );
        assert_eq!(
            store.read(REFRESH_TOKEN_KEY),
            Some("refresh_token_456".to_string())
        );

        // Overwrite is wholesale, not a merge
        store.write(ACCESS_TOKEN_KEY, "rotated");
        assert_eq!(store.read(ACCESS_TOKEN_KEY), Some("rotated".to_string()));

        store.delete(ACCESS_TOKEN_KEY);
        assert_eq!(store.read(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.write(ACCESS_TOKEN_KEY, "abc");
            store.write(REFRESH_TOKEN_KEY, "def");
            store.delete(REFRESH_TOKEN_KEY);
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.read(ACCESS_TOKEN_KEY), Some("abc".to_string()));
        assert_eq!(reopened.read(REFRESH_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.read(ACCESS_TOKEN_KEY), None);
    }
}
