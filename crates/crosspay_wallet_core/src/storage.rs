//! Offline persistence: keyed JSON blobs, whole-value overwrite.
//! Two keys exist: the wallet list and the transaction list.

use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key for the wallet list blob.
pub const WALLETS_KEY: &str = "wallets";
/// Storage key for the transaction list blob.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Synchronous key-value persistence for the ledger's offline mirror.
/// Values are JSON strings; a missing key reads as `None`.
pub trait OfflineStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map, so a test (or a second
/// store instance) can observe exactly what the ledger mirrored.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl OfflineStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::{OfflineStore, StorageError};
    use std::fs;
    use std::path::PathBuf;

    /// One `<key>.json` file per key under a data directory.
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn create(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
            let dir = dir.into();
            fs::create_dir_all(&dir)?;
            Ok(FileStore { dir })
        }

        /// Per-user app data directory, e.g. `~/.local/share/crosspay`.
        pub fn default_dir() -> Option<PathBuf> {
            dirs::data_dir().map(|d| d.join("crosspay"))
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{}.json", key))
        }
    }

    impl OfflineStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            fs::read_to_string(self.path_for(key)).ok()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::write(self.path_for(key), value)?;
            Ok(())
        }
    }
}
