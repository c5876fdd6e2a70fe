//! Offline store tests: memory sharing and file round-trips.

use crosspay_wallet_core::{MemoryStore, OfflineStore};

#[test]
fn memory_store_clones_share_one_map() {
    let a = MemoryStore::default();
    let b = a.clone();

    a.set("wallets", "[]").unwrap();

    assert_eq!(b.get("wallets").as_deref(), Some("[]"));
}

#[test]
fn missing_keys_read_as_none() {
    let store = MemoryStore::default();
    assert!(store.get("transactions").is_none());
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use crosspay_wallet_core::{FileStore, OfflineStore};

    #[test]
    fn round_trips_and_overwrites_whole_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::create(dir.path()).unwrap();

        assert!(store.get("wallets").is_none());

        store.set("wallets", "[1]").unwrap();
        assert_eq!(store.get("wallets").as_deref(), Some("[1]"));

        store.set("wallets", "[2]").unwrap();
        assert_eq!(store.get("wallets").as_deref(), Some("[2]"));
    }

    #[test]
    fn state_is_visible_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::create(dir.path())
            .unwrap()
            .set("transactions", "[]")
            .unwrap();

        let reopened = FileStore::create(dir.path()).unwrap();
        assert_eq!(reopened.get("transactions").as_deref(), Some("[]"));
    }
}
