use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));

    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.set("username", "alice");
    assert_eq!(view.get("username").as_deref(), Some("alice"));
    assert_eq!(view.len(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
}
