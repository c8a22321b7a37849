use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("theme"), None);
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let storage = MemoryStorage::with_entry("theme", "light");
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.set("theme", "dark").unwrap();
    assert_eq!(view.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_nothing_without_hydrate() {
    assert_eq!(BrowserStorage.get("theme"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_write_reports_unavailable_without_hydrate() {
    assert_eq!(BrowserStorage.set("theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn write_error_names_the_key() {
    let err = StorageError::Write { key: "theme".into(), reason: "QuotaExceededError".into() };
    assert_eq!(err.to_string(), "storage write for 'theme' failed: QuotaExceededError");
}
