//! Contract tests for the record store operations, exercised through the
//! in-process implementation. Every property here is one the screens rely
//! on, so the suite doubles as documentation of the store's observable
//! behavior.

use creatorverse::{CreatorDraft, CreatorStore, MemoryStore, StoreError};

fn draft(name: &str, url: &str, image_url: Option<&str>, description: &str) -> CreatorDraft {
    CreatorDraft {
        name: name.to_string(),
        url: url.to_string(),
        image_url: image_url.map(str::to_string),
        description: description.to_string(),
    }
}

#[test]
fn insert_then_get_round_trips_the_draft() {
    let store = MemoryStore::new();

    let inserted = store
        .insert(&draft(
            "Ana",
            "https://x.test",
            Some("https://img.test/ana.png"),
            "makes things",
        ))
        .unwrap();
    let loaded = store.get_by_id(inserted.id).unwrap();

    assert_eq!(loaded, inserted);
    assert_eq!(loaded.name, "Ana");
    assert_eq!(loaded.url, "https://x.test");
    assert_eq!(loaded.image_url.as_deref(), Some("https://img.test/ana.png"));
    assert_eq!(loaded.description, "makes things");
}

#[test]
fn insert_without_an_image_keeps_it_absent() {
    let store = MemoryStore::new();

    let inserted = store
        .insert(&draft("Ana", "https://x.test", None, "d"))
        .unwrap();
    let loaded = store.get_by_id(inserted.id).unwrap();

    assert_eq!(loaded.image_url, None);
    assert!(!loaded.has_image());
}

#[test]
fn update_reflects_the_patch_and_preserves_the_id() {
    let store = MemoryStore::new();
    let inserted = store
        .insert(&draft("Ana", "https://x.test", None, "d"))
        .unwrap();

    let updated = store
        .update(
            inserted.id,
            &draft("Anabel", "https://y.test", Some("https://img.test/a.png"), "dd"),
        )
        .unwrap();
    let loaded = store.get_by_id(inserted.id).unwrap();

    assert_eq!(updated.id, inserted.id);
    assert_eq!(loaded.name, "Anabel");
    assert_eq!(loaded.url, "https://y.test");
    assert_eq!(loaded.image_url.as_deref(), Some("https://img.test/a.png"));
    assert_eq!(loaded.description, "dd");
}

#[test]
fn update_of_a_missing_id_fails_not_found() {
    let store = MemoryStore::new();

    let err = store
        .update(7, &draft("Ana", "https://x.test", None, "d"))
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound(7)));
}

#[test]
fn delete_then_get_fails_not_found() {
    let store = MemoryStore::new();
    let inserted = store
        .insert(&draft("Ana", "https://x.test", None, "d"))
        .unwrap();

    store.delete_by_id(inserted.id).unwrap();
    let err = store.get_by_id(inserted.id).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn deleting_an_already_deleted_id_is_not_an_error() {
    let store = MemoryStore::new();
    let inserted = store
        .insert(&draft("Ana", "https://x.test", None, "d"))
        .unwrap();

    store.delete_by_id(inserted.id).unwrap();
    store.delete_by_id(inserted.id).unwrap();
    store.delete_by_id(999).unwrap();
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let store = MemoryStore::new();
    let first = store
        .insert(&draft("Ana", "https://x.test", None, "d"))
        .unwrap();
    store.delete_by_id(first.id).unwrap();

    let second = store
        .insert(&draft("Ben", "https://y.test", None, "d"))
        .unwrap();

    assert_ne!(second.id, first.id);
    assert!(second.id > first.id);
}

#[test]
fn list_all_returns_records_in_store_order() {
    let store = MemoryStore::new();
    for name in ["Ana", "Ben", "Cleo"] {
        store
            .insert(&draft(name, "https://x.test", None, "d"))
            .unwrap();
    }

    let names: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|creator| creator.name)
        .collect();

    assert_eq!(names, ["Ana", "Ben", "Cleo"]);
}

#[test]
fn list_all_on_an_empty_store_is_empty_not_an_error() {
    let store = MemoryStore::new();
    assert!(store.list_all().unwrap().is_empty());
}
