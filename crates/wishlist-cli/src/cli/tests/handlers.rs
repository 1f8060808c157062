//! Command handler tests against a temp storage file.

use crate::cli::commands::{run_add, run_remove, run_share};
use crate::cli::App;
use wishlist_core::config::WishlistConfig;
use wishlist_core::kv::{FileKvStore, KeyValueStore};

async fn open_app(path: &std::path::Path) -> App {
    App::open(WishlistConfig::default(), Some(path)).await.unwrap()
}

#[tokio::test]
async fn add_then_reopen_shows_item_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut app = open_app(&path).await;
    run_add(&mut app, "https://example.com/a").await.unwrap();
    run_add(&mut app, "https://ozon.ru/product/123").await.unwrap();

    let app = open_app(&path).await;
    assert_eq!(app.store.len(), 2);
    assert_eq!(app.store.items()[0].url, "https://ozon.ru/product/123");
    assert_eq!(app.store.items()[0].title, "Желание #2");
}

#[tokio::test]
async fn add_rejects_empty_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("storage.json")).await;
    assert!(run_add(&mut app, "").await.is_err());
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn remove_unknown_id_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("storage.json")).await;
    run_add(&mut app, "https://example.com/a").await.unwrap();
    run_remove(&mut app, 1).await.unwrap();
    assert_eq!(app.store.len(), 1);

    let id = app.store.items()[0].id;
    run_remove(&mut app, id).await.unwrap();
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn share_on_empty_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let app = open_app(&dir.path().join("storage.json")).await;
    let err = run_share(&app).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[tokio::test]
async fn unreadable_list_blocks_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    FileKvStore::at(&path)
        .set("@wishlist_data", "not json")
        .await
        .unwrap();

    let mut app = open_app(&path).await;
    assert!(app.store.is_empty());
    assert!(run_add(&mut app, "https://example.com").await.is_err());
    assert!(run_remove(&mut app, 1).await.is_err());

    // The unreadable blob is left untouched.
    let raw = FileKvStore::at(&path).get("@wishlist_data").await.unwrap();
    assert_eq!(raw.as_deref(), Some("not json"));
}
