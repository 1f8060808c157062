//! Wishlist store: ordered items in memory, mirrored to one storage slot.
//!
//! The whole list is serialized into a single slot on every mutation; there
//! are no partial updates. Items are kept newest first.

mod defaults;
mod error;

use std::time::{SystemTime, UNIX_EPOCH};

pub use defaults::ItemDefaults;
pub use error::{LoadError, SaveError};

use crate::item::{self, ItemId, WishItem};
use crate::kv::KeyValueStore;

/// Default storage slot key.
pub const STORAGE_KEY: &str = "@wishlist_data";

/// Handle to the wishlist and the key-value slot backing it.
#[derive(Debug)]
pub struct WishlistStore<S> {
    kv: S,
    key: String,
    defaults: ItemDefaults,
    items: Vec<WishItem>,
    /// Last load failure; always wraps a [`LoadError`].
    load_error: Option<anyhow::Error>,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Empty store over `kv`; nothing is read until [`refresh`](Self::refresh).
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            defaults: ItemDefaults::default(),
            items: Vec::new(),
            load_error: None,
        }
    }

    pub fn with_defaults(mut self, defaults: ItemDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Create the store and load the persisted list. A failed load leaves the
    /// store empty with [`load_error`](Self::load_error) set.
    pub async fn open(kv: S, key: impl Into<String>, defaults: ItemDefaults) -> Self {
        let mut store = Self::new(kv, key).with_defaults(defaults);
        store.refresh().await;
        store
    }

    /// Read the persisted list. An absent slot is an empty list, not an error.
    pub async fn load(&self) -> Result<Vec<WishItem>, LoadError> {
        match self.kv.get(&self.key).await? {
            Some(blob) => Ok(item::from_blob(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the in-memory list with the persisted one.
    pub async fn refresh(&mut self) {
        match self.load().await {
            Ok(items) => {
                tracing::debug!(key = %self.key, count = items.len(), "wishlist loaded");
                self.items = items;
                self.load_error = None;
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                tracing::error!(key = %self.key, "wishlist load failed: {:#}", e);
                self.items.clear();
                self.load_error = Some(e);
            }
        }
    }

    /// Serialize `items` and overwrite the slot.
    pub async fn save(&self, items: &[WishItem]) -> Result<(), SaveError> {
        let blob = item::to_blob(items)?;
        self.kv.set(&self.key, &blob).await?;
        Ok(())
    }

    /// Best-effort write of the current list; failures are logged, not returned.
    async fn persist(&self) {
        if let Err(e) = self.save(&self.items).await {
            tracing::warn!(
                key = %self.key,
                count = self.items.len(),
                "wishlist save failed: {:#}",
                anyhow::Error::new(e)
            );
        }
    }

    /// Add `url` as the newest item.
    ///
    /// Input that is empty or only whitespace is ignored (`None`, nothing
    /// written); a blank paste is treated the same as no input.
    pub async fn add(&mut self, url: &str) -> Option<WishItem> {
        if url.trim().is_empty() {
            tracing::debug!("ignoring add with empty url");
            return None;
        }
        let item = WishItem {
            id: self.next_id(now_millis()),
            title: format!("{}{}", self.defaults.title_prefix, self.items.len() + 1),
            price: self.defaults.price.clone(),
            image: self.defaults.image.clone(),
            url: url.to_string(),
            reserved: false,
        };
        self.items.insert(0, item.clone());
        tracing::debug!(id = item.id, url = %item.url, "item added");
        self.persist().await;
        Some(item)
    }

    /// Remove the item with `id`. Unknown ids are a no-op and write nothing.
    pub async fn remove(&mut self, id: ItemId) -> Option<WishItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(pos);
        tracing::debug!(id, "item removed");
        self.persist().await;
        Some(removed)
    }

    /// Items, newest first.
    pub fn items(&self) -> &[WishItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&WishItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Error from the last load, if it failed.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref().and_then(|e| e.downcast_ref())
    }

    /// Last load failure with its causes, for showing to the user.
    pub fn load_error_report(&self) -> Option<String> {
        self.load_error.as_ref().map(|e| format!("{e:#}"))
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Timestamp id, bumped past the current maximum so ids stay unique.
    fn next_id(&self, now: ItemId) -> ItemId {
        match self.items.iter().map(|i| i.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }
}

fn now_millis() -> ItemId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as ItemId)
        .unwrap_or(0)
}
