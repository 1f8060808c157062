//! Application state shared by the commands: the rewriter and the loaded store.

use anyhow::{bail, Result};
use std::path::Path;
use wishlist_core::config::WishlistConfig;
use wishlist_core::kv::FileKvStore;
use wishlist_core::rewriter::LinkRewriter;
use wishlist_core::store::WishlistStore;

pub struct App {
    pub rewriter: LinkRewriter,
    pub store: WishlistStore<FileKvStore>,
}

impl App {
    /// Load the wishlist from `storage` (or the default state file).
    /// A failed load is reported on stderr and the list starts empty.
    pub async fn open(config: WishlistConfig, storage: Option<&Path>) -> Result<Self> {
        let kv = match storage {
            Some(path) => FileKvStore::at(path),
            None => FileKvStore::open_default()?,
        };
        tracing::debug!(path = %kv.path().display(), "opening wishlist storage");
        let store = WishlistStore::open(
            kv,
            config.storage_key.clone(),
            config.placeholders.clone(),
        )
        .await;
        if let Some(report) = store.load_error_report() {
            eprintln!("Warning: could not load wishlist ({report}); showing an empty list.");
        }
        Ok(Self {
            rewriter: config.rewriter(),
            store,
        })
    }

    /// Refuse to write over a stored list that could not be read.
    pub fn ensure_writable(&self) -> Result<()> {
        if self.store.load_error().is_some() {
            bail!(
                "stored wishlist at {} is unreadable; fix or remove it before making changes",
                self.store.kv().path().display()
            );
        }
        Ok(())
    }
}
