//! `wishlist add <url>` – add a product link.

use anyhow::{bail, Result};

use crate::cli::App;

pub async fn run_add(app: &mut App, url: &str) -> Result<()> {
    app.ensure_writable()?;
    match app.store.add(url).await {
        Some(item) => {
            println!("Added {} (id {}): {}", item.title, item.id, item.url);
            Ok(())
        }
        None => bail!("URL is empty; nothing added"),
    }
}
