//! `wishlist share` – print the share message (plain text, affiliate links).

use anyhow::Result;
use wishlist_core::share;

use crate::cli::App;

pub fn run_share(app: &App) -> Result<()> {
    let message = share::compose(app.store.items(), &app.rewriter)?;
    tracing::info!(count = app.store.len(), "share message composed");
    println!("{message}");
    Ok(())
}
