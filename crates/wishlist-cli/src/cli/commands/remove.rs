//! `wishlist remove <id>` – remove a wish.

use anyhow::Result;

use crate::cli::App;

/// Removing an unknown id is not an error; it reports and leaves the list as is.
pub async fn run_remove(app: &mut App, id: i64) -> Result<()> {
    app.ensure_writable()?;
    match app.store.remove(id).await {
        Some(item) => println!("Removed {} (id {id})", item.title),
        None => println!("No wish with id {id}"),
    }
    Ok(())
}
