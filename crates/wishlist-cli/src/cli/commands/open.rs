//! `wishlist open <id>` – open a wish's affiliate link.

use anyhow::{anyhow, Result};
use wishlist_core::opener::{LinkOpener, SystemUrlHandler};

use crate::cli::App;

pub fn run_open(app: &App, id: i64) -> Result<()> {
    let item = app
        .store
        .get(id)
        .ok_or_else(|| anyhow!("no wish with id {id}"))?;
    let opener = LinkOpener::new(app.rewriter.clone(), SystemUrlHandler);
    let opened = opener.open(&item.url)?;
    println!("Opened {opened}");
    Ok(())
}
