//! CLI for the wishlist.

mod app;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wishlist_core::config;

use app::App;
use commands::{
    run_add, run_completions, run_list, run_man, run_open, run_remove, run_rewrite, run_share,
};

/// Top-level CLI for the wishlist.
#[derive(Debug, Parser)]
#[command(name = "wishlist")]
#[command(about = "Wishlist: keep product links and share affiliate-tagged versions", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/wishlist/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file to use instead of ~/.local/state/wishlist/storage.json.
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a product link to the wishlist.
    Add {
        /// Product URL as copied from the shop.
        url: String,
    },

    /// List wishes, newest first.
    List,

    /// Remove a wish by its ID.
    Remove {
        /// Wish identifier (see `wishlist list`).
        id: i64,
    },

    /// Print the share message with affiliate links.
    Share,

    /// Open a wish's affiliate link in the default browser.
    Open {
        /// Wish identifier (see `wishlist list`).
        id: i64,
    },

    /// Print the affiliate form of a URL without storing it.
    Rewrite {
        /// URL to rewrite.
        url: String,

        /// Also print which partner matched.
        #[arg(long)]
        explain: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // These need neither config nor storage.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let mut app = App::open(cfg, cli.storage.as_deref()).await?;

        match cli.command {
            CliCommand::Add { url } => run_add(&mut app, &url).await?,
            CliCommand::List => run_list(&app),
            CliCommand::Remove { id } => run_remove(&mut app, id).await?,
            CliCommand::Share => run_share(&app)?,
            CliCommand::Open { id } => run_open(&app, id)?,
            CliCommand::Rewrite { url, explain } => run_rewrite(&app, &url, explain),
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
