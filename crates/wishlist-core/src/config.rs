use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rewriter::{default_partners, LinkRewriter, Partner};
use crate::store::{ItemDefaults, STORAGE_KEY};

/// Global configuration loaded from `~/.config/wishlist/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistConfig {
    /// Key of the storage slot holding the serialized list.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Affiliate partners in match priority order. An empty list disables rewriting.
    #[serde(default = "default_partners")]
    pub partners: Vec<Partner>,
    /// Display values for newly added items.
    #[serde(default)]
    pub placeholders: ItemDefaults,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            partners: default_partners(),
            placeholders: ItemDefaults::default(),
        }
    }
}

impl WishlistConfig {
    pub fn rewriter(&self) -> LinkRewriter {
        LinkRewriter::new(self.partners.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wishlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<WishlistConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing the defaults there first if it is missing.
pub fn load_or_init_at(path: &Path) -> Result<WishlistConfig> {
    if !path.exists() {
        let default_cfg = WishlistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: WishlistConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
