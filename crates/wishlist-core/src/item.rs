//! Wishlist item record and its persisted JSON shape.

use serde::{Deserialize, Serialize};

/// Item identifier: creation time in milliseconds since the Unix epoch.
pub type ItemId = i64;

/// A single stored wish: the product link plus display metadata.
///
/// Missing display fields in stored data fall back to defaults so older or
/// hand-edited blobs still load; `id` and `url` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    /// Original destination URL as supplied by the user (never rewritten).
    pub url: String,
    /// Carried through storage untouched; nothing reads it yet.
    #[serde(default)]
    pub reserved: bool,
}

/// Serialize an ordered list of items into the blob stored in the persistent slot.
pub fn to_blob(items: &[WishItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Parse the persistent slot's blob back into an ordered list.
pub fn from_blob(blob: &str) -> serde_json::Result<Vec<WishItem>> {
    serde_json::from_str(blob)
}
