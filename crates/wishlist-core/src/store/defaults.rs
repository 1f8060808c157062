use serde::{Deserialize, Serialize};

/// Display values given to a freshly added item until real product data exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaults {
    /// Title is this prefix followed by the item's position count (`Желание #3`).
    pub title_prefix: String,
    pub price: String,
    pub image: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            title_prefix: "Желание #".to_string(),
            price: "Цена не указана".to_string(),
            image: "https://images.unsplash.com/photo-1513885535751-8b9238bd345a?w=500"
                .to_string(),
        }
    }
}
