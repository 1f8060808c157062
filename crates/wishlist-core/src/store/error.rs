//! Error types for wishlist persistence.

use crate::kv::KvError;

/// Reading the persistent slot failed. The store falls back to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read wishlist storage")]
    Read(#[from] KvError),
    #[error("stored wishlist is unreadable")]
    Corrupt(#[from] serde_json::Error),
}

/// Writing the persistent slot failed. Mutators log this and carry on.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not serialize wishlist")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write wishlist storage")]
    Write(#[from] KvError),
}
