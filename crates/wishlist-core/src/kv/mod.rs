//! Key-value storage primitive the wishlist persists into.
//!
//! The store only needs "get string by key" and "set string by key"; the
//! backing implementation decides where the bytes live.

mod file;
mod memory;

use std::future::Future;
use std::path::PathBuf;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

/// Failure of the underlying storage primitive.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("storage I/O on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage file {} is not a valid key-value map", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Async string slot storage.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if the slot was never written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, KvError>> + Send;

    /// Overwrite the slot under `key`.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), KvError>> + Send;
}
