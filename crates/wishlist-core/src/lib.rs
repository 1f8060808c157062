pub mod config;
pub mod logging;

pub mod item;
pub mod kv;
pub mod opener;
pub mod rewriter;
pub mod share;
pub mod store;
