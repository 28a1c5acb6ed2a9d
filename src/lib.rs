//! A greeting endpoint and a small string key-value store behind actix-web.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod kv_store;
pub mod logger;
pub mod types;

pub use error::ApiError;
pub use kv_store::KVStore;
pub use types::Message;
