//! `PreferenceStore` trait — async key/value interface for local preferences.

use async_trait::async_trait;

use crate::error::DatabaseError;

/// Backend-agnostic preference storage.
///
/// Values are JSON, keyed by `(namespace, key)`. Each namespace is private
/// to one consumer; nothing else reads or writes another consumer's keys.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key has never been written.
    async fn get_preference(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, DatabaseError>;

    /// Insert or overwrite a value. Returns once the write is durable.
    async fn set_preference(
        &self,
        namespace: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), DatabaseError>;

    /// Remove a value. Returns whether a row was deleted.
    async fn delete_preference(&self, namespace: &str, key: &str) -> Result<bool, DatabaseError>;
}
