use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory string map shared between request handlers.
///
/// Cloning hands out another handle to the same map. Readers share the lock,
/// a writer holds it alone, and every guard is released when the call returns.
#[derive(Clone, Default)]
pub struct KVStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl KVStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts `value` under `key`, replacing whatever was there.
    pub async fn set(&self, key: &str, value: String) {
        let mut store = self.inner.write().await;
        store.insert(key.to_string(), value);
    }

    /// Returns the last value written for `key`, or `None` if it was never set.
    pub async fn get(&self, key: &str) -> Option<String> {
        let store = self.inner.read().await;
        store.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
