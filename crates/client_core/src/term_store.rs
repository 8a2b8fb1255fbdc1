use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use storage::Storage;
use tokio::sync::Mutex;
use tracing::warn;

/// Key/value port for the persisted search term.
#[async_trait]
pub trait TermStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<bool>;
}

#[async_trait]
impl TermStore for Storage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_setting(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_setting(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.delete_setting(key).await
    }
}

#[async_trait]
impl<T: TermStore + ?Sized> TermStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key).await
    }
}

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTermStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TermStore for MemoryTermStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.values.lock().await.remove(key).is_some())
    }
}

/// A string value mirrored into a [`TermStore`] on every change.
///
/// Store failures are logged and swallowed: the in-memory value is always the
/// one the caller set.
pub struct SemiPersistentTerm<T> {
    store: T,
    key: String,
    value: String,
}

impl<T: TermStore> SemiPersistentTerm<T> {
    /// Reads `key`, falling back to `initial` when it is missing, empty or
    /// unreadable, and writes the resolved value back.
    pub async fn load(store: T, key: impl Into<String>, initial: &str) -> Self {
        let key = key.into();
        let value = match store.get(&key).await {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => initial.to_string(),
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read persisted term; using default");
                initial.to_string()
            }
        };

        let term = Self { store, key, value };
        term.persist().await;
        term
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    pub async fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.persist().await;
    }

    async fn persist(&self) {
        if let Err(err) = self.store.set(&self.key, &self.value).await {
            warn!(key = %self.key, error = %err, "failed to persist search term");
        }
    }
}
