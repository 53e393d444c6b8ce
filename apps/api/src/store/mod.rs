//! Key-value persistence port.
//!
//! A store holds named collections, each a JSON array of records, and only
//! supports reading or replacing a whole collection. `Collection<T>` layers
//! typed get/put/delete on top of that.
//!
//! Every record is serialized on the way in and deserialized on the way out, so
//! callers always hold their own copy and never share state with the store.
//!
//! Writes through one `Collection` (and its clones) are serialized, so
//! concurrent puts and deletes within a process never drop each other's records.

pub mod file;
pub mod memory;
pub mod redis;

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Corrupt collection '{collection}': {reason}")]
    Corrupt { collection: String, reason: String },
}

/// Backing store for whole collections.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Short backend label for health output and logs.
    fn backend(&self) -> &'static str;

    /// Returns every record in the collection. Unknown collections are empty.
    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Replaces the collection's contents.
    async fn set_all(&self, collection: &str, records: Vec<Value>) -> Result<(), StoreError>;
}

/// A record that can live in a [`Collection`].
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Identifier unique within the collection.
    fn key(&self) -> String;
}

/// Typed view over one named collection.
pub struct Collection<T> {
    store: Arc<dyn KvStore>,
    name: &'static str,
    // Held across get_all/set_all in put and delete.
    write_lock: Arc<Mutex<()>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name,
            write_lock: Arc::clone(&self.write_lock),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn KvStore>, name: &'static str) -> Self {
        Self {
            store,
            name,
            write_lock: Arc::new(Mutex::new(())),
            _record: PhantomData,
        }
    }

    pub async fn all(&self) -> Result<Vec<T>, StoreError> {
        let raw = self.store.get_all(self.name).await?;
        raw.into_iter()
            .enumerate()
            .map(|(idx, value)| {
                serde_json::from_value(value).map_err(|e| StoreError::Corrupt {
                    collection: self.name.to_string(),
                    reason: format!("record {idx}: {e}"),
                })
            })
            .collect()
    }

    pub async fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        Ok(self.all().await?.into_iter().find(|r| r.key() == key))
    }

    /// Inserts or replaces by key. Replacements keep their position; new records are appended.
    pub async fn put(&self, record: &T) -> Result<(), StoreError> {
        let key = record.key();
        let value = serde_json::to_value(record)?;
        let _guard = self.write_lock.lock().await;
        let mut records = self.all().await?;
        let mut values = Vec::with_capacity(records.len() + 1);
        let mut replaced = false;
        for existing in records.drain(..) {
            if existing.key() == key {
                values.push(value.clone());
                replaced = true;
            } else {
                values.push(serde_json::to_value(&existing)?);
            }
        }
        if !replaced {
            values.push(value);
        }
        debug!(collection = self.name, %key, replaced, "put record");
        self.store.set_all(self.name, values).await
    }

    /// Removes the record with `key`. Returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let records = self.all().await?;
        let before = records.len();
        let values = records
            .iter()
            .filter(|r| r.key() != key)
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let removed = values.len() != before;
        if removed {
            self.store.set_all(self.name, values).await?;
        }
        debug!(collection = self.name, %key, removed, "delete record");
        Ok(removed)
    }
}
