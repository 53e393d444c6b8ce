use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::{debug, info};

use crate::store::{KvStore, StoreError};

/// Stores each collection as a JSON array string under `<prefix>:<collection>`.
pub struct RedisStore {
    client: redis::Client,
    prefix: String,
}

impl RedisStore {
    pub fn new(redis_url: &str, prefix: impl Into<String>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let prefix = prefix.into();
        info!("Redis store initialized (key prefix: {prefix})");
        Ok(Self { client, prefix })
    }

    fn key_for(&self, collection: &str) -> String {
        collection_key(&self.prefix, collection)
    }
}

fn collection_key(prefix: &str, collection: &str) -> String {
    if prefix.is_empty() {
        collection.to_string()
    } else {
        format!("{prefix}:{collection}")
    }
}

#[async_trait]
impl KvStore for RedisStore {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let key = self.key_for(collection);
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(&key).await?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        serde_json::from_str::<Vec<Value>>(&raw).map_err(|e| StoreError::Corrupt {
            collection: collection.to_string(),
            reason: format!("key {key}: {e}"),
        })
    }

    async fn set_all(&self, collection: &str, records: Vec<Value>) -> Result<(), StoreError> {
        let key = self.key_for(collection);
        let body = serde_json::to_string(&records)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(&key, &body).await?;
        debug!("SET {key} ({} records)", records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_key_uses_prefix() {
        assert_eq!(collection_key("folio", "saved_resumes"), "folio:saved_resumes");
    }

    #[test]
    fn test_collection_key_without_prefix() {
        assert_eq!(collection_key("", "shared_resumes"), "shared_resumes");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(
            RedisStore::new("not a url", "folio"),
            Err(StoreError::Redis(_))
        ));
    }
}
