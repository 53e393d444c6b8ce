use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::store::{KvStore, StoreError};

/// Stores each collection as a pretty-printed JSON array in `<dir>/<collection>.json`.
pub struct FileStore {
    dir: PathBuf,
    // Writers share one temp path per collection.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        info!("File store ready at {}", dir.display());
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, collection: &str) -> Result<PathBuf, StoreError> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Corrupt {
                collection: collection.to_string(),
                reason: "collection names may only contain [A-Za-z0-9_-]".to_string(),
            });
        }
        Ok(self.dir.join(format!("{collection}.json")))
    }
}

#[async_trait]
impl KvStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let path = self.path_for(collection)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Array(records) => Ok(records),
            other => Err(StoreError::Corrupt {
                collection: collection.to_string(),
                reason: format!("expected a JSON array, found {}", json_kind(&other)),
            }),
        }
    }

    async fn set_all(&self, collection: &str, records: Vec<Value>) -> Result<(), StoreError> {
        let path = self.path_for(collection)?;
        let body = serde_json::to_vec_pretty(&Value::Array(records))?;

        let _guard = self.write_lock.lock().await;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!("Wrote {} bytes to {}", body.len(), path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
