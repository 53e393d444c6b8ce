use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::drafts::DraftService;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::saved::SharedResume;
use crate::store::{Collection, KvStore};

pub const SHARES_COLLECTION: &str = "shared_resumes";

/// Length of the opaque share identifier, in hex characters.
const SHARE_ID_LEN: usize = 12;

const DEFAULT_SHARE_NAME: &str = "Shared resume";

/// Publishes and serves immutable resume snapshots.
#[derive(Clone)]
pub struct ShareService {
    shares: Collection<SharedResume>,
    drafts: DraftService,
}

impl ShareService {
    pub fn new(store: Arc<dyn KvStore>, drafts: DraftService) -> Self {
        Self {
            shares: Collection::new(store, SHARES_COLLECTION),
            drafts,
        }
    }

    /// Stores a snapshot of `data` under a fresh share id.
    pub async fn publish(
        &self,
        name: Option<&str>,
        data: ResumeData,
    ) -> Result<SharedResume, AppError> {
        self.publish_snapshot(name, data, None).await
    }

    /// Snapshots the current contents of a saved draft. Later edits to the
    /// draft do not affect the snapshot.
    pub async fn publish_draft(&self, draft_id: Uuid) -> Result<SharedResume, AppError> {
        let draft = self.drafts.get(draft_id).await?;
        self.publish_snapshot(Some(&draft.name), draft.data, Some(draft.id))
            .await
    }

    pub async fn get(&self, share_id: &str) -> Result<SharedResume, AppError> {
        self.shares
            .get(share_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shared resume {share_id} not found")))
    }

    async fn publish_snapshot(
        &self,
        name: Option<&str>,
        data: ResumeData,
        source_draft_id: Option<Uuid>,
    ) -> Result<SharedResume, AppError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_SHARE_NAME)
            .to_string();

        let mut share_id = new_share_id();
        while self.shares.get(&share_id).await?.is_some() {
            share_id = new_share_id();
        }

        let snapshot = SharedResume {
            share_id,
            name,
            data,
            source_draft_id,
            created_at: Utc::now(),
        };
        self.shares.put(&snapshot).await?;
        info!("Published share snapshot {}", snapshot.share_id);
        Ok(snapshot)
    }
}

fn new_share_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHARE_ID_LEN);
    id
}

/// Public link for a snapshot.
pub fn share_url(base: &str, share_id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), share_id)
}
