use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeData;
use crate::store::Record;

/// An editable draft persisted in the `saved_resumes` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResume {
    pub id: Uuid,
    pub name: String,
    pub data: ResumeData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for SavedResume {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// A published, read-only copy of a resume. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedResume {
    pub share_id: String,
    pub name: String,
    pub data: ResumeData,
    /// Draft the snapshot was taken from, if any.
    #[serde(default)]
    pub source_draft_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Record for SharedResume {
    fn key(&self) -> String {
        self.share_id.clone()
    }
}
