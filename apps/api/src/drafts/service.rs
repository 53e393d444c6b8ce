use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::saved::SavedResume;
use crate::store::{Collection, KvStore};

pub const DRAFTS_COLLECTION: &str = "saved_resumes";

const MAX_NAME_CHARS: usize = 120;

/// CRUD over saved resume drafts.
#[derive(Clone)]
pub struct DraftService {
    drafts: Collection<SavedResume>,
}

impl DraftService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            drafts: Collection::new(store, DRAFTS_COLLECTION),
        }
    }

    /// All drafts, most recently updated first.
    pub async fn list(&self) -> Result<Vec<SavedResume>, AppError> {
        let mut drafts = self.drafts.all().await?;
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(drafts)
    }

    pub async fn get(&self, id: Uuid) -> Result<SavedResume, AppError> {
        self.drafts
            .get(&id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }

    pub async fn create(&self, name: &str, data: ResumeData) -> Result<SavedResume, AppError> {
        let name = validate_name(name)?;
        let now = Utc::now();
        let draft = SavedResume {
            id: Uuid::new_v4(),
            name,
            data,
            created_at: now,
            updated_at: now,
        };
        self.drafts.put(&draft).await?;
        info!("Saved new resume draft {} ({})", draft.id, draft.name);
        Ok(draft)
    }

    /// Replaces a draft's data and optionally renames it. `created_at` is preserved.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        data: ResumeData,
    ) -> Result<SavedResume, AppError> {
        let mut draft = self.get(id).await?;
        if let Some(name) = name {
            draft.name = validate_name(name)?;
        }
        draft.data = data;
        draft.updated_at = Utc::now().max(draft.created_at);
        self.drafts.put(&draft).await?;
        info!("Updated resume draft {id}");
        Ok(draft)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.drafts.delete(&id.to_string()).await? {
            return Err(AppError::NotFound(format!("Resume {id} not found")));
        }
        info!("Deleted resume draft {id}");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "name cannot exceed {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}
