pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::drafts::handlers as drafts;
use crate::shares::handlers as shares;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/ats", post(analysis::handle_ats))
        .route("/api/v1/analysis/general", post(analysis::handle_general))
        // Drafts API
        .route(
            "/api/v1/resumes",
            get(drafts::handle_list_drafts).post(drafts::handle_create_draft),
        )
        .route(
            "/api/v1/resumes/:id",
            get(drafts::handle_get_draft)
                .put(drafts::handle_update_draft)
                .delete(drafts::handle_delete_draft),
        )
        .route("/api/v1/resumes/:id/share", post(shares::handle_publish_draft))
        // Shares API
        .route("/api/v1/shares", post(shares::handle_publish))
        .route("/api/v1/shares/:share_id", get(shares::handle_get_share))
        .with_state(state)
}
