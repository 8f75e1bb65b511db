//! API routes for the resumatch server

pub mod matching;
pub mod resumes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Resume management
        .route("/resumes", get(resumes::list_resumes))
        .route("/resumes/:id", get(resumes::get_resume))
        .route("/resumes/:id", delete(resumes::delete_resume))
        .route("/resumes/:id/file", get(resumes::serve_resume_file))
        // Upload - with larger body limit for resume files
        .route(
            "/resumes/upload",
            post(resumes::upload_resume).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Matching
        .route("/match", post(matching::match_resumes))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "resumatch",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Resume ingestion with section-aware chunking and skill tagging",
        "endpoints": {
            "POST /api/resumes/upload": "Upload and ingest a resume (multipart)",
            "GET /api/resumes": "List ingested resumes",
            "GET /api/resumes/:id": "Get full resume details",
            "DELETE /api/resumes/:id": "Delete a resume and its stored file",
            "GET /api/resumes/:id/file": "Download the original file",
            "POST /api/match": "Match resumes against a job description (placeholder)"
        }
    }))
}
