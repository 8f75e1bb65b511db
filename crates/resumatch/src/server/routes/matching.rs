//! Job-description matching placeholder

use axum::Json;

use crate::types::response::MatchResponse;

/// POST /api/match
///
/// Accepts an arbitrary JSON payload and returns a fixed placeholder until
/// the scoring pipeline lands. The chunk weights and token estimates stored
/// at ingest time are its inputs.
pub async fn match_resumes(payload: Option<Json<serde_json::Value>>) -> Json<MatchResponse> {
    if let Some(Json(body)) = payload {
        tracing::debug!("Match request payload: {}", body);
    }

    Json(MatchResponse {
        status: "placeholder".to_string(),
        message: "Matching pipeline not yet implemented.".to_string(),
        results: Vec::new(),
    })
}
