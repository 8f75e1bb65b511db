//! Response envelopes for the HTTP API

use serde::{Deserialize, Serialize};

use crate::types::resume::{ResumeRecord, ResumeSummary};

/// Response for a successful resume upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub message: String,
    pub resume: ResumeSummary,
}

/// Response listing all stored resumes
#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

/// Response carrying one full resume record
#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeDetailResponse {
    pub resume: ResumeRecord,
}

/// Generic status acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Response from the match endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub status: String,
    pub message: String,
    pub results: Vec<serde_json::Value>,
}
