//! Resume upload, listing, retrieval, deletion, and file download

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::{
    ResumeDetailResponse, ResumeListResponse, StatusResponse, UploadResponse,
};
use crate::types::{FileKind, ResumeSummary};

/// POST /api/resumes/upload
///
/// Accepts a multipart form with one file field, saves the file under the
/// uploads directory, and runs ingestion on it. The saved file is removed
/// again when ingestion fails.
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("Failed to read multipart field: {}", e)))?
    {
        if let Some(filename) = field.file_name().map(str::to_string) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::internal(format!("Failed to read file: {}", e)))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        Error::InvalidRequest("Upload requires a multipart file field".to_string())
    })?;

    // Clients may send a full path; keep only the final component.
    let filename = std::path::Path::new(&filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();

    if FileKind::from_filename(&filename).is_none() {
        return Err(Error::UnsupportedFileType(FileKind::extension_label(
            &filename,
        )));
    }

    // A random prefix keeps distinct uploads with the same name from
    // colliding on disk.
    let stored_name = format!(
        "{}_{}",
        &Uuid::new_v4().simple().to_string()[..12],
        filename
    );
    let file_path = state.uploads_dir().join(&stored_name);

    tokio::fs::write(&file_path, &bytes)
        .await
        .map_err(|e| Error::storage(format!("Failed to save upload: {}", e)))?;
    tracing::info!("Saved upload '{}' ({} bytes)", stored_name, bytes.len());

    let result = state.ingest_upload(file_path.clone(), filename).await;

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Failed to ingest '{}': {}", file_path.display(), e);
            if let Err(cleanup) = tokio::fs::remove_file(&file_path).await {
                tracing::warn!(
                    "Failed to remove '{}' after ingestion error: {}",
                    file_path.display(),
                    cleanup
                );
            }
            return Err(e);
        }
    };

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        message: format!("Resume '{}' uploaded and processed.", record.name),
        resume: ResumeSummary::from(&record),
    }))
}

/// GET /api/resumes
pub async fn list_resumes(State(state): State<AppState>) -> Result<Json<ResumeListResponse>> {
    let resumes = state.pipeline().list()?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /api/resumes/:id
pub async fn get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeDetailResponse>> {
    let resume = state.pipeline().get(&id)?;
    Ok(Json(ResumeDetailResponse { resume }))
}

/// DELETE /api/resumes/:id
pub async fn delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>> {
    state.pipeline().delete(&id)?;
    Ok(Json(StatusResponse {
        status: "success".to_string(),
        message: "Resume deleted.".to_string(),
    }))
}

/// GET /api/resumes/:id/file
///
/// Serves the originally uploaded file back with its media type.
pub async fn serve_resume_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let record = state.pipeline().get(&id)?;

    let data = tokio::fs::read(&record.file_path)
        .await
        .map_err(|_| Error::ResumeNotFound(format!("{} (file missing on disk)", id)))?;

    let disposition = format!("inline; filename=\"{}\"", record.original_filename);
    let headers = [
        (header::CONTENT_TYPE, record.file_ext.content_type()),
        (header::CONTENT_DISPOSITION, disposition.as_str()),
    ];
    Ok((headers, data).into_response())
}
