//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ResumatchConfig;
use crate::error::{Error, Result};
use crate::ingestion::{FileTextExtractor, IngestPipeline, TextExtract};
use crate::storage::{JsonMetadataStore, MetadataStore};
use crate::types::ResumeRecord;

/// Cloneable handle to shared server state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ResumatchConfig,
    /// Ingestion pipeline over the metadata store
    pipeline: Arc<IngestPipeline>,
    /// Directory where uploaded files are saved
    uploads_dir: PathBuf,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Build state with the default file extractor and JSON store
    pub fn new(config: ResumatchConfig) -> Result<Self> {
        let store = Arc::new(JsonMetadataStore::new(config.storage.metadata_path()));
        Self::with_providers(config, Arc::new(FileTextExtractor), store)
    }

    /// Build state with explicit providers, used by tests to substitute
    /// canned extraction and scratch stores
    pub fn with_providers(
        config: ResumatchConfig,
        extractor: Arc<dyn TextExtract>,
        store: Arc<dyn MetadataStore>,
    ) -> Result<Self> {
        let uploads_dir = config.storage.uploads_dir();
        std::fs::create_dir_all(&uploads_dir)?;
        tracing::info!("Uploads directory: {}", uploads_dir.display());

        match store.load() {
            Ok(resumes) => {
                tracing::info!("Loaded {} resumes from metadata store", resumes.len())
            }
            Err(e) => tracing::warn!("Could not read metadata store: {}", e),
        }

        let pipeline = Arc::new(IngestPipeline::new(&config, extractor, store));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pipeline,
                uploads_dir,
                ready: RwLock::new(true),
            }),
        })
    }

    pub fn config(&self) -> &ResumatchConfig {
        &self.inner.config
    }

    /// Get the ingestion pipeline
    pub fn pipeline(&self) -> &Arc<IngestPipeline> {
        &self.inner.pipeline
    }

    /// Run ingestion for a saved upload off the request thread
    ///
    /// This is the single submission point for ingestion work. The pipeline
    /// itself stays synchronous.
    pub async fn ingest_upload(
        &self,
        file_path: PathBuf,
        original_filename: String,
    ) -> Result<ResumeRecord> {
        let pipeline = self.inner.pipeline.clone();
        tokio::task::spawn_blocking(move || pipeline.ingest(&file_path, &original_filename))
            .await
            .map_err(|e| Error::internal(format!("Ingestion task failed: {}", e)))?
    }

    /// Get the uploads directory
    pub fn uploads_dir(&self) -> &PathBuf {
        &self.inner.uploads_dir
    }

    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
