//! End-to-end ingestion orchestration

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::chunker::SectionChunker;
use super::extractor::TextExtract;
use super::sections::SectionParser;
use super::skills::SkillTagger;
use crate::config::ResumatchConfig;
use crate::error::{Error, Result};
use crate::storage::MetadataStore;
use crate::types::{FileKind, ResumeRecord, ResumeSummary, SectionSummary};

/// Runs a file through extraction, parsing, chunking, and tagging, then
/// persists the resulting record
pub struct IngestPipeline {
    extractor: Arc<dyn TextExtract>,
    parser: SectionParser,
    chunker: SectionChunker,
    tagger: SkillTagger,
    store: Arc<dyn MetadataStore>,
}

impl IngestPipeline {
    pub fn new(
        config: &ResumatchConfig,
        extractor: Arc<dyn TextExtract>,
        store: Arc<dyn MetadataStore>,
    ) -> Self {
        Self {
            extractor,
            parser: SectionParser::new(),
            chunker: SectionChunker::new(
                config.chunking.chunk_size_tokens,
                config.chunking.overlap_tokens,
            ),
            tagger: SkillTagger::new(config.tagging.max_tags),
            store,
        }
    }

    /// Ingest one saved upload and persist its metadata record
    ///
    /// `file_path` points at the stored copy, `original_filename` is the
    /// name the client sent. Blocking; callers on the async runtime should
    /// wrap this in `spawn_blocking`.
    pub fn ingest(&self, file_path: &Path, original_filename: &str) -> Result<ResumeRecord> {
        let file_ext = FileKind::from_filename(original_filename).ok_or_else(|| {
            Error::UnsupportedFileType(FileKind::extension_label(original_filename))
        })?;

        let raw_text = self.extractor.extract(file_path)?;
        let sections = self.parser.parse(&raw_text);
        let chunks = self.chunker.chunk(&sections);
        let skills = self.tagger.extract(&sections);

        let name = Path::new(original_filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(original_filename)
            .to_string();

        let mut resumes = self.store.load()?;
        let record = ResumeRecord {
            id: new_resume_id(&resumes),
            name,
            original_filename: original_filename.to_string(),
            file_path: file_path.to_path_buf(),
            file_ext,
            status: "active".to_string(),
            uploaded_at: Utc::now(),
            raw_text_length: raw_text.chars().count(),
            section_count: sections.len(),
            chunk_count: chunks.len(),
            skills,
            sections: sections.iter().map(SectionSummary::from).collect(),
            chunks,
        };
        resumes.push(record.clone());
        self.store.save(&resumes)?;

        tracing::info!(
            "Ingested resume '{}' ({} sections, {} chunks)",
            record.name,
            record.section_count,
            record.chunk_count
        );
        Ok(record)
    }

    /// List all stored resumes as summaries
    pub fn list(&self) -> Result<Vec<ResumeSummary>> {
        let resumes = self.store.load()?;
        Ok(resumes.iter().map(ResumeSummary::from).collect())
    }

    /// Fetch one full record by id
    pub fn get(&self, id: &str) -> Result<ResumeRecord> {
        let resumes = self.store.load()?;
        resumes
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::ResumeNotFound(id.to_string()))
    }

    /// Delete a record and its stored file
    ///
    /// The record is removed even when the file is already gone from disk.
    pub fn delete(&self, id: &str) -> Result<ResumeRecord> {
        let mut resumes = self.store.load()?;
        let position = resumes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::ResumeNotFound(id.to_string()))?;
        let record = resumes.remove(position);

        if record.file_path.exists() {
            std::fs::remove_file(&record.file_path)?;
        }
        self.store.save(&resumes)?;

        tracing::info!("Deleted resume '{}' ({})", record.name, record.id);
        Ok(record)
    }
}

/// Generate a short id that is unique among the existing records
///
/// Eight hex characters collide rarely at this scale; when one does, we
/// just draw again.
fn new_resume_id(existing: &[ResumeRecord]) -> String {
    loop {
        let id = Uuid::new_v4().simple().to_string()[..8].to_string();
        if !existing.iter().any(|r| r.id == id) {
            return id;
        }
    }
}
