//! Resume records and their summary projections

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::section::{Chunk, Section, SectionKind};

/// Supported resume file formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileKind {
    #[serde(rename = ".pdf")]
    Pdf,
    #[serde(rename = ".docx")]
    Docx,
    #[serde(rename = ".doc")]
    Doc,
}

impl FileKind {
    /// Detect the file kind from a filename's extension, case-insensitive
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            _ => None,
        }
    }

    /// Dotted extension, as stored in metadata
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
            Self::Doc => ".doc",
        }
    }

    /// Media type used when serving the original file back
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Doc => "application/msword",
        }
    }

    /// Dotted lowercase extension of `filename` for error messages, or the
    /// whole filename when it has no extension
    pub fn extension_label(filename: &str) -> String {
        match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!(".{}", ext.to_lowercase()),
            None => filename.to_string(),
        }
    }
}

/// Per-section digest stored on the resume record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionSummary {
    /// Section label
    pub section: SectionKind,
    /// Section text length in characters
    pub text_length: usize,
    /// Weight inherited from the section label
    pub weight: f32,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            section: section.kind,
            text_length: section.text.chars().count(),
            weight: section.weight(),
        }
    }
}

/// Full metadata record for one ingested resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Short unique identifier
    pub id: String,
    /// Display name derived from the filename stem
    pub name: String,
    /// Filename the client uploaded
    pub original_filename: String,
    /// Where the original file was saved on disk
    pub file_path: PathBuf,
    /// Detected file format
    pub file_ext: FileKind,
    /// Lifecycle status, currently always "active"
    pub status: String,
    /// Ingestion timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Extracted text length in characters
    pub raw_text_length: usize,
    /// Number of parsed sections
    pub section_count: usize,
    /// Number of emitted chunks
    pub chunk_count: usize,
    /// Detected skill tags in canonical casing
    pub skills: Vec<String>,
    /// Per-section digests
    pub sections: Vec<SectionSummary>,
    /// Full chunk payloads
    pub chunks: Vec<Chunk>,
}

/// Listing projection of a resume record, without section or chunk payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    pub name: String,
    pub original_filename: String,
    pub file_ext: FileKind,
    pub status: String,
    pub uploaded_at: DateTime<Utc>,
    pub skills: Vec<String>,
    pub chunk_count: usize,
    pub section_count: usize,
}

impl From<&ResumeRecord> for ResumeSummary {
    fn from(record: &ResumeRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            original_filename: record.original_filename.clone(),
            file_ext: record.file_ext,
            status: record.status.clone(),
            uploaded_at: record.uploaded_at,
            skills: record.skills.clone(),
            chunk_count: record.chunk_count,
            section_count: record.section_count,
        }
    }
}
