//! resumatch: Resume ingestion service with section-aware chunking and skill tagging
//!
//! This crate extracts text from uploaded resumes (PDF and Word), splits it into
//! weighted sections by heading, cuts the sections into retrieval-sized chunks,
//! tags known skills, and persists everything to a flat JSON metadata store
//! behind an HTTP API.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod server;
pub mod storage;
pub mod types;

pub use config::ResumatchConfig;
pub use error::{Error, Result};
pub use types::{
    resume::{FileKind, ResumeRecord, ResumeSummary},
    section::{Chunk, Section, SectionKind},
};
