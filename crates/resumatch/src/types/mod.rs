//! Core types for the resume ingestion service

pub mod response;
pub mod resume;
pub mod section;

pub use resume::{FileKind, ResumeRecord, ResumeSummary, SectionSummary};
pub use section::{Chunk, Section, SectionKind};
