//! Resume ingestion pipeline
//!
//! Turns an uploaded file into a persisted metadata record in four stages:
//! text extraction, section parsing, chunking, and skill tagging. The
//! [`IngestPipeline`] wires the stages together and owns the metadata store.

mod chunker;
mod extractor;
mod pipeline;
mod sections;
mod skills;

pub use chunker::SectionChunker;
pub use extractor::{FileTextExtractor, TextExtract};
pub use pipeline::IngestPipeline;
pub use sections::{HeuristicSectionClassifier, SectionClassifier, SectionParser};
pub use skills::SkillTagger;
