//! Section and chunk types produced by the ingestion pipeline

use serde::{Deserialize, Serialize};

/// Canonical resume section labels
///
/// The weight is a fixed property of the label, used by downstream match
/// scoring to bias toward high-signal sections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Opening summary / objective / profile
    Summary,
    /// Skills and technologies
    Skills,
    /// Work experience
    Experience,
    /// Personal or professional projects
    Projects,
    /// Education, certifications, training
    Education,
    /// Text that did not fall under a recognized heading
    Other,
}

impl SectionKind {
    /// Fixed importance weight for this section label
    pub fn weight(&self) -> f32 {
        match self {
            Self::Summary => 1.0,
            Self::Skills => 1.0,
            Self::Experience => 0.7,
            Self::Projects => 0.5,
            Self::Education => 0.3,
            Self::Other => 0.2,
        }
    }

    /// Lowercase name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

/// A contiguous labeled region of resume text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Section label
    pub kind: SectionKind,
    /// Section text with internal paragraph breaks preserved
    pub text: String,
}

impl Section {
    /// Create a new section
    pub fn new(kind: SectionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Weight inherited from the section label
    pub fn weight(&self) -> f32 {
        self.kind.weight()
    }
}

/// A bounded slice of one section's text, sized for retrieval
///
/// Chunks never span two sections. `chunk_index` is global across all
/// sections of one resume, assigned in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Chunk text
    pub text: String,
    /// Section this chunk was cut from
    pub section: SectionKind,
    /// Weight copied from the owning section
    pub weight: f32,
    /// 0-based running index across the whole resume
    pub chunk_index: u32,
    /// Estimated token count
    pub token_count: u32,
}
